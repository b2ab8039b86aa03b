use alloc::boxed::Box;
use alloc::format;
use alloc::vec::Vec;
use core::fmt;

use crate::elem::Elem;

/// An immutable finite byte string, the unit of membership in a
/// [`PolySet`](crate::PolySet).
///
/// Construction eagerly checks whether the bytes are the canonical decimal
/// representation of a signed 64-bit integer and caches the parsed value,
/// so later promotion and algebra fast paths never re-parse.
#[derive(Clone, Eq)]
pub struct Element {
    bytes: Box<[u8]>,
    int_value: Option<i64>,
}

impl Element {
    /// Build an element from raw bytes, checking integer-valuedness once.
    pub fn new(bytes: impl Into<Box<[u8]>>) -> Self {
        let bytes = bytes.into();
        let int_value = parse_canonical_i64(&bytes);
        Self { bytes, int_value }
    }

    /// Build an element from the canonical decimal form of an integer.
    ///
    /// Computes in **O(digits)** time; never allocates more than the
    /// formatted width of `value`.
    pub fn from_i64(value: i64) -> Self {
        let bytes = format!("{value}").into_bytes().into_boxed_slice();
        Self {
            bytes,
            int_value: Some(value),
        }
    }

    /// The element's raw byte content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `Some(v)` iff this element's bytes are the canonical decimal form of
    /// `v`; `None` for any non-integer-valued element.
    pub fn as_i64(&self) -> Option<i64> {
        self.int_value
    }

    /// True iff [`Element::as_i64`] would return `Some`.
    pub fn is_integer_valued(&self) -> bool {
        self.int_value.is_some()
    }

    pub(crate) fn into_bytes(self) -> Box<[u8]> {
        self.bytes
    }

    /// Borrow this element as the tagged form the uniform iterator yields,
    /// without re-parsing: `Int` if construction already recognized it as
    /// integer-valued, `Bytes` otherwise.
    pub fn as_elem(&self) -> Elem<'_> {
        match self.int_value {
            Some(v) => Elem::Int(v),
            None => Elem::Bytes(&self.bytes),
        }
    }
}

/// Returns `Some(v)` iff `s` is the canonical decimal representation of some
/// `i64`: no leading zeros (except the literal `"0"`), no leading `+`, an
/// optional leading `-`, and never an ambiguous form such as `"-0"`.
pub(crate) fn parse_canonical_i64(s: &[u8]) -> Option<i64> {
    if s.is_empty() {
        return None;
    }
    let (negative, digits) = match s.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, s),
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if digits.len() > 1 && digits[0] == b'0' {
        return None;
    }
    if negative && digits == b"0" {
        return None;
    }
    let text = core::str::from_utf8(s).ok()?;
    text.parse::<i64>().ok()
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl core::hash::Hash for Element {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match core::str::from_utf8(&self.bytes) {
            Ok(s) => write!(f, "Element({s:?})"),
            Err(_) => write!(f, "Element({:?})", self.bytes),
        }
    }
}

impl From<&[u8]> for Element {
    fn from(bytes: &[u8]) -> Self {
        Self::new(Vec::from(bytes).into_boxed_slice())
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}
