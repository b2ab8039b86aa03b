use alloc::boxed::Box;
use alloc::format;

/// A single element yielded by the borrowing flavor of [`crate::set::iter`],
/// tagged by the encoding it came from.
///
/// This is the "tagged element" design note of §9: no virtual dispatch, a
/// plain two-variant enum matched at each use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elem<'a> {
    /// An element from an `INT`-encoded set.
    Int(i64),
    /// An element from a `HASH`-encoded set, borrowed from the set's
    /// storage. Valid only until the next mutation of that set (§5).
    Bytes(&'a [u8]),
}

impl<'a> From<Elem<'a>> for crate::element::Element {
    fn from(elem: Elem<'a>) -> Self {
        match elem {
            Elem::Int(v) => crate::element::Element::from_i64(v),
            Elem::Bytes(b) => crate::element::Element::new(b),
        }
    }
}

impl<'a> Elem<'a> {
    /// Materialize into an owned byte string, formatting integers in their
    /// canonical decimal form.
    pub fn to_owned_bytes(self) -> Box<[u8]> {
        match self {
            Elem::Int(v) => format!("{v}").into_bytes().into_boxed_slice(),
            Elem::Bytes(b) => Box::from(b),
        }
    }

    /// The element's byte content, borrowed for `Bytes` and formatted
    /// on-demand (thus allocating) for `Int`.
    ///
    /// Prefer matching on the variant directly when the caller can avoid
    /// the allocation for the `Int` case (e.g. the `INT` intersection fast
    /// path of §4.3 never calls this).
    pub fn as_bytes(&self) -> alloc::borrow::Cow<'a, [u8]> {
        match *self {
            Elem::Int(v) => alloc::borrow::Cow::Owned(format!("{v}").into_bytes()),
            Elem::Bytes(b) => alloc::borrow::Cow::Borrowed(b),
        }
    }
}
