use alloc::vec::Vec;

/// A compact, sorted, de-duplicated array of `i64`s (the **IS** of §6.2).
///
/// Membership is binary search; insertion and removal keep the array
/// sorted by shifting the tail. This is the right trade-off for the sizes
/// `PolySet` ever lets this grow to (bounded by `Config::int_max`, a few
/// hundred entries by default) — a shift is cheap and a full hash index
/// would cost more memory for no win at this scale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct IntArray {
    values: Vec<i64>,
}

impl IntArray {
    pub(crate) fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub(crate) fn with_first(value: i64) -> Self {
        Self {
            values: alloc::vec![value],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    fn position(&self, value: i64) -> Result<usize, usize> {
        self.values.binary_search(&value)
    }

    /// Returns `true` if `value` was newly inserted.
    pub(crate) fn add(&mut self, value: i64) -> bool {
        match self.position(value) {
            Ok(_) => false,
            Err(index) => {
                self.values.insert(index, value);
                true
            }
        }
    }

    /// Returns `true` if `value` was present and removed.
    pub(crate) fn remove(&mut self, value: i64) -> bool {
        match self.position(value) {
            Ok(index) => {
                self.values.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    pub(crate) fn contains(&self, value: i64) -> bool {
        self.position(value).is_ok()
    }

    pub(crate) fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// Uniformly sample one resident value.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty; callers must check `len()` first, per
    /// §4.1's `random_one` contract.
    pub(crate) fn random(&self) -> i64 {
        let index = fastrand::usize(..self.values.len());
        self.values[index]
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> i64 {
        self.values.remove(index)
    }

    pub(crate) fn iter(&self) -> core::slice::Iter<'_, i64> {
        self.values.iter()
    }
}
