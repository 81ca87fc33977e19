// ============================================================================
// SeriesBuffer: growable, index-addressable storage for one series per run
// ============================================================================

/// Growable, index-addressable container specialized for price series.
///
/// Reads are total: `get` returns a caller-supplied default value for any
/// index at or past the logical length instead of signalling an error, and
/// callers historically rely on that for empty or degenerate series. All
/// access is by value; no reference into the backing storage escapes, so
/// growth relocations can never invalidate anything a caller holds.
///
/// Capacity grows by doubling (minimum 1) and is never released before the
/// buffer is dropped. `clear` and `remove_at` shrink only the logical
/// length. The workload is one series per run with a known upper bound, so
/// trading memory for fewer reallocations is the right default.
#[derive(Debug, Clone)]
pub struct SeriesBuffer<T> {
    data: Vec<T>,
    default_value: T,
}

impl<T: Clone> SeriesBuffer<T> {
    /// A capacity hint of 0 allocates nothing until the first append.
    pub fn new(initial_capacity: usize, default_value: T) -> Self {
        Self {
            data: Vec::with_capacity(initial_capacity),
            default_value,
        }
    }

    /// Appends at the end, doubling capacity when full.
    ///
    /// Returns false only when the allocator refuses the grown backing
    /// storage; the buffer is left unchanged in that case.
    pub fn append(&mut self, value: T) -> bool {
        if self.data.len() == self.data.capacity() {
            let new_capacity = if self.data.capacity() > 0 {
                self.data.capacity() * 2
            } else {
                1
            };
            let additional = new_capacity - self.data.len();
            if self.data.try_reserve_exact(additional).is_err() {
                return false;
            }
        }

        self.data.push(value);
        true
    }

    /// Removes the element at `index`, shifting everything after it left by
    /// one position. O(n) in the elements behind `index`.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.data.len() {
            return false;
        }

        self.data.remove(index);
        true
    }

    /// Total read: out-of-range indices yield the default value.
    pub fn get(&self, index: usize) -> T {
        self.data
            .get(index)
            .cloned()
            .unwrap_or_else(|| self.default_value.clone())
    }

    /// Overwrites in place. False (and no mutation) when `index` is out of
    /// range.
    pub fn set(&mut self, index: usize, value: T) -> bool {
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Resets the logical length to 0. Capacity is retained for reuse.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The most recently appended value, or the default when empty.
    pub fn last(&self) -> T {
        self.data
            .last()
            .cloned()
            .unwrap_or_else(|| self.default_value.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
}

// Ordering is only required for the scan operations, so the bound lives on
// its own impl block rather than on the type.
impl<T: Clone + PartialOrd> SeriesBuffer<T> {
    /// Smallest element in a linear scan, or the default when empty.
    pub fn min(&self) -> T {
        let mut iter = self.data.iter();
        let Some(first) = iter.next() else {
            return self.default_value.clone();
        };

        let mut min_val = first;
        for v in iter {
            if v < min_val {
                min_val = v;
            }
        }
        min_val.clone()
    }

    /// Largest element in a linear scan, or the default when empty.
    pub fn max(&self) -> T {
        let mut iter = self.data.iter();
        let Some(first) = iter.next() else {
            return self.default_value.clone();
        };

        let mut max_val = first;
        for v in iter {
            if v > max_val {
                max_val = v;
            }
        }
        max_val.clone()
    }
}
