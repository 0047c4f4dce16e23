use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeapError {
    #[error("heap is full (capacity {0})")]
    Full(usize),
    #[error("heap is empty")]
    Empty,
    #[error("index {index} out of range (size {size})")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Binary max-heap over a fixed-capacity array. The element at index 0 is
/// always the maximum; children of index `i` live at `2i + 1` and `2i + 2`.
pub struct MaxHeap<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> MaxHeap<T>
where
    T: Ord,
{
    /// Creates an empty heap holding at most `capacity` elements. A
    /// zero-capacity heap is legal and immediately full.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Builds a heap out of an existing vector in O(n). Capacity is fixed
    /// at the vector's length, so the resulting heap is full.
    pub fn from_vec(mut data: Vec<T>) -> Self {
        let l = data.len();
        for i in (0..l / 2).rev() {
            Self::sift_down(&mut data, i, l);
        }
        Self { data, capacity: l }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Adds `value` to the heap, or fails with [`HeapError::Full`] when the
    /// heap is at capacity. O(log n).
    pub fn insert(&mut self, value: T) -> Result<(), HeapError> {
        if self.is_full() {
            return Err(HeapError::Full(self.capacity));
        }
        self.data.push(value);
        let last = self.data.len() - 1;
        Self::sift_up(&mut self.data, last);
        Ok(())
    }

    /// Returns the maximum without removing it. O(1).
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the element at heap slot `index`. The last
    /// element takes its place and is then sifted up or down, whichever
    /// the comparison with its new parent calls for. O(log n).
    pub fn delete(&mut self, index: usize) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        if index >= self.data.len() {
            return Err(HeapError::IndexOutOfRange {
                index,
                size: self.data.len(),
            });
        }
        let removed = self.data.swap_remove(index);
        if index < self.data.len() {
            // The replacement was a leaf, so it can only be out of place
            // relative to its new parent or its new children, never both.
            if index > 0 && self.data[index] > self.data[parent(index)] {
                Self::sift_up(&mut self.data, index);
            } else {
                let len = self.data.len();
                Self::sift_down(&mut self.data, index, len);
            }
        }
        Ok(removed)
    }

    /// Removes and returns the maximum. O(log n).
    pub fn pop(&mut self) -> Result<T, HeapError> {
        self.delete(0)
    }

    /// Raises the capacity to `new_capacity`, reallocating the backing
    /// storage. Does nothing when `new_capacity` is not larger than the
    /// current capacity.
    pub fn grow(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity {
            self.data.reserve_exact(new_capacity - self.data.len());
            self.capacity = new_capacity;
        }
    }

    /// Heap-sorts the backing array in place and returns it in ascending
    /// order. Consumes the heap: sorting destroys the heap ordering, so
    /// the structure cannot be used as a heap afterward. O(n log n) time,
    /// O(1) extra space.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        for end in (1..self.data.len()).rev() {
            self.data.swap(0, end);
            Self::sift_down(&mut self.data, 0, end);
        }
        self.data
    }

    fn sift_up(data: &mut [T], start: usize) {
        let mut i = start;
        while i > 0 {
            let p = parent(i);
            if data[i] > data[p] {
                data.swap(i, p);
                i = p;
            } else {
                break;
            }
        }
    }

    // Only indices below `end` are part of the heap; ties between equal
    // children go to the left child.
    fn sift_down(data: &mut [T], start: usize, end: usize) {
        let mut i = start;
        loop {
            let mut largest = i;
            let l = child(i, true);
            let r = child(i, false);
            if l < end && data[l] > data[largest] {
                largest = l;
            }
            if r < end && data[r] > data[largest] {
                largest = r;
            }
            if largest == i {
                return;
            }
            data.swap(i, largest);
            i = largest;
        }
    }
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn child(i: usize, left: bool) -> usize {
    2 * i + if left { 1 } else { 2 }
}
