//! Chunked FIFO queue
//!
//! Elements are stored in fixed-capacity chunks. Pushing at the back fills the last chunk before
//! a new one is allocated; popping from the front drains the first chunk, which is then kept as a
//! spare for the next allocation.
//!
//! ```
//! use wrapfmt::ChunkedFifo;
//!
//! let mut q: ChunkedFifo<i32> = ChunkedFifo::new();
//! assert_eq!(q.to_string(), "[]");
//!
//! q.push_back(1);
//! q.push_back(2);
//! q.push_back(3);
//! assert_eq!(q.to_string(), "[1, 2, 3]");
//!
//! assert_eq!(q.pop_front(), Some(1));
//! assert_eq!(q.to_string(), "[2, 3]");
//! ```

use alloc::collections::{vec_deque, VecDeque};
use core::iter::{FromIterator, FusedIterator};
use core::{fmt, iter};

use crate::fmt::write_list;

/// A FIFO queue stored as a chain of chunks holding up to `N` elements each
///
/// A chunk size of `0` is treated as `1`.
pub struct ChunkedFifo<T, const N: usize = 128> {
    // NOTE every chunk in the chain is non-empty; all but the first and last are full
    chunks: VecDeque<VecDeque<T>>,
    spare: Option<VecDeque<T>>,
    len: usize,
}

impl<T, const N: usize> ChunkedFifo<T, N> {
    /// Number of elements a single chunk holds
    pub const CHUNK_SIZE: usize = if N == 0 { 1 } else { N };

    /// Creates an empty queue
    ///
    /// No memory is allocated until the first push
    pub fn new() -> Self {
        ChunkedFifo {
            chunks: VecDeque::new(),
            spare: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of chunks currently in use
    pub fn chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Appends an element at the back of the queue
    pub fn push_back(&mut self, item: T) {
        let full = self
            .chunks
            .back()
            .map(|chunk| chunk.len() >= Self::CHUNK_SIZE)
            .unwrap_or(true);

        if full {
            let mut chunk = self
                .spare
                .take()
                .unwrap_or_else(|| VecDeque::with_capacity(Self::CHUNK_SIZE));
            chunk.push_back(item);
            self.chunks.push_back(chunk);
        } else if let Some(chunk) = self.chunks.back_mut() {
            chunk.push_back(item);
        }

        self.len += 1;
    }

    /// Removes the element at the front of the queue
    pub fn pop_front(&mut self) -> Option<T> {
        let front = self.chunks.front_mut()?;
        let item = front.pop_front();

        if front.is_empty() {
            // recycle the drained chunk
            self.spare = self.chunks.pop_front();
        }

        if item.is_some() {
            self.len -= 1;
        }

        item
    }

    /// Returns a reference to the element at the front of the queue
    pub fn front(&self) -> Option<&T> {
        self.chunks.front().and_then(|chunk| chunk.front())
    }

    /// Returns a mutable reference to the element at the front of the queue
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.chunks.front_mut().and_then(|chunk| chunk.front_mut())
    }

    /// Returns a reference to the element at the back of the queue
    pub fn back(&self) -> Option<&T> {
        self.chunks.back().and_then(|chunk| chunk.back())
    }

    /// Removes all the elements from the queue
    pub fn clear(&mut self) {
        while let Some(mut chunk) = self.chunks.pop_front() {
            if self.spare.is_none() {
                chunk.clear();
                self.spare = Some(chunk);
            }
        }

        self.len = 0;
    }

    /// Iterates over the elements, from front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.chunks.iter().flatten(),
            len: self.len,
        }
    }
}

impl<T, const N: usize> Default for ChunkedFifo<T, N> {
    fn default() -> Self {
        ChunkedFifo::new()
    }
}

impl<T, const N: usize> Clone for ChunkedFifo<T, N>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T, const N: usize, const M: usize> PartialEq<ChunkedFifo<T, M>> for ChunkedFifo<T, N>
where
    T: PartialEq,
{
    fn eq(&self, other: &ChunkedFifo<T, M>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, const N: usize> Eq for ChunkedFifo<T, N> where T: Eq {}

impl<T, const N: usize> Extend<T> for ChunkedFifo<T, N> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, const N: usize> FromIterator<T> for ChunkedFifo<T, N> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut fifo = ChunkedFifo::new();
        fifo.extend(iter);
        fifo
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a ChunkedFifo<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, const N: usize> IntoIterator for ChunkedFifo<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> IntoIter<T, N> {
        IntoIter { fifo: self }
    }
}

/// Front-to-back iterator over the elements of a [`ChunkedFifo`]
///
/// [`ChunkedFifo`]: struct.ChunkedFifo.html
pub struct Iter<'a, T> {
    inner: iter::Flatten<vec_deque::Iter<'a, VecDeque<T>>>,
    len: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.inner.next()?;
        self.len -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Owning iterator that drains a [`ChunkedFifo`] from front to back
///
/// [`ChunkedFifo`]: struct.ChunkedFifo.html
pub struct IntoIter<T, const N: usize> {
    fifo: ChunkedFifo<T, N>,
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.fifo.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.fifo.len(), Some(self.fifo.len()))
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> fmt::Display for ChunkedFifo<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self, |f, item| fmt::Display::fmt(item, f))
    }
}

impl<T, const N: usize> fmt::Debug for ChunkedFifo<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self, |f, item| fmt::Debug::fmt(item, f))
    }
}
