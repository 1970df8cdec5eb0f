//! Owned fixed-capacity integer buffers.
//!
//! A [`Buffer`] is created only by [`BufferPool::allocate`] and returns its
//! bytes to that pool exactly once, when it is released or dropped. Since
//! [`Buffer::release`] takes `self`, no read or write can follow a release.

use std::ops::{Index, IndexMut};

use heapbuf_core::{BufferError, BufferId, Element, ELEMENT_BYTES};

use crate::pool::BufferPool;

/// A contiguous block of `capacity` integers owned by one caller.
///
/// The capacity is fixed at allocation; the backing storage is never grown
/// or shrunk. Every slot is zero until written.
#[derive(Debug)]
pub struct Buffer<'pool> {
    pool: &'pool BufferPool,
    id: BufferId,
    data: Vec<Element>,
}

impl<'pool> Buffer<'pool> {
    pub(crate) fn new(pool: &'pool BufferPool, id: BufferId, data: Vec<Element>) -> Self {
        Self { pool, id, data }
    }

    /// Pool-local identifier of this buffer.
    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: the pool refuses zero-capacity buffers.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes reserved from the pool for this buffer.
    pub fn size_bytes(&self) -> usize {
        self.data.len() * ELEMENT_BYTES
    }

    /// Read the value at `index`.
    pub fn read(&self, index: usize) -> Result<Element, BufferError> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Store `value` at `index`.
    pub fn write(&mut self, index: usize, value: Element) -> Result<(), BufferError> {
        let capacity = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(BufferError::IndexOutOfRange { index, capacity })?;
        *slot = value;
        Ok(())
    }

    /// Write `f(i)` into every slot `i`, in ascending order.
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(usize) -> Element,
    {
        for (i, slot) in self.data.iter_mut().enumerate() {
            *slot = f(i);
        }
    }

    /// All slots as a shared slice.
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    /// All slots as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [Element] {
        &mut self.data
    }

    /// Iterate over values in ascending index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.data.iter()
    }

    /// Iterate over `(index, value)` pairs in ascending index order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, Element)> + '_ {
        self.data.iter().copied().enumerate()
    }

    /// Return the buffer's memory to its pool.
    ///
    /// Equivalent to dropping the buffer; provided so call sites can make
    /// the end of the lifecycle explicit.
    pub fn release(self) {
        drop(self);
    }

    fn out_of_range(&self, index: usize) -> BufferError {
        BufferError::IndexOutOfRange {
            index,
            capacity: self.data.len(),
        }
    }
}

impl Drop for Buffer<'_> {
    fn drop(&mut self) {
        self.pool.release(self.id, self.size_bytes());
    }
}

impl Index<usize> for Buffer<'_> {
    type Output = Element;

    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    fn index(&self, index: usize) -> &Element {
        match self.data.get(index) {
            Some(value) => value,
            None => panic!("{}", self.out_of_range(index)),
        }
    }
}

impl IndexMut<usize> for Buffer<'_> {
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    fn index_mut(&mut self, index: usize) -> &mut Element {
        let capacity = self.data.len();
        match self.data.get_mut(index) {
            Some(value) => value,
            None => panic!("{}", BufferError::IndexOutOfRange { index, capacity }),
        }
    }
}
