//! # Fixed-Width Arrays
//!
//! Zero-initialized `i32` slots and nullable reference slots.
//!
//! `IntArray::store_bits` takes a raw 32-bit pattern and stores its
//! two's-complement reading, so `0xcafebabe` lands as `-889275714`.

use super::error::{EvalError, EvalResult};

/// A fixed-length array of 32-bit signed integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntArray {
    slots: Vec<i32>,
}

impl IntArray {
    /// Create an array of `len` zeroes
    pub fn new(len: usize) -> Self {
        Self { slots: vec![0; len] }
    }

    /// Get the number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the array has no slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Store a value at `index`
    pub fn store(&mut self, index: usize, value: i32) -> EvalResult<()> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(EvalError::IndexOutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Store a raw 32-bit pattern, reinterpreted as signed
    pub fn store_bits(&mut self, index: usize, bits: u32) -> EvalResult<()> {
        self.store(index, bits as i32)
    }

    /// Load the value at `index`
    pub fn load(&self, index: usize) -> EvalResult<i32> {
        self.slots
            .get(index)
            .copied()
            .ok_or(EvalError::IndexOutOfBounds {
                index,
                len: self.slots.len(),
            })
    }
}

/// A fixed-length array of nullable references
///
/// Every slot starts out null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefArray<T> {
    slots: Vec<Option<T>>,
}

impl<T> RefArray<T> {
    /// Create an array of `len` null slots
    pub fn new(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    /// Get the number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the array has no slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Store a reference at `index`
    pub fn store(&mut self, index: usize, value: T) -> EvalResult<()> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(EvalError::IndexOutOfBounds { index, len })?;
        *slot = Some(value);
        Ok(())
    }

    /// Borrow the element at `index`; null slots are an error
    pub fn get(&self, index: usize) -> EvalResult<&T> {
        match self.slots.get(index) {
            Some(Some(value)) => Ok(value),
            Some(None) => Err(EvalError::NullElement(index)),
            None => Err(EvalError::IndexOutOfBounds {
                index,
                len: self.slots.len(),
            }),
        }
    }

    /// Check if the slot at `index` is null
    pub fn is_null(&self, index: usize) -> EvalResult<bool> {
        self.slots
            .get(index)
            .map(Option::is_none)
            .ok_or(EvalError::IndexOutOfBounds {
                index,
                len: self.slots.len(),
            })
    }

    /// Number of non-null slots
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
