use std::ops::Index;

use crate::error::SequenceError;
use crate::traits::{
    Sequence, SequenceAppend, SequenceInsert, SequencePrepend, SequenceRemove, SequenceReplace,
};
use crate::traverser::Iter;

/// Contiguous sequence over a growable array backing.
///
/// The first index is chosen at construction and only `prepend` moves it;
/// every structural mutation keeps the untouched items at their indices.
#[derive(Clone, Debug)]
pub struct ArraySequence<T> {
    first_index: i64,
    items: Vec<T>,
}

impl<T> ArraySequence<T> {
    pub fn new() -> Self {
        Self::with_first_index(0)
    }

    pub fn with_first_index(first_index: i64) -> Self {
        Self {
            first_index,
            items: Vec::new(),
        }
    }

    pub fn from_items(first_index: i64, items: Vec<T>) -> Self {
        Self { first_index, items }
    }

    fn out_of_bounds(&self, index: i64) -> SequenceError {
        SequenceError::IndexOutOfBounds {
            index,
            first_index: self.first_index,
            last_index: self.first_index + self.items.len() as i64 - 1,
        }
    }

    fn offset(&self, index: i64) -> Result<usize, SequenceError> {
        if index < self.first_index || index >= self.first_index + self.items.len() as i64 {
            return Err(self.out_of_bounds(index));
        }
        Ok((index - self.first_index) as usize)
    }
}

impl<T> Default for ArraySequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence for ArraySequence<T> {
    type Item = T;

    fn first_index(&self) -> i64 {
        self.first_index
    }

    fn last_index(&self) -> i64 {
        self.first_index + self.items.len() as i64 - 1
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: i64) -> Result<&T, SequenceError> {
        let offset = self.offset(index)?;
        Ok(&self.items[offset])
    }
}

impl<T> SequenceReplace for ArraySequence<T> {
    fn replace(&mut self, index: i64, item: T) -> Result<T, SequenceError> {
        let offset = self.offset(index)?;
        Ok(std::mem::replace(&mut self.items[offset], item))
    }
}

impl<T> SequenceInsert for ArraySequence<T> {
    fn insert(&mut self, index: i64, item: T) -> Result<(), SequenceError> {
        if index < self.first_index || index > self.first_index + self.items.len() as i64 {
            return Err(self.out_of_bounds(index));
        }
        self.items.insert((index - self.first_index) as usize, item);
        Ok(())
    }
}

impl<T> SequenceRemove for ArraySequence<T> {
    fn remove(&mut self, index: i64) -> Result<T, SequenceError> {
        let offset = self.offset(index)?;
        Ok(self.items.remove(offset))
    }
}

impl<T> SequenceAppend for ArraySequence<T> {
    fn append(&mut self, item: T) {
        self.items.push(item);
    }
}

impl<T> SequencePrepend for ArraySequence<T> {
    fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
        self.first_index -= 1;
    }
}

impl<T> From<Vec<T>> for ArraySequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(0, items)
    }
}

impl<T> FromIterator<T> for ArraySequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(0, iter.into_iter().collect())
    }
}

impl<T> Extend<T> for ArraySequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: PartialEq> PartialEq for ArraySequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.first_index == other.first_index && self.items == other.items
    }
}

impl<T: Eq> Eq for ArraySequence<T> {}

impl<T> Index<i64> for ArraySequence<T> {
    type Output = T;

    fn index(&self, index: i64) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a ArraySequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, ArraySequence<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
