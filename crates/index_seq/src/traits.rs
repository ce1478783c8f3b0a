use crate::error::SequenceError;
use crate::impls::view::{SubSequenceView, SubSequenceViewMut};
use crate::traverser::{Iter, Traverser, TraverserMut};

/// Fixed-bounds ordered container addressed by a contiguous `i64` index
/// range.
///
/// - Every index in `[first_index, last_index]` holds exactly one item.
/// - An empty sequence has `last_index == first_index - 1`.
/// - Mutation is opted into through the capability traits
///   ([`SequenceReplace`], [`SequenceInsert`], [`SequenceRemove`],
///   [`SequenceAppend`], [`SequencePrepend`]); a concrete sequence type is
///   characterized by the subset it implements, and the traverser surface is
///   gated on the same bounds. Calling an operation a sequence does not
///   support is a compile error, never a runtime refusal:
///
/// ```compile_fail
/// use index_seq::{EmptySequence, Sequence};
///
/// let mut sequence = EmptySequence::<i64>::new();
/// let mut traverser = sequence.traverse_mut();
/// traverser.remove();
/// ```
pub trait Sequence {
    type Item;

    fn first_index(&self) -> i64;

    /// Index of the last item, `first_index() - 1` when empty.
    fn last_index(&self) -> i64;

    fn get(&self, index: i64) -> Result<&Self::Item, SequenceError>;

    fn len(&self) -> usize {
        (self.last_index() - self.first_index() + 1) as usize
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the first occurrence in forward scan order.
    fn index_of(&self, item: &Self::Item) -> Result<i64, SequenceError>
    where
        Self::Item: PartialEq,
    {
        for index in self.first_index()..=self.last_index() {
            if self.get(index)? == item {
                return Ok(index);
            }
        }
        Err(SequenceError::NoSuchItem)
    }

    /// Index of the first occurrence in backward scan order.
    fn last_index_of(&self, item: &Self::Item) -> Result<i64, SequenceError>
    where
        Self::Item: PartialEq,
    {
        for index in (self.first_index()..=self.last_index()).rev() {
            if self.get(index)? == item {
                return Ok(index);
            }
        }
        Err(SequenceError::NoSuchItem)
    }

    fn contains(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.index_of(item).is_ok()
    }

    /// Structural equality across sequence implementations: same bounds and
    /// pairwise-equal items.
    fn eq_sequence<O>(&self, other: &O) -> bool
    where
        O: Sequence<Item = Self::Item> + ?Sized,
        Self::Item: PartialEq,
    {
        if self.first_index() != other.first_index() || self.last_index() != other.last_index() {
            return false;
        }
        (self.first_index()..=self.last_index())
            .all(|index| self.get(index).ok() == other.get(index).ok())
    }

    /// Read-only traverser positioned before the first item.
    fn traverse(&self) -> Traverser<'_, Self>
    where
        Self: Sized,
    {
        Traverser::new(self)
    }

    /// Read-only traverser whose first `next` visits `start_index`. Valid
    /// start positions are `[first_index, last_index + 1]`.
    fn traverse_from(&self, start_index: i64) -> Result<Traverser<'_, Self>, SequenceError>
    where
        Self: Sized,
    {
        Traverser::starting_at(self, start_index)
    }

    /// Mutating traverser positioned before the first item. Which mutations
    /// it offers follows from the capability traits of `Self`.
    fn traverse_mut(&mut self) -> TraverserMut<'_, Self>
    where
        Self: Sized,
    {
        TraverserMut::new(self)
    }

    fn traverse_mut_from(
        &mut self,
        start_index: i64,
    ) -> Result<TraverserMut<'_, Self>, SequenceError>
    where
        Self: Sized,
    {
        TraverserMut::starting_at(self, start_index)
    }

    /// Non-copying view of `[from_index, to_index]`. Indices are preserved:
    /// the view's bounds are the requested range, not renumbered from zero.
    fn view(
        &self,
        from_index: i64,
        to_index: i64,
    ) -> Result<SubSequenceView<'_, Self>, SequenceError>
    where
        Self: Sized,
    {
        SubSequenceView::new(self, from_index, to_index)
    }

    /// Mutable counterpart of [`view`](Sequence::view); forwards the base's
    /// mutation capabilities at unchanged indices.
    fn view_mut(
        &mut self,
        from_index: i64,
        to_index: i64,
    ) -> Result<SubSequenceViewMut<'_, Self>, SequenceError>
    where
        Self: Sized,
    {
        SubSequenceViewMut::new(self, from_index, to_index)
    }

    fn iter(&self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }
}

/// Overwrite capability.
pub trait SequenceReplace: Sequence {
    /// Replaces the item at an occupied index, returning the previous item.
    fn replace(&mut self, index: i64, item: Self::Item) -> Result<Self::Item, SequenceError>;
}

/// Insert capability. Valid positions are `[first_index, last_index + 1]`;
/// the item lands at `index` and every item at or above it shifts up by one,
/// moving `last_index` with them.
pub trait SequenceInsert: Sequence {
    fn insert(&mut self, index: i64, item: Self::Item) -> Result<(), SequenceError>;
}

/// Remove capability. Items above the removed index shift down by one,
/// moving `last_index` with them.
pub trait SequenceRemove: Sequence {
    fn remove(&mut self, index: i64) -> Result<Self::Item, SequenceError>;
}

/// Grow-at-the-end capability: the new item takes `last_index + 1`.
pub trait SequenceAppend: Sequence {
    fn append(&mut self, item: Self::Item);
}

/// Grow-at-the-front capability: the new item takes `first_index - 1`, so
/// existing items keep their indices.
pub trait SequencePrepend: Sequence {
    fn prepend(&mut self, item: Self::Item);
}
