use crate::error::SequenceError;
use crate::traits::{Sequence, SequenceInsert, SequenceRemove, SequenceReplace};

fn check_range<S: Sequence>(base: &S, from_index: i64, to_index: i64) -> Result<(), SequenceError> {
    if from_index < base.first_index() {
        return Err(SequenceError::IndexOutOfBounds {
            index: from_index,
            first_index: base.first_index(),
            last_index: base.last_index(),
        });
    }
    if to_index > base.last_index() {
        return Err(SequenceError::IndexOutOfBounds {
            index: to_index,
            first_index: base.first_index(),
            last_index: base.last_index(),
        });
    }
    if from_index > to_index {
        return Err(SequenceError::InvalidIndexRange {
            from_index,
            to_index,
        });
    }
    Ok(())
}

fn check_item_index(index: i64, from_index: i64, to_index: i64) -> Result<(), SequenceError> {
    if index < from_index || index > to_index {
        return Err(SequenceError::IndexOutOfBounds {
            index,
            first_index: from_index,
            last_index: to_index,
        });
    }
    Ok(())
}

fn check_insert_index(index: i64, from_index: i64, to_index: i64) -> Result<(), SequenceError> {
    if index < from_index || index > to_index + 1 {
        return Err(SequenceError::IndexOutOfBounds {
            index,
            first_index: from_index,
            last_index: to_index,
        });
    }
    Ok(())
}

/// Read-only view of a contiguous index range of a base sequence.
///
/// Indices are preserved: `get(i)` forwards to the base at the same `i`, and
/// the view's bounds are exactly the requested `[from_index, to_index]`.
/// A view of a view chains to the ultimate base with no copying.
#[derive(Debug)]
pub struct SubSequenceView<'a, S: Sequence> {
    base: &'a S,
    from_index: i64,
    to_index: i64,
}

impl<'a, S: Sequence> SubSequenceView<'a, S> {
    pub(crate) fn new(base: &'a S, from_index: i64, to_index: i64) -> Result<Self, SequenceError> {
        check_range(base, from_index, to_index)?;
        Ok(Self {
            base,
            from_index,
            to_index,
        })
    }
}

impl<S: Sequence> Sequence for SubSequenceView<'_, S> {
    type Item = S::Item;

    fn first_index(&self) -> i64 {
        self.from_index
    }

    fn last_index(&self) -> i64 {
        self.to_index
    }

    fn get(&self, index: i64) -> Result<&S::Item, SequenceError> {
        check_item_index(index, self.from_index, self.to_index)?;
        self.base.get(index)
    }
}

/// Mutable view of a contiguous index range of a base sequence.
///
/// Reads and writes forward to the base at unchanged indices; each mutation
/// capability is available exactly when the base has it. Structural mutation
/// never moves the view's own bounds: after an insert the last in-range item
/// is pushed beyond `to_index` and out of view, and after a remove the view
/// may reach past the base's new end, at which point reads fail with the
/// base's bounds error. Views are cheap and short-lived; re-create one after
/// structural edits instead of holding it across them.
pub struct SubSequenceViewMut<'a, S: Sequence> {
    base: &'a mut S,
    from_index: i64,
    to_index: i64,
}

impl<'a, S: Sequence> SubSequenceViewMut<'a, S> {
    pub(crate) fn new(
        base: &'a mut S,
        from_index: i64,
        to_index: i64,
    ) -> Result<Self, SequenceError> {
        check_range(base, from_index, to_index)?;
        Ok(Self {
            base,
            from_index,
            to_index,
        })
    }
}

impl<S: Sequence> Sequence for SubSequenceViewMut<'_, S> {
    type Item = S::Item;

    fn first_index(&self) -> i64 {
        self.from_index
    }

    fn last_index(&self) -> i64 {
        self.to_index
    }

    fn get(&self, index: i64) -> Result<&S::Item, SequenceError> {
        check_item_index(index, self.from_index, self.to_index)?;
        self.base.get(index)
    }
}

impl<S: SequenceReplace> SequenceReplace for SubSequenceViewMut<'_, S> {
    fn replace(&mut self, index: i64, item: S::Item) -> Result<S::Item, SequenceError> {
        check_item_index(index, self.from_index, self.to_index)?;
        self.base.replace(index, item)
    }
}

impl<S: SequenceInsert> SequenceInsert for SubSequenceViewMut<'_, S> {
    fn insert(&mut self, index: i64, item: S::Item) -> Result<(), SequenceError> {
        check_insert_index(index, self.from_index, self.to_index)?;
        self.base.insert(index, item)
    }
}

impl<S: SequenceRemove> SequenceRemove for SubSequenceViewMut<'_, S> {
    fn remove(&mut self, index: i64) -> Result<S::Item, SequenceError> {
        check_item_index(index, self.from_index, self.to_index)?;
        self.base.remove(index)
    }
}
