use thiserror::Error;

/// Contract violations reported by sequence operations.
///
/// Every rejected operation leaves the sequence unchanged; validation always
/// happens before the first write.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("index {index} out of bounds [{first_index}, {last_index}]")]
    IndexOutOfBounds {
        index: i64,
        first_index: i64,
        last_index: i64,
    },

    #[error("invalid index range [{from_index}, {to_index}]")]
    InvalidIndexRange { from_index: i64, to_index: i64 },

    #[error("no such item")]
    NoSuchItem,

    #[error(transparent)]
    Traverser(#[from] TraverserError),
}

/// Cursor-protocol violations: a move past a boundary, or a cursor-relative
/// mutation without a preceding qualifying move.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TraverserError {
    #[error("no next item")]
    NoNextItem,

    #[error("no previous item")]
    NoPreviousItem,

    #[error("no item to replace")]
    NoItemToReplace,

    #[error("no item to remove")]
    NoItemToRemove,

    #[error("no item to insert before")]
    NoItemToInsertBefore,
}
