mod error;
mod traits;
mod traverser;

pub mod impls;

pub use error::{SequenceError, TraverserError};
pub use impls::{
    array::ArraySequence,
    delegate::DelegatingSequence,
    empty::EmptySequence,
    view::{SubSequenceView, SubSequenceViewMut},
};
pub use traits::{
    Sequence, SequenceAppend, SequenceInsert, SequencePrepend, SequenceRemove, SequenceReplace,
};
pub use traverser::{Iter, Traverser, TraverserMut, TraverserState};
