pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Data-contract violation found by [`Route::validate`].
///
/// The engine itself never produces this; it trusts the route it is given.
/// Route loaders call [`Route::validate`] before handing a route over.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RouteError {
    #[display("route has {len} step(s), at least 2 are required")]
    TooShort { len: usize },
    #[display("step at position {position} has sequence index {sequence_index}")]
    SequenceMismatch {
        position: usize,
        sequence_index: usize,
    },
    #[display("step {position} is terminal but is not the last step")]
    EarlyTerminal { position: usize },
    #[display("last step {position} must be terminal (no correct next term, no choices)")]
    MissingTerminal { position: usize },
    #[display("step {position} has {count} choices, expected 4")]
    ChoiceCount { position: usize, count: usize },
    #[display("step {position} has {count} choices matching the correct term, expected 1")]
    CorrectChoiceCount { position: usize, count: usize },
    #[display("step {position} lists term {term_id} more than once")]
    DuplicateChoice { position: usize, term_id: TermId },
}
