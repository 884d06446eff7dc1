use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use super::term::{Choice, TermId, TermRef};

/// Number of choices offered by every answerable step.
pub const CHOICE_COUNT: usize = 4;

/// One question unit of a route.
///
/// A step shows its `subject` and asks for the term that follows it in the
/// chain. The last step of a route is terminal: it has no `correct_next_id`,
/// no choices, and is never answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Position of the step in its route.
    pub sequence_index: usize,
    pub subject: TermRef,
    /// Term that follows `subject`, `None` for the terminal step.
    pub correct_next_id: Option<TermId>,
    /// Either empty (terminal step) or exactly [`CHOICE_COUNT`] entries.
    #[serde(default)]
    pub choices: ArrayVec<Choice, CHOICE_COUNT>,
    /// Short label of the relation between `subject` and its successor.
    #[serde(default)]
    pub keyword: String,
    /// Longer description of the relation, shown after answering.
    #[serde(default)]
    pub explanation: String,
}

impl Step {
    /// Creates an answerable step.
    #[must_use]
    pub fn question(
        sequence_index: usize,
        subject: TermRef,
        correct_next_id: impl Into<TermId>,
        choices: [Choice; CHOICE_COUNT],
        keyword: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            sequence_index,
            subject,
            correct_next_id: Some(correct_next_id.into()),
            choices: ArrayVec::from(choices),
            keyword: keyword.into(),
            explanation: explanation.into(),
        }
    }

    /// Creates the terminal step that closes a route.
    #[must_use]
    pub fn terminal(sequence_index: usize, subject: TermRef) -> Self {
        Self {
            sequence_index,
            subject,
            correct_next_id: None,
            choices: ArrayVec::new(),
            keyword: String::new(),
            explanation: String::new(),
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.correct_next_id.is_none()
    }

    /// Returns whether `term_id` is the correct successor of this step.
    ///
    /// Always `false` for the terminal step.
    #[must_use]
    pub fn is_correct(&self, term_id: TermId) -> bool {
        self.correct_next_id == Some(term_id)
    }

    /// Returns the choice whose term is the correct successor, if present.
    #[must_use]
    pub fn correct_choice(&self) -> Option<&Choice> {
        self.choices.iter().find(|c| self.is_correct(c.term_id))
    }
}
