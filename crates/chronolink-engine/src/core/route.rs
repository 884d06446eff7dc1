use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::RouteError;

use super::step::{CHOICE_COUNT, Step};

/// Ordered chain of steps for one game session.
///
/// A route is supplied once when a session starts and is never modified
/// afterwards. Its last step is terminal, so a route of `n` steps has
/// `n - 1` answerable steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    steps: Vec<Step>,
}

impl Route {
    #[must_use]
    pub const fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Route with no steps, held by an idle engine.
    #[must_use]
    pub const fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> + '_ {
        self.steps.iter()
    }

    /// Number of steps that require an answer (every step but the terminal one).
    #[must_use]
    pub fn total_answerable_steps(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Checks the data contract expected from the route provider.
    ///
    /// - at least two steps
    /// - `sequence_index` matches the position of each step
    /// - only the last step is terminal
    /// - every other step has four distinct choices, exactly one of them correct
    pub fn validate(&self) -> Result<(), RouteError> {
        let len = self.steps.len();
        if len < 2 {
            return Err(RouteError::TooShort { len });
        }

        for (position, step) in self.steps.iter().enumerate() {
            if step.sequence_index != position {
                return Err(RouteError::SequenceMismatch {
                    position,
                    sequence_index: step.sequence_index,
                });
            }

            let is_last = position + 1 == len;
            if is_last {
                if !step.is_terminal() || !step.choices.is_empty() {
                    return Err(RouteError::MissingTerminal { position });
                }
                continue;
            }
            if step.is_terminal() {
                return Err(RouteError::EarlyTerminal { position });
            }
            if step.choices.len() != CHOICE_COUNT {
                return Err(RouteError::ChoiceCount {
                    position,
                    count: step.choices.len(),
                });
            }

            let mut seen = HashSet::with_capacity(CHOICE_COUNT);
            for choice in &step.choices {
                if !seen.insert(choice.term_id) {
                    return Err(RouteError::DuplicateChoice {
                        position,
                        term_id: choice.term_id,
                    });
                }
            }

            let correct = step
                .choices
                .iter()
                .filter(|c| step.is_correct(c.term_id))
                .count();
            if correct != 1 {
                return Err(RouteError::CorrectChoiceCount {
                    position,
                    count: correct,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Choice, TermId, TermRef};

    use super::*;

    fn question(index: usize, subject: u32, next: u32) -> Step {
        Step::question(
            index,
            TermRef::new(subject, format!("term {subject}")),
            next,
            [
                Choice::new(next, format!("term {next}")),
                Choice::new(100 + next, "decoy a"),
                Choice::new(200 + next, "decoy b"),
                Choice::new(300 + next, "decoy c"),
            ],
            "keyword",
            "explanation",
        )
    }

    fn valid_route() -> Route {
        Route::new(vec![
            question(0, 1, 2),
            question(1, 2, 3),
            Step::terminal(2, TermRef::new(3, "term 3")),
        ])
    }

    #[test]
    fn test_total_answerable_steps() {
        assert_eq!(valid_route().total_answerable_steps(), 2);
        assert_eq!(Route::empty().total_answerable_steps(), 0);
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let route = valid_route();
        assert_eq!(route.get(2).map(|step| step.sequence_index), Some(2));
        assert!(route.get(3).is_none());
        assert!(Route::empty().get(0).is_none());
    }

    #[test]
    fn test_valid_route_passes() {
        assert_eq!(valid_route().validate(), Ok(()));
    }

    #[test]
    fn test_single_step_route_is_too_short() {
        let route = Route::new(vec![Step::terminal(0, TermRef::new(1, "only"))]);
        assert_eq!(route.validate(), Err(RouteError::TooShort { len: 1 }));
    }

    #[test]
    fn test_sequence_index_must_match_position() {
        let mut route = valid_route();
        route.steps[1].sequence_index = 5;
        assert_eq!(
            route.validate(),
            Err(RouteError::SequenceMismatch {
                position: 1,
                sequence_index: 5
            })
        );
    }

    #[test]
    fn test_last_step_must_be_terminal() {
        let route = Route::new(vec![question(0, 1, 2), question(1, 2, 3)]);
        assert_eq!(
            route.validate(),
            Err(RouteError::MissingTerminal { position: 1 })
        );
    }

    #[test]
    fn test_terminal_in_the_middle_is_rejected() {
        let route = Route::new(vec![
            question(0, 1, 2),
            Step::terminal(1, TermRef::new(2, "term 2")),
            Step::terminal(2, TermRef::new(3, "term 3")),
        ]);
        assert_eq!(
            route.validate(),
            Err(RouteError::EarlyTerminal { position: 1 })
        );
    }

    #[test]
    fn test_choice_count_is_checked() {
        let mut route = valid_route();
        route.steps[0].choices.pop();
        assert_eq!(
            route.validate(),
            Err(RouteError::ChoiceCount {
                position: 0,
                count: 3
            })
        );
    }

    #[test]
    fn test_correct_choice_must_be_listed() {
        let mut route = valid_route();
        route.steps[1].correct_next_id = Some(TermId(999));
        assert_eq!(
            route.validate(),
            Err(RouteError::CorrectChoiceCount {
                position: 1,
                count: 0
            })
        );
    }

    #[test]
    fn test_duplicate_choices_are_rejected() {
        let mut route = valid_route();
        route.steps[0].choices[3].term_id = TermId(2);
        assert_eq!(
            route.validate(),
            Err(RouteError::DuplicateChoice {
                position: 0,
                term_id: TermId(2)
            })
        );
    }

    #[test]
    fn test_route_json_is_a_plain_array() {
        let json = serde_json::to_value(valid_route()).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 3);
    }
}
