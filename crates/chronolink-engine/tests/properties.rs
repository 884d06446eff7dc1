use chronolink_engine::{GameEngine, GameSession, Transition};
use proptest::prelude::*;

use self::common::{correct_id, started_engine, wrong_id};

mod common;

#[derive(Debug, Clone, Copy)]
enum Command {
    Tick,
    Answer { correct: bool },
    Commit,
}

fn command_strategy() -> impl Strategy<Value = Vec<Command>> {
    let single = prop_oneof![
        // Bursts of ticks so that timeouts are actually reached.
        (1usize..=220).prop_map(|n| vec![Command::Tick; n]),
        any::<bool>().prop_map(|correct| vec![Command::Answer { correct }]),
        Just(vec![Command::Commit]),
    ];
    prop::collection::vec(single, 0..40).prop_map(|chunks| chunks.concat())
}

fn apply(engine: &mut GameEngine, command: Command) -> Transition {
    match command {
        Command::Tick => engine.tick(),
        Command::Answer { correct } => {
            let stage = engine.session().current_stage();
            if correct {
                engine.answer(correct_id(stage))
            } else {
                engine.answer(wrong_id(stage))
            }
        }
        Command::Commit => engine.commit_feedback(),
    }
}

fn check_step(
    before: &GameSession,
    command: Command,
    transition: Transition,
    after: &GameSession,
) -> Result<(), TestCaseError> {
    let committed_correct = matches!(command, Command::Commit)
        && before.last_answer_correct() == Some(true);
    let committed_wrong = matches!(command, Command::Commit)
        && before.last_answer_correct() == Some(false);

    prop_assert!(after.score() >= before.score());
    if after.score() > before.score() {
        prop_assert!(committed_correct, "score rose on {command:?}");
    }

    prop_assert!(after.lives() <= before.lives());
    if committed_wrong {
        prop_assert_eq!(after.lives(), before.lives() - 1);
    } else {
        prop_assert_eq!(after.lives(), before.lives());
    }

    if before.is_feedback_phase() {
        match command {
            Command::Tick => prop_assert_eq!(after.remaining_ticks(), before.remaining_ticks()),
            Command::Answer { .. } => {
                prop_assert_eq!(after.selected_term_id(), before.selected_term_id());
            }
            Command::Commit => {}
        }
    }

    if before.is_finished() {
        prop_assert_eq!(transition, Transition::Ignored);
        prop_assert_eq!(after, before);
    }

    if transition == Transition::Ignored {
        prop_assert_eq!(after, before);
    }

    if after.is_finished() {
        prop_assert!(!after.is_playing());
        prop_assert!(!after.is_feedback_phase());
    }
    if after.is_game_over() {
        prop_assert_eq!(after.lives(), 0);
        prop_assert!(!after.show_explanation());
    }
    if after.is_completed() {
        prop_assert_eq!(after.current_stage(), after.total_stages() - 1);
    }

    if after.is_playing() {
        prop_assert!(after.current_stage() < after.total_stages());
        prop_assert!(after.current_step().is_some_and(|step| !step.is_terminal()));
    }
    if let Some(submission) = after.result_submission() {
        prop_assert!(submission.cleared_steps <= after.total_stages());
    }
    prop_assert!(
        after
            .mistaken_stage_indices()
            .iter()
            .all(|&stage| stage < after.total_stages())
    );

    prop_assert!(after.remaining_ticks() <= 200);
    prop_assert!(
        after
            .mistaken_stage_indices()
            .starts_with(before.mistaken_stage_indices())
    );
    Ok(())
}

proptest! {
    #[test]
    fn test_command_sequences_keep_invariants(
        answerable in 1usize..6,
        commands in command_strategy(),
    ) {
        let mut engine = started_engine(answerable);
        for command in commands {
            let before = engine.session().clone();
            let transition = apply(&mut engine, command);
            check_step(&before, command, transition, engine.session())?;
        }
    }

    #[test]
    fn test_score_is_reproducible_from_tick_trace(
        delays in prop::collection::vec(0u32..200, 1..6),
    ) {
        let mut engine = started_engine(delays.len());
        for (stage, delay) in delays.iter().enumerate() {
            for _ in 0..*delay {
                engine.tick();
            }
            engine.answer(correct_id(stage));
            engine.commit_feedback();
        }

        let expected: u32 = delays.iter().map(|delay| 200 - delay).sum();
        prop_assert!(engine.session().is_completed());
        prop_assert_eq!(engine.session().score(), expected);
    }

    #[test]
    fn test_reset_always_returns_to_idle(
        answerable in 1usize..6,
        commands in command_strategy(),
    ) {
        let mut engine = started_engine(answerable);
        for command in commands {
            apply(&mut engine, command);
        }
        engine.reset();
        prop_assert_eq!(engine.session(), &GameSession::default());
    }
}
