use chronolink_engine::{
    AnswerKind, Difficulty, GameEngine, GameSession, ResultSubmission, Transition, final_score,
};

use self::common::{correct_id, started_engine, wrong_id};

mod common;

#[test]
fn test_instant_correct_answer_scores_full_budget() {
    let mut engine = started_engine(3);
    assert_eq!(engine.session().remaining_ticks(), 200);

    engine.answer(correct_id(0));
    engine.commit_feedback();

    assert_eq!(engine.session().score(), 200);
}

#[test]
fn test_correct_answer_after_fifty_ticks_scores_150() {
    let mut engine = started_engine(3);
    for _ in 0..50 {
        engine.tick();
    }
    engine.answer(correct_id(0));
    engine.commit_feedback();

    assert_eq!(engine.session().score(), 150);
}

#[test]
fn test_full_clear() {
    let mut engine = started_engine(3);
    let mut transitions = Vec::new();
    for stage in 0..3 {
        engine.answer(correct_id(stage));
        transitions.push(engine.commit_feedback());
    }

    assert_eq!(
        transitions,
        vec![
            Transition::Advanced { stage: 1 },
            Transition::Advanced { stage: 2 },
            Transition::Completed,
        ]
    );
    let session = engine.session();
    assert_eq!(session.current_stage(), 2);
    assert!(session.is_completed());
    assert!(!session.is_playing());
    assert_eq!(session.score(), 600);
    assert_eq!(session.lives(), 3);
    assert_eq!(
        session.result_submission(),
        Some(ResultSubmission {
            base_score: 600,
            final_lives: 3,
            cleared_steps: 3,
            mistaken_stage_indices: vec![],
        })
    );
}

#[test]
fn test_timeout_then_commit_moves_on() {
    let mut engine = started_engine(3);
    for _ in 0..200 {
        engine.tick();
    }

    let session = engine.session();
    assert_eq!(session.remaining_ticks(), 0);
    assert!(session.is_feedback_phase());
    assert_eq!(session.last_answer_correct(), Some(false));
    // The correct choice is highlighted as selected.
    assert_eq!(session.selected_term_id(), Some(correct_id(0)));
    assert_eq!(
        session.pending_answer().map(|p| p.kind),
        Some(AnswerKind::TimedOut)
    );

    engine.commit_feedback();

    let session = engine.session();
    assert_eq!(session.lives(), 2);
    assert_eq!(session.current_stage(), 1);
    assert_eq!(session.remaining_ticks(), 200);
}

#[test]
fn test_three_timeouts_end_the_game() {
    let mut engine = started_engine(5);
    let mut last = Transition::Ignored;
    for _ in 0..3 {
        for _ in 0..200 {
            engine.tick();
        }
        last = engine.commit_feedback();
    }

    assert_eq!(last, Transition::GameOver);
    let session = engine.session();
    assert_eq!(session.lives(), 0);
    assert_eq!(session.mistaken_stage_indices(), &[0, 1, 2]);
    assert_eq!(session.result_submission().unwrap().cleared_steps, 2);
}

#[test]
fn test_triple_miss_ends_game() {
    let mut engine = started_engine(5);
    for stage in 0..3 {
        engine.answer(wrong_id(stage));
        engine.commit_feedback();
    }

    let session = engine.session();
    assert_eq!(session.lives(), 0);
    assert!(!session.is_playing());
    assert!(!session.is_completed());
    assert!(session.is_game_over());
    assert_eq!(session.mistaken_stage_indices(), &[0, 1, 2]);
}

#[test]
fn test_mixed_run_with_life_bonus() {
    let mut engine = started_engine(4);

    for _ in 0..20 {
        engine.tick();
    }
    engine.answer(correct_id(0));
    engine.commit_feedback();

    engine.answer(wrong_id(1));
    engine.commit_feedback();

    for _ in 0..100 {
        engine.tick();
    }
    engine.answer(correct_id(2));
    engine.commit_feedback();

    engine.answer(correct_id(3));
    assert_eq!(engine.commit_feedback(), Transition::Completed);

    let submission = engine.session().result_submission().unwrap();
    assert_eq!(submission.base_score, 180 + 100 + 200);
    assert_eq!(submission.final_lives, 2);
    assert_eq!(submission.cleared_steps, 4);
    assert_eq!(submission.mistaken_stage_indices, vec![1]);
    assert_eq!(
        final_score(submission.base_score, submission.final_lives, Difficulty::Normal),
        880
    );
}

#[test]
fn test_wrong_answer_on_last_stage_finishes_the_route() {
    let mut engine = started_engine(3);
    engine.answer(correct_id(0));
    engine.commit_feedback();
    engine.answer(correct_id(1));
    engine.commit_feedback();

    engine.answer(wrong_id(2));
    assert_eq!(engine.commit_feedback(), Transition::Completed);

    let session = engine.session();
    assert!(session.is_completed());
    assert!(!session.is_playing());
    assert_eq!(session.current_stage(), 2);
    for _ in 0..250 {
        assert_eq!(engine.tick(), Transition::Ignored);
    }

    let submission = engine.session().result_submission().unwrap();
    assert_eq!(submission.cleared_steps, 3);
    assert_eq!(submission.final_lives, 2);
    assert_eq!(submission.mistaken_stage_indices, vec![2]);
}

#[test]
fn test_terminal_states_absorb_commands() {
    let mut engine = started_engine(1);
    engine.answer(correct_id(0));
    engine.commit_feedback();
    let completed = engine.session().clone();
    assert!(completed.is_completed());

    assert_eq!(engine.tick(), Transition::Ignored);
    assert_eq!(engine.answer(correct_id(0)), Transition::Ignored);
    assert_eq!(engine.commit_feedback(), Transition::Ignored);
    assert_eq!(engine.session(), &completed);
}

#[test]
fn test_reset_clears_everything() {
    let mut engine = started_engine(3);
    engine.tick();
    engine.answer(wrong_id(0));
    engine.commit_feedback();
    engine.answer(correct_id(1));

    engine.reset();

    let session = engine.session();
    assert_eq!(session, &GameSession::default());
    assert_eq!(session.lives(), 3);
    assert_eq!(session.score(), 0);
    assert_eq!(session.current_stage(), 0);
    assert_eq!(session.remaining_ticks(), 0);
    assert!(session.route().is_empty());
    assert!(!session.is_playing());
    assert!(!session.is_completed());
    assert!(!session.is_feedback_phase());
    assert_eq!(session.selected_term_id(), None);
    assert_eq!(session.last_answer_correct(), None);
    assert!(session.mistaken_stage_indices().is_empty());
}

#[test]
fn test_engines_are_independent() {
    let mut first = started_engine(3);
    let second = GameEngine::new();

    first.answer(wrong_id(0));
    first.commit_feedback();

    assert_eq!(first.session().lives(), 2);
    assert_eq!(second.session(), &GameSession::default());
}
