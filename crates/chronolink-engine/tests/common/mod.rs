use chronolink_engine::{Choice, GameEngine, Route, Step, TermId, TermRef};

/// Builds a route of `answerable + 1` steps where step `i` asks for term `i + 1`.
///
/// Decoys use ids `100 + i`, `200 + i` and `300 + i`.
pub fn linear_route(answerable: usize) -> Route {
    let mut steps = Vec::with_capacity(answerable + 1);
    for i in 0..answerable {
        let subject = term_id(i);
        let next = term_id(i + 1);
        steps.push(Step::question(
            i,
            TermRef::new(subject, format!("term {subject}")),
            next,
            [
                Choice::new(next, format!("term {next}")),
                Choice::new(100 + next.0, "decoy a"),
                Choice::new(200 + next.0, "decoy b"),
                Choice::new(300 + next.0, "decoy c"),
            ],
            format!("keyword {i}"),
            format!("explanation {i}"),
        ));
    }
    let last = term_id(answerable);
    steps.push(Step::terminal(
        answerable,
        TermRef::new(last, format!("term {last}")),
    ));
    Route::new(steps)
}

pub fn term_id(index: usize) -> TermId {
    TermId(u32::try_from(index).unwrap())
}

pub fn correct_id(stage: usize) -> TermId {
    term_id(stage + 1)
}

pub fn wrong_id(stage: usize) -> TermId {
    TermId(100 + correct_id(stage).0)
}

pub fn started_engine(answerable: usize) -> GameEngine {
    let route = linear_route(answerable);
    let total_stages = route.total_answerable_steps();
    let mut engine = GameEngine::new();
    engine.start("scenario".into(), route, total_stages);
    engine
}
