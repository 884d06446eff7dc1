use super::config::Difficulty;

/// Points earned by a correct answer given with `remaining_ticks` left.
///
/// Answering right after the step appears earns the full tick budget and the
/// reward decays linearly to zero at the deadline. The result is a pure
/// function of the tick count, so a score can be reproduced from a tick trace.
#[must_use]
pub const fn score_for_answer(remaining_ticks: u32) -> u32 {
    remaining_ticks
}

/// Score shown on the result screen: the session score plus a per-life bonus.
///
/// # Example
///
/// ```
/// use chronolink_engine::{Difficulty, final_score};
///
/// assert_eq!(final_score(450, 2, Difficulty::Hard), 1050);
/// assert_eq!(final_score(450, 0, Difficulty::Hard), 450);
/// ```
#[must_use]
pub const fn final_score(base_score: u32, final_lives: u32, difficulty: Difficulty) -> u32 {
    base_score + final_lives * difficulty.life_bonus()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_answer_earns_full_budget() {
        assert_eq!(score_for_answer(200), 200);
    }

    #[test]
    fn test_reward_decays_linearly() {
        assert_eq!(score_for_answer(150), 150);
        assert_eq!(score_for_answer(1), 1);
        assert_eq!(score_for_answer(0), 0);
    }

    #[test]
    fn test_final_score_adds_life_bonus() {
        assert_eq!(final_score(600, 3, Difficulty::Easy), 900);
        assert_eq!(final_score(600, 3, Difficulty::Normal), 1200);
        assert_eq!(final_score(0, 1, Difficulty::Hard), 300);
    }
}
