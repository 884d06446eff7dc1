//! The game state machine and the rules around it.
//!
//! - [`GameEngine`] - Owns a session and exposes the five commands
//! - [`GameSession`] - Read-only view of lives, score, stage, countdown and phase
//! - [`Phase`] - `Idle`, `Playing`, `Feedback`, `Completed`, `GameOver`
//! - [`GameConfig`] / [`Difficulty`] - Fixed rules and the life bonus table
//! - [`ResultSubmission`] - Payload for the ranking service
//! - [`PlayerName`] - Normalized display name
//!
//! # Game Flow
//!
//! 1. `start` a session with a route; the countdown is full
//! 2. The clock driver calls `tick`; the input driver calls `answer`
//! 3. An answer or a timeout enters feedback, freezing the clock
//! 4. After showing feedback the driver calls `commit_feedback`
//! 5. Repeat until the route is cleared or the lives run out
//!
//! Answers that race with the deadline are resolved by whichever command
//! runs first; the other one finds the session in feedback and is ignored.

pub use self::{
    config::*, game_engine::*, game_session::*, player::*, result::*, scoring::*,
};

mod config;
mod game_engine;
mod game_session;
mod player;
mod result;
mod scoring;
