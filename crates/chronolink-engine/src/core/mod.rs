//! Route data supplied by the route provider.
//!
//! - [`Route`] - Ordered, immutable chain of [`Step`]s for one session
//! - [`Step`] - One question: a subject term, its successor and the choices
//! - [`Choice`] - Candidate successor shown to the player
//! - [`TermId`] / [`TermRef`] - Identity and display data of a historical term

pub use self::{route::*, step::*, term::*};

pub(crate) mod route;
pub(crate) mod step;
pub(crate) mod term;
