//! Wayfinder Harness: concrete search worlds and plan verification.
//!
//! Worlds implement [`wayfinder_search::SearchProblem`]. The runner drives a
//! world through `search`, replays the returned plan against the world's
//! successor function and packages the result as a report with a content
//! digest.
//!
//! The harness does NOT implement search logic; it delegates to the engine.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digest;
pub mod replay;
pub mod runner;
pub mod worlds;
