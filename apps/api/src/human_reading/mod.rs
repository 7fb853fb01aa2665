// Human reading: a recruiter-style qualitative assessment (engine.rs, one
// external call) and its pure conversion into a bounded score (heuristic.rs).

pub mod engine;
pub mod heuristic;
pub mod models;
pub mod prompts;
