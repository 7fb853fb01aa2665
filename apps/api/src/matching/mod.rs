// Match aggregation: rule scorers + AI logic + human reading → MatchResult.
// All model calls go through llm_client::TextGenerator.

pub mod aggregator;
pub mod explanation;
pub mod handlers;
pub mod models;
