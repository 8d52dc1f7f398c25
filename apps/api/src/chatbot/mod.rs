//! Chatbot endpoints: validate a profile, run filter → score → rank over
//! both catalogs, and wrap the ranked results in a narrative.

pub mod handlers;
pub mod pipeline;
