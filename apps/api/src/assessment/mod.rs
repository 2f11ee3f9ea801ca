// Assessment-to-recommendation pipeline:
// format answers → build prompt → completion call → parse/validate → store.

pub mod catalog;
pub mod format;
pub mod handlers;
pub mod parse;
pub mod pipeline;
pub mod prompts;
pub mod store;
