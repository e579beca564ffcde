//! Static word and quote banks
//!
//! Both banks are process-wide constants; nothing here is ever mutated.

pub mod quotes;
pub mod words;

pub use quotes::CREED_QUOTES;
pub use words::{WordBank, CORPORATE_JARGON, GENERAL_CATEGORY};
