//! Functional core: acronym generation and definition resolution

pub mod acronym;
pub mod definition;

pub use acronym::generate;
pub use definition::{corporate_definition, creed_definition, resolve, Mode};
