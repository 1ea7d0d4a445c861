//! Story Module
//!
//! Request validation and prompt construction for story generation.

mod prompt;
mod validation;

pub use prompt::build_prompt;
pub use validation::{
    ensure_known_keywords, sanitize_name, validate_age, validate_keywords, MAX_AGE, MIN_AGE,
};
