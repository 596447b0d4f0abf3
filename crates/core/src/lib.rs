pub mod domain;
pub mod error;
pub mod parser;
pub mod prompt;

pub use domain::*;
pub use error::CoreError;
pub use parser::{chat_fragments, roadmap_lines};
pub use prompt::{build_prompt, BULLET_GLYPHS};
