mod chat;
mod health;
mod roadmap;

pub use chat::*;
pub use health::*;
pub use roadmap::*;
