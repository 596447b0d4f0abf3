mod request;
mod roadmap;

pub use request::*;
pub use roadmap::*;
