pub mod error;
pub mod fallback;
pub mod resolver;
