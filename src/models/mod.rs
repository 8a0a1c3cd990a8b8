pub mod config;
pub mod puzzle;
pub mod session;

pub use puzzle::Puzzle;
pub use session::resolve_session;
