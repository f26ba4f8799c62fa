//! Command implementations

pub mod play;

pub use play::PlaySession;
