//! Core modules for the trick engine

pub mod clock;
pub mod engine;
pub mod format;
pub mod magic;

pub use engine::{NegativeMagicPolicy, TrickConfig, TrickEngine};
pub use format::group_thousands;
pub use magic::MagicNumber;
