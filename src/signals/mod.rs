//! Signal evaluation interfaces.

pub mod decision;
pub mod snapshot;

pub use decision::decide;
