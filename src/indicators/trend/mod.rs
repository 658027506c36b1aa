pub mod ema;

pub use ema::calculate_ema;
