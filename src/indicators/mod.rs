//! Technical indicators computed over a candle series.

pub mod momentum;
pub mod trend;
