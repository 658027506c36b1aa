//! Vigia signal evaluator
//!
//! Single-shot EMA crossover scanner: fetches recent candles for one symbol,
//! computes fast/slow EMA and RSI over the closes, and posts a webhook
//! notification when the crossover rule fires. One invocation performs one
//! evaluation; scheduling lives outside the process (cron or similar).

pub mod config;
pub mod evaluator;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
