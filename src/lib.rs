//! PerfectFit (workspace facade crate).
//!
//! This package exposes the `perfect_fit::{core,engine,adapter,types}` API while the
//! implementation lives in dedicated crates under `crates/`, plus the pieces the
//! headless runner needs (`config`, `autoplay`).

pub mod autoplay;
pub mod config;

pub use perfect_fit_adapter as adapter;
pub use perfect_fit_core as core;
pub use perfect_fit_engine as engine;
pub use perfect_fit_types as types;
