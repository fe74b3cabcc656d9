//! # Introduction
//!
//! brgc builds Binary Reflected Gray Codes with the classic reflect-and-prefix
//! recursion, narrates the recursion as a call tree, and animates the single
//! bit that changes between every pair of neighbouring codes, including the
//! wrap from the last code back to the first.
//!
//! ## Pipeline
//!
//! ```text
//! n → Generator → (codes, trace events) → Visualizer → steps → schedule → Stage
//! ```
//!
//! 1. [`generator`] — [`generator::generate`] and [`generator::generate_traced`];
//!    trace events are plain data, never styled text.
//! 2. [`visualizer`] — strips markup, enumerates differing bits and computes
//!    [`visualizer::AnimationStep`]s; [`visualizer::animate`] hands scheduled
//!    frames to a [`visualizer::FramePresenter`].
//! 3. [`ui`] — ratatui rendering of trace lines and frames in an inline
//!    viewport; not part of the stable library API.
//! 4. [`cli`], [`lesson`], [`error`] — flags and settings, teaching text, and
//!    error types.

pub mod cli;
pub mod error;
pub mod generator;
pub mod lesson;
pub mod ui;
pub mod visualizer;

pub use error::{GrayError, InputError, Result};
pub use generator::{generate, generate_traced};
pub use visualizer::{animate, compute_steps};
