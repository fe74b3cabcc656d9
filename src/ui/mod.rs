//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`app`]** — lesson flow: intro text, prompt, trace replay, animation
//! - **[`stage`]** — inline terminal viewport; owns output placement and frame timing
//! - **[`panes`]** — pure render functions for the recursion tree, the code
//!   sequence and the status bar
//! - **[`input`]** — key-press pauses and the bit-width prompt
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with [`Settings`] and
//! call [`App::run`].
//!
//! [`Settings`]: crate::cli::Settings
//! [`App::run`]: app::App::run

pub mod app;
pub mod input;
pub mod panes;
pub mod stage;
pub mod theme;

pub use app::App;
pub use stage::Stage;
