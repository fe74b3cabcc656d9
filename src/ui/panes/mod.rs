//! Pane rendering
//!
//! - [`tree`]: recursion trace lines built from generator events
//! - [`codes`]: the code sequence with the current step's flipped bit highlighted
//! - [`status`]: step position, transition description and cycle counter
//! - `utils`: hard-wrapping of styled lines to the terminal width
//!
//! Everything here is a pure function of its inputs plus a [`Theme`]; the
//! [`Stage`] decides when and where the output lands.
//!
//! [`Theme`]: crate::ui::theme::Theme
//! [`Stage`]: crate::ui::stage::Stage

pub(crate) mod utils;

pub mod codes;
pub mod status;
pub mod tree;

pub use codes::{code_rows, render_codes_pane, rows_needed};
pub use status::{describe, render_status_bar};
pub use tree::TreeRenderer;
