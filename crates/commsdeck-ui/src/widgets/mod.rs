//! Shared widgets for console panels.

pub mod panel;

pub use panel::{console_panel_frame, render_panel_header};
