//! Console panels.

pub mod console_panel;

pub use console_panel::CommsConsolePanel;
