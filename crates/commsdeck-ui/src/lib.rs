//! CommsDeck UI - egui rendering layer
//!
//! This crate draws the communications console on top of the headless model
//! in `commsdeck-core`, including:
//! - The console panel itself
//! - Fluent-based localization
//! - User configuration (language, announcement length limit)
//! - Theme and shared panel widgets

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod i18n;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use config::UserConfig;
pub use error::I18nError;
pub use i18n::LocaleManager;
pub use panels::console_panel::CommsConsolePanel;
