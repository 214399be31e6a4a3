//! CommsDeck Core - Domain Model for the Station Communications Console
//!
//! This crate contains the headless console model, including:
//! - Console state and permission gating
//! - Alert level list model
//! - Evacuation countdown math and display text
//! - Outbound domain events
//!
//! Nothing in this crate depends on a UI toolkit; the rendering layer in
//! `commsdeck-ui` draws whatever state the model derives.

#![warn(missing_docs)]

pub mod console;
pub mod events;
pub mod locale;
pub mod timing;

pub use console::{AlertOption, ConsoleModel, ConsoleStateUpdate};
pub use events::ConsoleEvent;
pub use locale::{Localize, RawLocale};
pub use timing::{format_hms, FixedClock, GameClock, SystemClock};
