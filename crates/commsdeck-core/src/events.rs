//! Outbound domain events emitted by the console panel.

/// Events the console panel emits toward its owning presenter.
///
/// The panel pushes these into a `Vec<ConsoleEvent>` supplied by the
/// presenter each frame; the presenter drains the vec after rendering.
/// Update calls on the panel never produce events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// Send a formatted station-wide announcement with the given body.
    Announce(String),
    /// Send a radio-style broadcast with the given body.
    Broadcast(String),
    /// Request a change to the alert level with the given raw level id.
    AlertLevel(String),
    /// Call the evacuation shuttle, or recall it if a countdown is active.
    EmergencyShuttle,
    /// Declare a maintenance emergency.
    Maintenance,
    /// Contact Central Command.
    CentComm,
}
