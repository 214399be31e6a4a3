//! Presenter owning the console panel.
//!
//! `ConsolePresenter` plays the role the game session layer would: it holds
//! the authoritative station state, pushes changes into the panel, and
//! reacts to the panel's domain events. In this standalone build the
//! station state is a local simulation; a networked client would apply
//! server messages to the same structure.

use std::time::Duration;

use commsdeck_core::{ConsoleEvent, ConsoleStateUpdate, GameClock, SystemClock};
use commsdeck_ui::{CommsConsolePanel, LocaleManager, UserConfig};

/// How long the crew has to recall the shuttle after calling it.
const SHUTTLE_DEPARTURE: Duration = Duration::from_secs(180);

/// Authoritative station state the presenter renders from.
struct StationState {
    /// Alert levels in display order with their selectability.
    alert_levels: Vec<(String, bool)>,
    current_level: String,
    shuttle_called: bool,
    shuttle_departure: Option<Duration>,
    recent_messages: Vec<String>,
}

impl StationState {
    fn demo(locked_alert: bool) -> Self {
        let alert_levels = [
            ("green", true),
            ("blue", true),
            ("red", true),
            ("violet", true),
            ("yellow", true),
            // Command-only levels; never offered for selection.
            ("gamma", false),
            ("delta", false),
            ("epsilon", false),
        ]
        .iter()
        .map(|(id, selectable)| (id.to_string(), *selectable))
        .collect();

        Self {
            alert_levels,
            current_level: if locked_alert { "gamma" } else { "green" }.to_string(),
            shuttle_called: false,
            shuttle_departure: None,
            recent_messages: Vec::new(),
        }
    }

    fn is_locked(&self, id: &str) -> bool {
        self.alert_levels
            .iter()
            .any(|(level, selectable)| level == id && !selectable)
    }

    /// Levels the crew may switch to, or `None` while the current level is
    /// locked (the console then shows only the level in force).
    fn selectable_levels(&self) -> Option<Vec<String>> {
        if self.is_locked(&self.current_level) {
            return None;
        }
        Some(
            self.alert_levels
                .iter()
                .filter(|(_, selectable)| *selectable)
                .map(|(id, _)| id.clone())
                .collect(),
        )
    }
}

/// Owns the console panel and drives it from station state.
pub struct ConsolePresenter {
    panel: CommsConsolePanel,
    clock: SystemClock,
    station: StationState,
    events: Vec<ConsoleEvent>,
}

impl ConsolePresenter {
    /// Build the presenter and push the initial station state into the panel.
    pub fn new(i18n: &LocaleManager, config: &UserConfig, locked_alert: bool) -> Self {
        let clock = SystemClock::new();
        let station = StationState::demo(locked_alert);
        let mut panel = CommsConsolePanel::new(i18n, config, &clock);

        panel.set_state(ConsoleStateUpdate {
            can_announce: Some(true),
            can_broadcast: Some(true),
            can_call: Some(true),
            alert_selectable: Some(!station.is_locked(&station.current_level)),
            ..Default::default()
        });
        Self::push_alert_levels(&mut panel, &station, i18n);

        Self {
            panel,
            clock,
            station,
            events: Vec::new(),
        }
    }

    fn push_alert_levels(panel: &mut CommsConsolePanel, station: &StationState, i18n: &LocaleManager) {
        let levels = station.selectable_levels();
        panel.update_alert_levels(levels.as_deref(), &station.current_level, i18n);
        panel.set_state(ConsoleStateUpdate {
            alert_selectable: Some(levels.is_some()),
            ..Default::default()
        });
    }

    /// Run one frame: refresh the countdown, render, handle events.
    pub fn frame(&mut self, ctx: &egui::Context, i18n: &LocaleManager) {
        self.panel.update_countdown(&self.clock, i18n);
        self.panel.show(ctx, i18n, &mut self.events);

        let events: Vec<ConsoleEvent> = self.events.drain(..).collect();
        for event in events {
            self.handle_event(event, i18n);
        }
    }

    fn handle_event(&mut self, event: ConsoleEvent, i18n: &LocaleManager) {
        match event {
            ConsoleEvent::Announce(text) => {
                tracing::info!(%text, "station announcement");
                self.station.recent_messages.push(text);
            }
            ConsoleEvent::Broadcast(text) => {
                tracing::info!(%text, "station broadcast");
                self.station.recent_messages.push(text);
            }
            ConsoleEvent::AlertLevel(level) => self.change_alert_level(&level, i18n),
            ConsoleEvent::EmergencyShuttle => self.toggle_shuttle(i18n),
            ConsoleEvent::Maintenance => {
                tracing::info!("maintenance emergency declared");
            }
            ConsoleEvent::CentComm => {
                tracing::info!("central command contacted");
            }
        }
    }

    fn change_alert_level(&mut self, level: &str, i18n: &LocaleManager) {
        if self.station.is_locked(level) || !self.station.alert_levels.iter().any(|(id, _)| id == level)
        {
            tracing::warn!(level, "rejected alert level change");
            return;
        }
        tracing::info!(level, "alert level changed");
        self.station.current_level = level.to_string();
        Self::push_alert_levels(&mut self.panel, &self.station, i18n);
    }

    fn toggle_shuttle(&mut self, i18n: &LocaleManager) {
        if self.station.shuttle_called {
            tracing::info!("evacuation shuttle recalled");
            self.station.shuttle_called = false;
            self.station.shuttle_departure = None;
        } else {
            let departure = self.clock.current_time() + SHUTTLE_DEPARTURE;
            tracing::info!(?departure, "evacuation shuttle called");
            self.station.shuttle_called = true;
            self.station.shuttle_departure = Some(departure);
        }

        self.panel.set_state(ConsoleStateUpdate {
            countdown_started: Some(self.station.shuttle_called),
            countdown_end: Some(self.station.shuttle_departure),
            ..Default::default()
        });
        self.panel.update_countdown(&self.clock, i18n);
    }
}
