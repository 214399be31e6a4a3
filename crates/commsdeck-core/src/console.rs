//! Console state model.
//!
//! `ConsoleModel` holds everything the communications console displays that
//! is not a live widget: permission flags pushed by the server, the message
//! buffer, the rendered alert level list, and the derived countdown text.
//! The rendering layer reads the derived state and calls the `press_*` /
//! `select_alert` methods when the user interacts.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::events::ConsoleEvent;
use crate::locale::Localize;
use crate::timing::{format_hms, GameClock};

/// One entry of the alert level selector.
///
/// `id` is the raw server-side level identifier and is what gets emitted on
/// selection; `label` is the localized display name shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertOption {
    /// Raw level id, e.g. `"green"`.
    pub id: String,
    /// Localized display name, or the raw id when no translation exists.
    pub label: String,
}

/// Partial state update pushed by the owning presenter.
///
/// Every field is optional; absent fields leave the model untouched. The
/// presenter applies one of these whenever the server reports a change,
/// instead of poking individual fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleStateUpdate {
    /// Whether sending announcements is permitted.
    pub can_announce: Option<bool>,
    /// Whether sending broadcasts is permitted.
    pub can_broadcast: Option<bool>,
    /// Whether calling/recalling the shuttle is permitted.
    pub can_call: Option<bool>,
    /// Whether the alert level selector is interactive.
    pub alert_selectable: Option<bool>,
    /// Whether an evacuation countdown is running.
    pub countdown_started: Option<bool>,
    /// Absolute game time at which the countdown reaches zero.
    ///
    /// `Some(None)` clears a previously set end time.
    pub countdown_end: Option<Option<Duration>>,
    /// Raw id of the level currently in force.
    pub current_level: Option<String>,
}

impl ConsoleStateUpdate {
    /// Update that grants or revokes every permission at once.
    pub fn all_permissions(granted: bool) -> Self {
        Self {
            can_announce: Some(granted),
            can_broadcast: Some(granted),
            can_call: Some(granted),
            alert_selectable: Some(granted),
            ..Self::default()
        }
    }
}

/// Headless state of the communications console panel.
pub struct ConsoleModel {
    can_announce: bool,
    can_broadcast: bool,
    can_call: bool,
    alert_selectable: bool,
    countdown_started: bool,
    countdown_end: Option<Duration>,
    current_level: String,

    /// Message buffer; mutated only by user keystrokes in the input field.
    pub message: String,
    max_announce_len: usize,

    alert_options: Vec<AlertOption>,
    selected_alert: Option<usize>,

    countdown_text: String,
    shuttle_label: String,
}

impl ConsoleModel {
    /// Construct a model with all permissions denied.
    ///
    /// `max_announce_len` is the configured announcement length limit,
    /// captured once here; later configuration changes are not observed.
    pub fn new(max_announce_len: usize) -> Self {
        Self {
            can_announce: false,
            can_broadcast: false,
            can_call: false,
            alert_selectable: false,
            countdown_started: false,
            countdown_end: None,
            current_level: String::new(),
            message: String::new(),
            max_announce_len,
            alert_options: Vec::new(),
            selected_alert: None,
            countdown_text: String::new(),
            shuttle_label: String::new(),
        }
    }

    /// Apply a partial state update from the presenter.
    ///
    /// Emits nothing; callers refresh the countdown display afterwards if
    /// they changed countdown fields.
    pub fn apply(&mut self, update: ConsoleStateUpdate) {
        if let Some(v) = update.can_announce {
            self.can_announce = v;
        }
        if let Some(v) = update.can_broadcast {
            self.can_broadcast = v;
        }
        if let Some(v) = update.can_call {
            self.can_call = v;
        }
        if let Some(v) = update.alert_selectable {
            self.alert_selectable = v;
        }
        if let Some(v) = update.countdown_started {
            self.countdown_started = v;
        }
        if let Some(v) = update.countdown_end {
            self.countdown_end = v;
        }
        if let Some(v) = update.current_level {
            self.current_level = v;
        }
    }

    /// Configured announcement length limit.
    pub fn max_announce_len(&self) -> usize {
        self.max_announce_len
    }

    /// Whether the message buffer exceeds the configured limit.
    pub fn message_too_long(&self) -> bool {
        self.message.chars().count() > self.max_announce_len
    }

    /// Announce is available only with permission and a message within the
    /// length limit. Broadcast is deliberately not length-gated.
    pub fn announce_enabled(&self) -> bool {
        self.can_announce && !self.message_too_long()
    }

    /// Whether the Broadcast button is available.
    pub fn broadcast_enabled(&self) -> bool {
        self.can_broadcast
    }

    /// Whether the shuttle call/recall button is available.
    pub fn call_enabled(&self) -> bool {
        self.can_call
    }

    /// Whether the alert level selector is interactive.
    pub fn alert_selectable(&self) -> bool {
        self.alert_selectable
    }

    /// Whether an evacuation countdown is running.
    pub fn countdown_started(&self) -> bool {
        self.countdown_started
    }

    /// Raw id of the level currently in force.
    pub fn current_level(&self) -> &str {
        &self.current_level
    }

    /// Rendered alert selector entries, in display order.
    pub fn alert_options(&self) -> &[AlertOption] {
        &self.alert_options
    }

    /// Index of the selected alert entry, if any.
    pub fn selected_alert(&self) -> Option<usize> {
        self.selected_alert
    }

    /// Countdown status text; empty while no countdown is running.
    pub fn countdown_text(&self) -> &str {
        &self.countdown_text
    }

    /// Current label of the shuttle call/recall button.
    pub fn shuttle_label(&self) -> &str {
        &self.shuttle_label
    }

    /// Emit an announcement carrying the current message buffer.
    pub fn press_announce(&self, events: &mut Vec<ConsoleEvent>) {
        tracing::debug!(len = self.message.len(), "announce pressed");
        events.push(ConsoleEvent::Announce(self.message.clone()));
    }

    /// Emit a broadcast carrying the current message buffer.
    pub fn press_broadcast(&self, events: &mut Vec<ConsoleEvent>) {
        tracing::debug!(len = self.message.len(), "broadcast pressed");
        events.push(ConsoleEvent::Broadcast(self.message.clone()));
    }

    /// Emit the shuttle call/recall event. The presenter infers call vs.
    /// recall from its own countdown state.
    pub fn press_shuttle(&self, events: &mut Vec<ConsoleEvent>) {
        events.push(ConsoleEvent::EmergencyShuttle);
    }

    /// Emit the maintenance emergency event.
    pub fn press_maintenance(&self, events: &mut Vec<ConsoleEvent>) {
        events.push(ConsoleEvent::Maintenance);
    }

    /// Emit the Central Command event.
    pub fn press_centcomm(&self, events: &mut Vec<ConsoleEvent>) {
        events.push(ConsoleEvent::CentComm);
    }

    /// Select the alert entry at `index` and emit its raw id.
    ///
    /// An out-of-range index is a silent no-op.
    pub fn select_alert(&mut self, index: usize, events: &mut Vec<ConsoleEvent>) {
        let Some(option) = self.alert_options.get(index) else {
            tracing::debug!(index, "alert selection out of range, ignored");
            return;
        };
        self.selected_alert = Some(index);
        events.push(ConsoleEvent::AlertLevel(option.id.clone()));
    }

    /// Rebuild the alert selector from server state.
    ///
    /// The current alert may be locked, in which case the server sends no
    /// list and the selector shows only the level in force. Otherwise the
    /// selector shows the full list with the current level selected; a
    /// current level missing from the list leaves nothing selected.
    pub fn update_alert_levels(
        &mut self,
        alerts: Option<&[String]>,
        current: &str,
        loc: &dyn Localize,
    ) {
        self.current_level = current.to_string();
        self.alert_options.clear();
        self.selected_alert = None;

        match alerts {
            None => {
                self.alert_options.push(Self::alert_option(current, loc));
                self.selected_alert = Some(0);
            }
            Some(list) => {
                for alert in list {
                    self.alert_options.push(Self::alert_option(alert, loc));
                    if alert == current {
                        self.selected_alert = Some(self.alert_options.len() - 1);
                    }
                }
            }
        }
    }

    fn alert_option(id: &str, loc: &dyn Localize) -> AlertOption {
        let label = loc
            .try_t(&format!("alert-level-{id}"))
            .unwrap_or_else(|| id.to_string());
        AlertOption {
            id: id.to_string(),
            label,
        }
    }

    /// Recompute the countdown text and shuttle button label.
    ///
    /// Idempotent; the model holds no ticker, so the owner calls this
    /// periodically (once per rendered frame is fine) for the display to
    /// tick down. Remaining time never goes negative.
    pub fn update_countdown(&mut self, clock: &dyn GameClock, loc: &dyn Localize) {
        if !self.countdown_started {
            self.countdown_text.clear();
            self.shuttle_label = loc.t("console-call-shuttle");
            return;
        }

        let remaining = self
            .countdown_end
            .unwrap_or(Duration::ZERO)
            .saturating_sub(clock.current_time());

        let time = format_hms(remaining);
        self.shuttle_label = loc.t("console-recall-shuttle");
        self.countdown_text = loc.t_args("console-time-remaining", &[("time", time.as_str())]);
    }
}
