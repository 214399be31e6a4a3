//! Station Communications Console Panel
use egui::Button;

use commsdeck_core::{
    ConsoleEvent, ConsoleModel, ConsoleStateUpdate, GameClock, Localize,
};

use crate::{
    config::UserConfig,
    i18n::LocaleManager,
    theme::colors,
    widgets::panel::{console_panel_frame, render_panel_header},
};

/// The communications console window.
///
/// The panel owns no timer and pulls no state: the presenter pushes
/// permission flags via [`set_state`](Self::set_state), alert levels via
/// [`update_alert_levels`](Self::update_alert_levels), and refreshes the
/// countdown once per frame. User interaction comes back as
/// [`ConsoleEvent`]s pushed into the vec passed to [`show`](Self::show).
pub struct CommsConsolePanel {
    /// Allow visibility control
    pub visible: bool,
    model: ConsoleModel,
    placeholder: String,
}

impl CommsConsolePanel {
    /// Build the panel from the loaded configuration.
    ///
    /// Captures the localized placeholder and the configured announcement
    /// length limit here, once; renders the initial countdown display.
    /// Emits no events.
    pub fn new(i18n: &LocaleManager, config: &UserConfig, clock: &dyn GameClock) -> Self {
        let mut model = ConsoleModel::new(config.max_announcement_length);
        model.update_countdown(clock, i18n);
        Self {
            visible: true,
            model,
            placeholder: i18n.t("console-announcement-placeholder"),
        }
    }

    /// Read access to the underlying model.
    pub fn model(&self) -> &ConsoleModel {
        &self.model
    }

    /// Apply a partial state update pushed by the presenter.
    pub fn set_state(&mut self, update: ConsoleStateUpdate) {
        self.model.apply(update);
    }

    /// Rebuild the alert level selector from server state.
    pub fn update_alert_levels(
        &mut self,
        alerts: Option<&[String]>,
        current: &str,
        i18n: &LocaleManager,
    ) {
        self.model.update_alert_levels(alerts, current, i18n);
    }

    /// Refresh the countdown text and shuttle button label.
    ///
    /// The presenter calls this once per frame so the countdown visibly
    /// ticks; the call is idempotent and emits nothing.
    pub fn update_countdown(&mut self, clock: &dyn GameClock, i18n: &LocaleManager) {
        self.model.update_countdown(clock, i18n);
    }

    /// Render the console window, pushing user interactions into `events`.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        i18n: &LocaleManager,
        events: &mut Vec<ConsoleEvent>,
    ) {
        if !self.visible {
            return;
        }

        let mut open = self.visible;
        egui::Window::new(i18n.t("console-title"))
            .open(&mut open)
            .default_size([380.0, 420.0])
            .frame(console_panel_frame(&ctx.style()))
            .show(ctx, |ui| {
                render_panel_header(ui, &i18n.t("console-title"));
                ui.add_space(8.0);
                self.render_ui(ui, i18n, events);
            });
        self.visible = open;
    }

    fn render_ui(&mut self, ui: &mut egui::Ui, i18n: &LocaleManager, events: &mut Vec<ConsoleEvent>) {
        // --- Message input ---
        ui.add(
            egui::TextEdit::multiline(&mut self.model.message)
                .hint_text(&self.placeholder)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        ui.horizontal(|ui| {
            let announce = ui.add_enabled(
                self.model.announce_enabled(),
                Button::new(i18n.t("console-announce")),
            );
            let announce = if self.model.message_too_long() {
                announce.on_disabled_hover_text(i18n.t("console-message-too-long"))
            } else {
                announce
            };
            if announce.clicked() {
                self.model.press_announce(events);
            }

            if ui
                .add_enabled(
                    self.model.broadcast_enabled(),
                    Button::new(i18n.t("console-broadcast")),
                )
                .clicked()
            {
                self.model.press_broadcast(events);
            }
        });

        ui.separator();

        // --- Alert level selector ---
        ui.horizontal(|ui| {
            ui.label(i18n.t("console-alert-level-label"));

            let selected_text = self
                .model
                .selected_alert()
                .and_then(|i| self.model.alert_options().get(i))
                .map(|o| o.label.clone())
                .unwrap_or_default();

            ui.add_enabled_ui(self.model.alert_selectable(), |ui| {
                let mut picked = None;
                egui::ComboBox::from_id_salt("alert-level")
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        for (i, option) in self.model.alert_options().iter().enumerate() {
                            let is_selected = self.model.selected_alert() == Some(i);
                            if ui.selectable_label(is_selected, &option.label).clicked()
                                && !is_selected
                            {
                                picked = Some(i);
                            }
                        }
                    });
                if let Some(i) = picked {
                    self.model.select_alert(i, events);
                }
            });
        });

        ui.separator();

        // --- Shuttle call/recall and countdown ---
        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    self.model.call_enabled(),
                    Button::new(self.model.shuttle_label()),
                )
                .clicked()
            {
                self.model.press_shuttle(events);
            }
            ui.label(self.model.countdown_text());
        });

        ui.separator();

        // --- Administrative actions ---
        ui.horizontal(|ui| {
            if ui
                .add(Button::new(i18n.t("console-maintenance")).fill(colors::CAUTION_COLOR))
                .clicked()
            {
                self.model.press_maintenance(events);
            }
            if ui.button(i18n.t("console-centcomm")).clicked() {
                self.model.press_centcomm(events);
            }
        });
    }
}
