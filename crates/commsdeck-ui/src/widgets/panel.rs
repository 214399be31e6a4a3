//! Standardized panel containers and headers.

use egui::{Align2, FontId, Frame, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::theme::colors;

/// Returns a Frame styled for console panels.
///
/// Use this with `egui::SidePanel::frame()` or `egui::Window::frame()`.
pub fn console_panel_frame(_style: &egui::Style) -> Frame {
    Frame {
        inner_margin: egui::Margin::same(8),
        outer_margin: egui::Margin::ZERO,
        corner_radius: egui::CornerRadius::same(0),
        shadow: egui::Shadow::NONE,
        fill: colors::DARK_GREY,
        stroke: Stroke::new(1.0, colors::STROKE_GREY),
    }
}

/// Renders a standardized panel header with a left accent stripe and title.
///
/// This widget consumes the full width available.
pub fn render_panel_header(ui: &mut Ui, title: &str) {
    let height = 28.0;
    let desired_size = Vec2::new(ui.available_width(), height);
    let (rect, _response) = ui.allocate_at_least(desired_size, Sense::hover());

    let painter = ui.painter();

    painter.rect_filled(rect, egui::CornerRadius::same(0), colors::LIGHTER_GREY);

    let stripe_width = 3.0;
    let stripe_rect = Rect::from_min_size(rect.min, Vec2::new(stripe_width, rect.height()));
    painter.rect_filled(
        stripe_rect,
        egui::CornerRadius::same(0),
        colors::CYAN_ACCENT,
    );

    painter.text(
        Pos2::new(rect.min.x + stripe_width + 8.0, rect.center().y),
        Align2::LEFT_CENTER,
        title,
        FontId::proportional(14.0),
        ui.visuals().strong_text_color(),
    );
}
