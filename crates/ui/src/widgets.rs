//! Themed widget helpers shared by the tab panels.
//!
//! Wrap the common egui patterns (cards, headings, stat rows, progress bars)
//! with the constants from [`crate::theme`] so panels stay consistent.

use bevy_egui::egui;

use crate::theme;

// =============================================================================
// Cards
// =============================================================================

/// A filled, rounded frame around a block of content.
pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::NONE
        .fill(theme::BG_CARD)
        .corner_radius(egui::CornerRadius::same(theme::CARD_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// A card with a colored left accent, used for banners.
pub fn banner(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    egui::Frame::NONE
        .fill(color.gamma_multiply(0.25))
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(text).size(theme::FONT_SMALL).color(color));
        });
}

// =============================================================================
// Text
// =============================================================================

pub fn heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_HEADING)
            .color(theme::TEXT_HEADING)
            .strong(),
    );
}

pub fn caption(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_MUTED),
    );
}

/// A muted label followed by its value on one line.
pub fn stat_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{}:", label))
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
        );
        ui.label(egui::RichText::new(value).size(theme::FONT_BODY));
    });
}

/// A big number over a small caption, for summary tiles.
pub fn stat_tile(ui: &mut egui::Ui, value: &str, label: &str) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(value)
                .size(theme::FONT_TITLE)
                .color(theme::PRIMARY)
                .strong(),
        );
        caption(ui, label);
    });
}

// =============================================================================
// Buttons and bars
// =============================================================================

/// The highlighted button for the main action of a screen.
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(text)
            .size(theme::FONT_BODY)
            .color(theme::TEXT_HEADING)
            .strong(),
    )
    .fill(theme::PRIMARY)
    .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
    .min_size(egui::vec2(ui.available_width(), 36.0));
    ui.add(button)
}

/// A toggle-style button, filled when `selected`.
pub fn chip(ui: &mut egui::Ui, text: &str, selected: bool) -> egui::Response {
    let fill = if selected {
        theme::PRIMARY
    } else {
        theme::BG_CARD
    };
    ui.add(
        egui::Button::new(egui::RichText::new(text).size(theme::FONT_SMALL))
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS)),
    )
}

/// `percent` is clamped to 0..=100.
pub fn percent_bar(ui: &mut egui::Ui, percent: u8, color: egui::Color32) -> egui::Response {
    ui.add(
        egui::ProgressBar::new(f32::from(percent.min(100)) / 100.0)
            .fill(color)
            .text(format!("{}%", percent.min(100))),
    )
}

pub fn fraction_bar(ui: &mut egui::Ui, fraction: f32, color: egui::Color32) -> egui::Response {
    ui.add(
        egui::ProgressBar::new(fraction.clamp(0.0, 1.0))
            .fill(color)
            .desired_height(8.0),
    )
}
