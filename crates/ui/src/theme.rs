//! Colors, sizes and the egui style for the green EcoScan look.

use bevy_egui::{egui, EguiContexts};

// =============================================================================
// Palette
// =============================================================================

pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(34, 160, 90);
pub const PRIMARY_DARK: egui::Color32 = egui::Color32::from_rgb(22, 110, 62);
pub const SECONDARY: egui::Color32 = egui::Color32::from_rgb(60, 140, 210);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(80, 200, 120);
pub const WARNING: egui::Color32 = egui::Color32::from_rgb(235, 170, 50);
pub const ERROR: egui::Color32 = egui::Color32::from_rgb(220, 70, 70);

pub const BG_DARK: egui::Color32 = egui::Color32::from_rgb(18, 30, 24);
pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(26, 42, 34);
pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(34, 54, 44);

pub const TEXT: egui::Color32 = egui::Color32::from_rgb(225, 235, 228);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(150, 170, 158);
pub const TEXT_HEADING: egui::Color32 = egui::Color32::from_rgb(245, 250, 246);

// =============================================================================
// Sizes
// =============================================================================

pub const FONT_TITLE: f32 = 22.0;
pub const FONT_HEADING: f32 = 17.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 11.5;

pub const ITEM_SPACING: f32 = 6.0;
pub const CARD_CORNER_RADIUS: u8 = 10;
pub const WIDGET_CORNER_RADIUS: u8 = 6;

pub fn apply_eco_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let inactive = egui::Color32::from_rgb(44, 70, 56);
    let hover = egui::Color32::from_rgb(58, 96, 74);

    style.visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = PRIMARY;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = PRIMARY;

    style.visuals.window_fill = BG_PANEL;
    style.visuals.panel_fill = BG_DARK;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(14, 24, 19);
    style.visuals.faint_bg_color = BG_CARD;
    style.visuals.override_text_color = Some(TEXT);

    style.visuals.selection.bg_fill = PRIMARY_DARK;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, PRIMARY);

    let window_rounding = egui::CornerRadius::same(CARD_CORNER_RADIUS);
    let widget_rounding = egui::CornerRadius::same(WIDGET_CORNER_RADIUS);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    style.spacing.item_spacing = egui::vec2(8.0, ITEM_SPACING);

    ctx.set_style(style);
}
