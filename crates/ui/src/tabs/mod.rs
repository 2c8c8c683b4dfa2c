//! Central-panel content, one module per [`Tab`](simulation::app_state::Tab).
//!
//! Each system runs only while its tab is active and after the header and
//! bottom bar have claimed their space.

pub mod dashboard;
pub mod home;
pub mod map;
pub mod profile;
pub mod scan;

use bevy_egui::egui;

use simulation::localization::LocalizationState;
use simulation::points::ScanHistoryEntry;

use crate::{theme, widgets};

/// Scrollable central panel shared by all tabs.
pub(crate) fn tab_panel(ctx: &egui::Context, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(theme::ITEM_SPACING);
                add_contents(ui);
                ui.add_space(theme::ITEM_SPACING * 2.0);
            });
    });
}

/// One scan history line: item, brand, points and how long ago.
pub(crate) fn history_row(
    ui: &mut egui::Ui,
    loc: &LocalizationState,
    entry: &ScanHistoryEntry,
    now_ms: u64,
) {
    let record = &entry.record;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(loc.pick(&record.item)).strong());
            let brand = record.brand.unwrap_or(loc.t("unidentified_brand"));
            widgets::caption(
                ui,
                &format!(
                    "{} · {} · {}",
                    brand,
                    loc.pick(&record.category),
                    loc.time_ago(now_ms.saturating_sub(entry.timestamp))
                ),
            );
            widgets::caption(ui, &format!("{}: {}", loc.t("tx_hash"), record.tx_hash));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("+{}", record.points))
                    .color(theme::SUCCESS)
                    .strong(),
            );
        });
    });
}

