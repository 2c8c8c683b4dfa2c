//! Profile: rank ladder, leaderboard, vouchers and the full scan history.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::localization::{format_number, LocalizationState};
use simulation::points::{
    leaderboard_points, rank_for, PointsLedger, CURRENT_USER_INITIALS, CURRENT_USER_NAME,
    LEADERBOARD, POINTS_PER_TREE, RANK_LEVELS, VOUCHERS,
};

use super::{history_row, tab_panel};
use crate::{theme, widgets};

pub fn profile_tab_ui(
    mut contexts: EguiContexts,
    loc: Res<LocalizationState>,
    ledger: Res<PointsLedger>,
) {
    let now_ms = simulation::now_millis();
    let current = rank_for(ledger.user_points);

    tab_panel(contexts.ctx_mut(), |ui| {
        widgets::card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(CURRENT_USER_INITIALS)
                        .size(theme::FONT_TITLE)
                        .color(theme::PRIMARY)
                        .strong(),
                );
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(CURRENT_USER_NAME).strong());
                    widgets::caption(
                        ui,
                        &format!("{} · {}", loc.t("green_ambassador"), loc.pick(&current.name)),
                    );
                });
            });
            widgets::stat_row(
                ui,
                loc.t("eco_points"),
                &format_number(i64::from(ledger.user_points)),
            );
        });

        ui.add_space(theme::ITEM_SPACING);
        widgets::card(ui, |ui| {
            widgets::heading(ui, loc.t("rank_levels"));
            for level in RANK_LEVELS {
                let is_current = std::ptr::eq(level, current);
                ui.horizontal(|ui| {
                    let name = egui::RichText::new(loc.pick(&level.name));
                    ui.label(if is_current {
                        name.color(theme::PRIMARY).strong()
                    } else {
                        name
                    });
                    widgets::caption(ui, &format_number(i64::from(level.min_points)));
                    if is_current {
                        widgets::caption(ui, loc.t("current"));
                    } else if ledger.user_points >= level.min_points {
                        widgets::caption(ui, loc.t("done"));
                    }
                });
            }
        });

        ui.add_space(theme::ITEM_SPACING);
        widgets::card(ui, |ui| {
            widgets::heading(ui, loc.t("leaderboard"));
            let mut rows: Vec<_> = LEADERBOARD
                .iter()
                .map(|entry| (entry, leaderboard_points(entry, ledger.user_points)))
                .collect();
            rows.sort_by(|a, b| b.1.cmp(&a.1));
            for (place, (entry, points)) in rows.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(format!("{}.", place + 1));
                    ui.label(egui::RichText::new(entry.initials).color(theme::SECONDARY));
                    let name = if entry.is_current_user() {
                        format!("{} {}", entry.name, loc.t("you"))
                    } else {
                        entry.name.to_string()
                    };
                    ui.label(name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format_number(i64::from(*points)));
                    });
                });
            }
        });

        ui.add_space(theme::ITEM_SPACING);
        widgets::card(ui, |ui| {
            widgets::heading(ui, loc.t("eco_vouchers"));
            for voucher in VOUCHERS {
                ui.horizontal(|ui| {
                    ui.label(loc.pick(&voucher.name));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let affordable = ledger.user_points >= voucher.cost;
                        ui.add_enabled(
                            affordable,
                            egui::Button::new(format!("{} {}", voucher.cost, loc.t("points"))),
                        );
                    });
                });
            }
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(loc.t("plant_tree"));
                widgets::caption(ui, &format!("{} {}", POINTS_PER_TREE, loc.t("points")));
            });
        });

        ui.add_space(theme::ITEM_SPACING);
        widgets::card(ui, |ui| {
            widgets::heading(ui, loc.t("history"));
            for entry in &ledger.scan_history {
                history_row(ui, &loc, entry, now_ms);
                ui.separator();
            }
        });

        ui.add_space(theme::ITEM_SPACING);
        ui.horizontal(|ui| {
            ui.add_enabled(false, egui::Button::new(loc.t("share_zalo")));
            ui.add_enabled(false, egui::Button::new(loc.t("settings")));
        });
        widgets::caption(ui, loc.t("powered_by"));
    });
}
