//! Home: greeting, balance and rank, weekly goal, quick actions, recent scans.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::app_state::{QuickAction, Tab};
use simulation::config::WEEKLY_GOAL_SCANS;
use simulation::connectivity::Connectivity;
use simulation::localization::{format_number, LocalizationState};
use simulation::points::{
    next_rank, points_to_next_rank, rank_for, weekly_goal_done, weekly_goal_fraction,
    weekly_goal_remaining, PointsLedger,
};

use super::{history_row, tab_panel};
use crate::{theme, widgets};

const RECENT_SCANS: usize = 3;

pub fn home_tab_ui(
    mut contexts: EguiContexts,
    loc: Res<LocalizationState>,
    ledger: Res<PointsLedger>,
    connectivity: Res<Connectivity>,
    mut next_tab: ResMut<NextState<Tab>>,
) {
    let now_ms = simulation::now_millis();
    tab_panel(contexts.ctx_mut(), |ui| {
        if !connectivity.online {
            widgets::banner(ui, theme::WARNING, loc.t("offline_msg"));
        }

        ui.label(
            egui::RichText::new(loc.t("greeting"))
                .size(theme::FONT_TITLE)
                .strong(),
        );
        ui.add_space(theme::ITEM_SPACING);

        widgets::card(ui, |ui| {
            let rank = rank_for(ledger.user_points);
            ui.horizontal(|ui| {
                widgets::stat_tile(
                    ui,
                    &format_number(i64::from(ledger.user_points)),
                    loc.t("eco_points"),
                );
                ui.add_space(24.0);
                widgets::stat_tile(
                    ui,
                    &format_number(i64::from(ledger.total_scans)),
                    loc.t("total_scans"),
                );
            });
            widgets::stat_row(ui, loc.t("level"), loc.pick(&rank.name));
            if let (Some(next), Some(remaining)) = (
                next_rank(ledger.user_points),
                points_to_next_rank(ledger.user_points),
            ) {
                let span = next.min_points.saturating_sub(rank.min_points).max(1);
                let into = ledger.user_points.saturating_sub(rank.min_points);
                widgets::fraction_bar(ui, into as f32 / span as f32, theme::PRIMARY);
                widgets::caption(
                    ui,
                    &format!(
                        "{} {} → {}",
                        format_number(i64::from(remaining)),
                        loc.t("points_more"),
                        loc.pick(&next.name)
                    ),
                );
            }
        });

        ui.add_space(theme::ITEM_SPACING);
        widgets::card(ui, |ui| {
            widgets::heading(ui, loc.t("weekly_goal"));
            let done = weekly_goal_done(ledger.total_scans);
            widgets::fraction_bar(ui, weekly_goal_fraction(ledger.total_scans), theme::SUCCESS);
            let remaining = weekly_goal_remaining(ledger.total_scans);
            if remaining == 0 {
                ui.label(egui::RichText::new(loc.t("weekly_target_achieved")).color(theme::SUCCESS));
            } else {
                widgets::caption(
                    ui,
                    &format!("{}/{} · {} {}", done, WEEKLY_GOAL_SCANS, remaining, loc.t("points_more")),
                );
            }
        });

        ui.add_space(theme::ITEM_SPACING);
        widgets::heading(ui, loc.t("quick_actions"));
        ui.horizontal_wrapped(|ui| {
            for &action in QuickAction::all() {
                if ui.button(loc.t(action.label_key())).clicked() {
                    next_tab.set(action.target());
                }
            }
        });

        ui.add_space(theme::ITEM_SPACING);
        widgets::card(ui, |ui| {
            widgets::heading(ui, loc.t("history"));
            for entry in ledger.recent(RECENT_SCANS) {
                history_row(ui, &loc, entry, now_ms);
                ui.separator();
            }
        });
    });
}
