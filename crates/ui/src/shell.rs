//! Header bar and bottom tab navigation.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::app_state::Tab;
use simulation::connectivity::{Connectivity, SetOnline};
use simulation::localization::{format_number, LocalizationState, ToggleLanguage};
use simulation::points::PointsLedger;

use crate::theme;

/// Title, language toggle, connectivity badge and the points balance.
pub fn header_ui(
    mut contexts: EguiContexts,
    loc: Res<LocalizationState>,
    connectivity: Res<Connectivity>,
    ledger: Res<PointsLedger>,
    mut toggle_lang: EventWriter<ToggleLanguage>,
    mut set_online: EventWriter<SetOnline>,
) {
    egui::TopBottomPanel::top("header_bar")
        .exact_height(44.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 10.0;

                ui.label(
                    egui::RichText::new("EcoScan")
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::PRIMARY),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} {}",
                            format_number(i64::from(ledger.user_points)),
                            loc.t("points")
                        ))
                        .strong(),
                    );

                    if ui
                        .button(loc.lang.code())
                        .on_hover_text("VI / EN")
                        .clicked()
                    {
                        toggle_lang.send(ToggleLanguage);
                    }

                    let (text, color) = if connectivity.online {
                        ("Online", theme::SUCCESS)
                    } else {
                        (loc.t("offline_mode"), theme::WARNING)
                    };
                    if ui
                        .add(egui::Button::new(egui::RichText::new(text).color(color)).frame(false))
                        .clicked()
                    {
                        set_online.send(SetOnline(!connectivity.online));
                    }
                });
            });
        });
}

/// One button per tab; the current tab is highlighted.
pub fn bottom_nav_ui(
    mut contexts: EguiContexts,
    loc: Res<LocalizationState>,
    tab: Res<State<Tab>>,
    mut next_tab: ResMut<NextState<Tab>>,
) {
    egui::TopBottomPanel::bottom("bottom_nav")
        .exact_height(48.0)
        .show(contexts.ctx_mut(), |ui| {
            let tabs = Tab::all();
            let width = ui.available_width() / tabs.len() as f32;
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for &t in tabs {
                    let selected = *tab.get() == t;
                    let color = if selected {
                        theme::PRIMARY
                    } else {
                        theme::TEXT_MUTED
                    };
                    let label = egui::RichText::new(loc.t(t.label_key())).color(color);
                    let button = egui::Button::new(if selected { label.strong() } else { label })
                        .frame(false)
                        .min_size(egui::vec2(width, 40.0));
                    if ui.add(button).clicked() && !selected {
                        next_tab.set(t);
                    }
                }
            });
        });
}
