//! Collection map: kind filter, search box and the matching points.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::collection_points::{CollectionMapState, PointFilter, PointKind};
use simulation::localization::LocalizationState;

use super::tab_panel;
use crate::{theme, widgets};

pub fn map_tab_ui(
    mut contexts: EguiContexts,
    loc: Res<LocalizationState>,
    mut map: ResMut<CollectionMapState>,
) {
    tab_panel(contexts.ctx_mut(), |ui| {
        widgets::heading(ui, loc.t("collection_map"));

        ui.horizontal(|ui| {
            for &filter in PointFilter::all() {
                if widgets::chip(ui, loc.t(filter.label_key()), map.filter == filter).clicked() {
                    map.filter = filter;
                }
            }
        });
        ui.add(
            egui::TextEdit::singleline(&mut map.search)
                .hint_text(loc.t("find_nearest"))
                .desired_width(f32::INFINITY),
        );
        ui.add_space(theme::ITEM_SPACING);

        for point in map.visible() {
            widgets::card(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(point.name).strong());
                    if point.verified {
                        ui.label(
                            egui::RichText::new(format!("✔ {}", loc.t("verified")))
                                .size(theme::FONT_SMALL)
                                .color(theme::SUCCESS),
                        );
                    }
                });
                let kind_color = match point.kind {
                    PointKind::Recycling => theme::PRIMARY,
                    PointKind::Ewaste => theme::SECONDARY,
                };
                ui.label(
                    egui::RichText::new(loc.t(point.kind.label_key()))
                        .size(theme::FONT_SMALL)
                        .color(kind_color),
                );
                widgets::caption(ui, point.address);
                ui.horizontal(|ui| {
                    widgets::caption(
                        ui,
                        &format!("{} · {:.4}, {:.4}", point.distance, point.lat, point.lng),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_enabled(false, egui::Button::new(loc.t("navigate")));
                    });
                });
            });
            ui.add_space(theme::ITEM_SPACING);
        }
    });
}
