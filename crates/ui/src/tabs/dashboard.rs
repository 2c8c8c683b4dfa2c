//! SaaS dashboard: the building-manager view with pickup booking and the
//! corporate EPR/ESG view.
//!
//! The only state owned here is [`BookingFormBuffer`], the text the user is
//! typing into the booking form. Everything else is sent as
//! [`DashboardAction`] and read back from [`PickupSchedule`].

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::dashboard::{
    report_total_items, sector_totals, BookingForm, BuildingSummary, DashboardAction,
    DashboardView, LiveTotals, PickupSchedule, PickupType, VolumeUnit, DAY_HEADERS, EPR_REPORT,
    ESG_BREAKDOWN, WASTE_BY_BUILDING,
};
use simulation::epr_log::EprLog;
use simulation::localization::{format_number, LocalizationState};

use super::tab_panel;
use crate::{theme, widgets};

/// Booking form input, kept between frames until submitted.
#[derive(Resource, Debug, Clone, Default)]
pub struct BookingFormBuffer(pub BookingForm);

pub fn dashboard_tab_ui(
    mut contexts: EguiContexts,
    loc: Res<LocalizationState>,
    view: Res<DashboardView>,
    schedule: Res<PickupSchedule>,
    epr_log: Res<EprLog>,
    mut form: ResMut<BookingFormBuffer>,
    mut actions: EventWriter<DashboardAction>,
) {
    tab_panel(contexts.ctx_mut(), |ui| {
        widgets::heading(ui, loc.t("dashboard"));
        ui.horizontal(|ui| {
            for v in [DashboardView::BuildingManager, DashboardView::Corporate] {
                if widgets::chip(ui, loc.t(v.label_key()), *view == v).clicked() && *view != v {
                    actions.send(DashboardAction::SetView(v));
                }
            }
        });
        ui.add_space(theme::ITEM_SPACING);

        match *view {
            DashboardView::BuildingManager => {
                building_view(ui, &loc, &schedule, &mut form.0, &mut actions)
            }
            DashboardView::Corporate => corporate_view(ui, &loc, &epr_log),
        }
    });
}

// =============================================================================
// Building manager
// =============================================================================

fn building_view(
    ui: &mut egui::Ui,
    loc: &LocalizationState,
    schedule: &PickupSchedule,
    form: &mut BookingForm,
    actions: &mut EventWriter<DashboardAction>,
) {
    let summary = BuildingSummary::from_schedule(schedule);
    widgets::card(ui, |ui| {
        ui.horizontal(|ui| {
            widgets::stat_tile(
                ui,
                &format!("{} kg", format_number(summary.waste_kg as i64)),
                loc.t("waste_volume"),
            );
            ui.add_space(16.0);
            widgets::stat_tile(
                ui,
                &format!("{} kg", format_number(summary.co2_kg as i64)),
                loc.t("co2_reduced"),
            );
            ui.add_space(16.0);
            widgets::stat_tile(ui, &format_number(summary.scans as i64), loc.t("total_scans"));
        });
        widgets::caption(ui, loc.t("this_month"));
    });

    ui.add_space(theme::ITEM_SPACING);
    widgets::card(ui, |ui| {
        widgets::heading(ui, loc.t("waste_volume"));
        let max = WASTE_BY_BUILDING
            .iter()
            .map(|b| b.total())
            .max()
            .unwrap_or(1)
            .max(1);
        for building in WASTE_BY_BUILDING {
            ui.horizontal(|ui| {
                ui.label(building.building);
                widgets::caption(ui, &format!("{} kg", building.total()));
            });
            widgets::fraction_bar(ui, building.total() as f32 / max as f32, theme::PRIMARY);
            let parts: Vec<String> = building
                .by_material()
                .iter()
                .map(|(material, kg)| format!("{} {}", loc.pick(&material.label()), kg))
                .collect();
            widgets::caption(ui, &parts.join(" · "));
        }
    });

    ui.add_space(theme::ITEM_SPACING);
    widgets::card(ui, |ui| {
        widgets::heading(ui, loc.t("schedule_pickup"));
        calendar_ui(ui, loc, schedule, actions);
        ui.separator();
        if schedule.submitted {
            ui.label(
                egui::RichText::new(loc.t("request_submitted"))
                    .color(theme::SUCCESS)
                    .strong(),
            );
            widgets::caption(ui, loc.t("pickup_recorded"));
            if ui.button(loc.t("submit_another")).clicked() {
                *form = BookingForm::default();
                actions.send(DashboardAction::StartAnother);
            }
        } else {
            booking_form_ui(ui, loc, schedule, form, actions);
        }
    });

    ui.add_space(theme::ITEM_SPACING);
    widgets::card(ui, |ui| {
        widgets::heading(ui, loc.t("upcoming_pickups"));
        for booking in schedule.upcoming() {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&booking.date).strong());
                ui.label(loc.t(booking.kind.label_key()));
                widgets::caption(
                    ui,
                    &format!("{} {}", booking.volume, loc.t(booking.unit.label_key())),
                );
            });
            if !booking.location.is_empty() {
                widgets::caption(ui, &booking.location);
            }
        }
        ui.separator();
        let projected = schedule.projected_waste_kg();
        widgets::stat_row(ui, loc.t("projected_esg"), &format!("{:.0} kg", projected));
        widgets::stat_row(ui, loc.t("bookings"), &schedule.bookings.len().to_string());
    });
}

fn calendar_ui(
    ui: &mut egui::Ui,
    loc: &LocalizationState,
    schedule: &PickupSchedule,
    actions: &mut EventWriter<DashboardAction>,
) {
    let month = schedule.calendar;
    ui.horizontal(|ui| {
        if ui.button("<").clicked() {
            actions.send(DashboardAction::PrevMonth);
        }
        ui.label(egui::RichText::new(month.title(loc.lang)).strong());
        if ui.button(">").clicked() {
            actions.send(DashboardAction::NextMonth);
        }
    });

    egui::Grid::new("pickup_calendar")
        .num_columns(7)
        .spacing(egui::vec2(4.0, 4.0))
        .show(ui, |ui| {
            for header in &DAY_HEADERS {
                widgets::caption(ui, loc.pick(header));
            }
            ui.end_row();

            let lead = month.first_weekday();
            for _ in 0..lead {
                ui.label("");
            }
            for day in 1..=month.days() {
                let key = month.key(day);
                let selected = schedule.selected_date.as_deref() == Some(key.as_str());
                let booked = schedule.bookings_on(&key) > 0;
                let mut text = egui::RichText::new(day.to_string());
                if booked {
                    text = text.color(theme::SECONDARY).strong();
                }
                let fill = if selected {
                    theme::PRIMARY
                } else {
                    theme::BG_CARD
                };
                if ui
                    .add(egui::Button::new(text).fill(fill).min_size(egui::vec2(30.0, 26.0)))
                    .clicked()
                {
                    actions.send(DashboardAction::SelectDay(day));
                }
                if (lead + day) % 7 == 0 {
                    ui.end_row();
                }
            }
        });
}

fn booking_form_ui(
    ui: &mut egui::Ui,
    loc: &LocalizationState,
    schedule: &PickupSchedule,
    form: &mut BookingForm,
    actions: &mut EventWriter<DashboardAction>,
) {
    widgets::stat_row(
        ui,
        loc.t("select_date"),
        schedule.selected_date.as_deref().unwrap_or("-"),
    );

    widgets::caption(ui, loc.t("pickup_type"));
    ui.horizontal_wrapped(|ui| {
        for &kind in PickupType::all() {
            if widgets::chip(ui, loc.t(kind.label_key()), form.kind == kind).clicked() {
                form.kind = kind;
            }
        }
    });

    widgets::caption(ui, loc.t("estimated_amount"));
    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(&mut form.volume).desired_width(90.0));
        for unit in [VolumeUnit::Kg, VolumeUnit::Tons] {
            if widgets::chip(ui, loc.t(unit.label_key()), form.unit == unit).clicked() {
                form.unit = unit;
            }
        }
    });

    widgets::caption(ui, loc.t("address"));
    match &schedule.qr_location {
        Some(location) => {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("✔ {}", loc.t("qr_verified")))
                        .color(theme::SUCCESS),
                );
                if ui.small_button("x").clicked() {
                    actions.send(DashboardAction::ClearQr);
                }
            });
            widgets::caption(ui, location);
        }
        None => {
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut form.location)
                        .hint_text(loc.t("enter_address"))
                        .desired_width(ui.available_width() - 110.0),
                );
                if ui.button(loc.t("scan_qr_tag")).clicked() {
                    actions.send(DashboardAction::ScanQrTag);
                }
            });
        }
    }

    widgets::caption(ui, loc.t("notes"));
    ui.add(
        egui::TextEdit::multiline(&mut form.notes)
            .hint_text(loc.t("notes_placeholder"))
            .desired_rows(2)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(theme::ITEM_SPACING);
    let ready = schedule.selected_date.is_some() && !form.volume.trim().is_empty();
    let submit = ui.add_enabled(
        ready,
        egui::Button::new(
            egui::RichText::new(loc.t("submit_request"))
                .color(theme::TEXT_HEADING)
                .strong(),
        )
        .fill(theme::PRIMARY)
        .min_size(egui::vec2(ui.available_width(), 34.0)),
    );
    if submit.clicked() {
        let mut booking = form.clone();
        if let Some(location) = &schedule.qr_location {
            booking.location = location.clone();
        }
        actions.send(DashboardAction::Submit(booking));
    }
}

// =============================================================================
// Corporate
// =============================================================================

fn corporate_view(ui: &mut egui::Ui, loc: &LocalizationState, epr_log: &EprLog) {
    let total_items = report_total_items();

    widgets::card(ui, |ui| {
        widgets::heading(ui, loc.t("epr_detailed_report"));
        widgets::caption(ui, loc.t("by_brand"));
        egui::Grid::new("epr_report")
            .num_columns(5)
            .striped(true)
            .show(ui, |ui| {
                for key in ["brand", "qty", "category", "sector"] {
                    widgets::caption(ui, loc.t(key));
                }
                widgets::caption(ui, "CO₂ (g)");
                ui.end_row();
                for row in EPR_REPORT {
                    ui.label(loc.pick(&row.brand_label()));
                    ui.label(format_number(i64::from(row.items)));
                    ui.label(loc.pick(&row.category_label()));
                    ui.label(loc.pick(&row.sector.label()));
                    ui.label(format_number(i64::from(row.co2_g)));
                    ui.end_row();
                }
            });
        widgets::stat_row(
            ui,
            loc.t("items_collected"),
            &format_number(i64::from(total_items)),
        );
    });

    ui.add_space(theme::ITEM_SPACING);
    widgets::card(ui, |ui| {
        widgets::heading(ui, loc.t("waste_by_sector"));
        for (sector, items) in sector_totals() {
            let share = items as f32 / total_items.max(1) as f32;
            ui.horizontal(|ui| {
                ui.label(loc.pick(&sector.label()));
                widgets::caption(ui, &format!("{:.0}%", share * 100.0));
            });
            widgets::fraction_bar(ui, share, theme::SECONDARY);
        }
    });

    ui.add_space(theme::ITEM_SPACING);
    widgets::card(ui, |ui| {
        widgets::heading(ui, loc.t("esg_index"));
        for share in ESG_BREAKDOWN {
            ui.horizontal(|ui| {
                ui.label(loc.pick(&share.label));
                widgets::caption(ui, &format!("{}%", share.percent));
            });
            widgets::fraction_bar(ui, share.percent as f32 / 100.0, theme::PRIMARY);
        }
    });

    ui.add_space(theme::ITEM_SPACING);
    let live = LiveTotals::from_log(epr_log);
    widgets::card(ui, |ui| {
        widgets::heading(ui, loc.t("live_session"));
        widgets::stat_row(ui, loc.t("total_scans"), &live.scans_logged.to_string());
        widgets::stat_row(
            ui,
            loc.t("recyclable_share"),
            &format!("{:.0}%", live.recyclable_share * 100.0),
        );
        widgets::stat_row(
            ui,
            loc.t("co2_reduced"),
            &format!("{} g", format_number(live.total_co2_g as i64)),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulation::localization::Lang;

    #[test]
    fn test_form_labels_are_translated() {
        let mut loc = LocalizationState::default();
        for lang in [Lang::Vi, Lang::En] {
            loc.lang = lang;
            for kind in PickupType::all() {
                assert!(loc.get(kind.label_key()).is_some());
            }
            for unit in [VolumeUnit::Kg, VolumeUnit::Tons] {
                assert!(loc.get(unit.label_key()).is_some());
            }
            for view in [DashboardView::BuildingManager, DashboardView::Corporate] {
                assert!(loc.get(view.label_key()).is_some());
            }
        }
    }

    #[test]
    fn test_form_buffer_starts_empty() {
        let buffer = BookingFormBuffer::default();
        assert!(buffer.0.volume.is_empty());
        assert_eq!(buffer.0.kind, PickupType::Battery);
        assert_eq!(buffer.0.unit, VolumeUnit::Kg);
    }
}
