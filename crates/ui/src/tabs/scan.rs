//! Scan screen. Renders whichever phase the session is in and turns button
//! presses into [`ScanAction`] events; the session itself is only read.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::catalog::{MaterialType, WasteGroup};
use simulation::config::PROGRESS_COMPLETE;
use simulation::connectivity::Connectivity;
use simulation::detection::DetectionResult;
use simulation::localization::LocalizationState;
use simulation::scan_flow::{CameraFeed, CameraStatus, LearnPrompt, ScanAction, ScanPhase, ScanSession};

use super::tab_panel;
use crate::{theme, widgets};

const ANALYSIS_STEPS: [&str; 4] = ["step_geometry", "step_surface", "step_category", "step_brand"];
const SYNC_STEPS: [&str; 4] = [
    "verifying_disposal",
    "writing_blockchain",
    "crediting_points",
    "data_sync",
];

pub fn scan_tab_ui(
    mut contexts: EguiContexts,
    loc: Res<LocalizationState>,
    session: Res<ScanSession>,
    camera: Res<CameraFeed>,
    connectivity: Res<Connectivity>,
    mut actions: EventWriter<ScanAction>,
) {
    tab_panel(contexts.ctx_mut(), |ui| {
        widgets::heading(ui, loc.t("scan_title"));
        camera_banner(ui, &loc, camera.status);
        if !connectivity.online {
            widgets::banner(ui, theme::WARNING, loc.t("offline_msg"));
        }
        ui.add_space(theme::ITEM_SPACING);

        let mut send = |action: ScanAction| {
            actions.send(action);
        };

        match session.phase {
            ScanPhase::Idle => idle_ui(ui, &loc, &mut send),
            ScanPhase::Analyzing => {
                let processing = if connectivity.online {
                    "cloud_processing"
                } else {
                    "local_processing"
                };
                widgets::caption(ui, loc.t(processing));
                progress_steps(ui, &loc, loc.t("scanning"), session.analysis_progress, &ANALYSIS_STEPS);
            }
            ScanPhase::Result => {
                if let Some(result) = &session.result {
                    result_card(ui, &loc, &session, result);
                }
                learn_prompt_ui(ui, &loc, &session, &mut send);
                ui.add_space(theme::ITEM_SPACING);
                if widgets::primary_button(ui, loc.t("verify_disposal")).clicked() {
                    send(ScanAction::Verify);
                }
                if ui.button(loc.t("cancel")).clicked() {
                    send(ScanAction::Reset);
                }
            }
            ScanPhase::Verifying => {
                widgets::card(ui, |ui| {
                    widgets::heading(ui, loc.t("photo_confirm"));
                    widgets::caption(ui, loc.t("photo_confirm_desc"));
                    frame_line(ui, &loc, "source_photo", session.captured_frame.is_some());
                    ui.label(loc.t("point_at_bin"));
                });
                ui.add_space(theme::ITEM_SPACING);
                if widgets::primary_button(ui, loc.t("capture_disposal_proof")).clicked() {
                    send(ScanAction::CaptureProof);
                }
                if ui.button(loc.t("cancel")).clicked() {
                    send(ScanAction::Reset);
                }
            }
            ScanPhase::Syncing => {
                progress_steps(ui, &loc, loc.t("data_sync"), session.sync_progress, &SYNC_STEPS);
            }
            ScanPhase::Done => done_ui(ui, &loc, &session, &mut send),
        }
    });
}

fn camera_banner(ui: &mut egui::Ui, loc: &LocalizationState, status: CameraStatus) {
    match status {
        CameraStatus::Ready => {}
        CameraStatus::Initializing => widgets::caption(ui, loc.t("camera_connecting")),
        CameraStatus::Unavailable => widgets::banner(ui, theme::WARNING, loc.t("simulation_mode")),
    }
}

fn idle_ui(ui: &mut egui::Ui, loc: &LocalizationState, send: &mut impl FnMut(ScanAction)) {
    widgets::card(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(egui::RichText::new(loc.t("scan_instructions")).size(theme::FONT_HEADING));
            widgets::caption(ui, loc.t("auto_detects"));
            ui.add_space(40.0);
        });
    });
    ui.add_space(theme::ITEM_SPACING);
    if widgets::primary_button(ui, loc.t("capture_to_scan")).clicked() {
        send(ScanAction::Capture);
    }
}

/// Overall bar plus a checklist whose items tick off in equal quarters.
fn progress_steps(
    ui: &mut egui::Ui,
    loc: &LocalizationState,
    title: &str,
    progress: u8,
    steps: &[&str],
) {
    widgets::card(ui, |ui| {
        widgets::heading(ui, title);
        widgets::percent_bar(ui, progress, theme::PRIMARY);
        let per_step = u32::from(PROGRESS_COMPLETE) / steps.len() as u32;
        for (i, key) in steps.iter().enumerate() {
            let reached = u32::from(progress) >= per_step * (i as u32 + 1);
            let (mark, color) = if reached {
                ("✔", theme::SUCCESS)
            } else {
                ("○", theme::TEXT_MUTED)
            };
            ui.label(egui::RichText::new(format!("{} {}", mark, loc.t(key))).color(color));
        }
    });
}

fn group_color(group: WasteGroup) -> egui::Color32 {
    match group {
        WasteGroup::Recyclable => theme::SUCCESS,
        WasteGroup::Organic => theme::WARNING,
        WasteGroup::Residual => theme::TEXT_MUTED,
    }
}

fn result_card(
    ui: &mut egui::Ui,
    loc: &LocalizationState,
    session: &ScanSession,
    result: &DetectionResult,
) {
    widgets::card(ui, |ui| {
        widgets::heading(ui, loc.t("item_detected"));
        ui.label(
            egui::RichText::new(loc.pick(&result.name))
                .size(theme::FONT_HEADING)
                .strong(),
        );
        ui.label(
            egui::RichText::new(loc.pick(&result.group.label()))
                .color(group_color(result.group))
                .strong(),
        );

        match (result.brand, result.low_confidence_brand) {
            (Some(brand), _) => widgets::stat_row(ui, loc.t("brand"), brand),
            (None, Some(suggested)) => widgets::stat_row(
                ui,
                loc.t("brand"),
                &format!("{} ({}?)", loc.t("unidentified_brand"), suggested),
            ),
            (None, None) => widgets::stat_row(ui, loc.t("brand"), loc.t("unidentified_brand")),
        }
        widgets::stat_row(ui, loc.t("shape"), loc.pick(&result.shape.label()));
        widgets::stat_row(ui, loc.t("material_type"), loc.pick(&result.material.label()));
        widgets::stat_row(ui, loc.t("confidence"), &format!("{:.1}%", result.confidence));

        ui.separator();
        widgets::caption(ui, loc.t("disposal_tip"));
        ui.label(loc.pick(&result.tip));

        if let Some(epr) = &session.epr {
            ui.separator();
            widgets::stat_row(
                ui,
                loc.t("epr_data_point"),
                &format!("{} g CO₂", epr.estimated_co2_g),
            );
        }
    });
}

fn learn_prompt_ui(
    ui: &mut egui::Ui,
    loc: &LocalizationState,
    session: &ScanSession,
    send: &mut impl FnMut(ScanAction),
) {
    if session.thank_you_visible() {
        widgets::card(ui, |ui| {
            ui.label(egui::RichText::new(loc.t("thank_you")).color(theme::SUCCESS).strong());
            widgets::caption(ui, loc.t("learning_data"));
        });
        return;
    }
    let Some(prompt) = session.learn_prompt() else {
        return;
    };

    ui.add_space(theme::ITEM_SPACING);
    widgets::card(ui, |ui| {
        widgets::heading(ui, loc.t("help_us_learn"));
        match prompt {
            LearnPrompt::ConfirmBrand {
                suggested,
                alternatives,
            } => {
                widgets::caption(ui, loc.t("new_brand_detected"));
                ui.horizontal_wrapped(|ui| {
                    if widgets::chip(ui, &format!("{} {}", loc.t("confirm_brand"), suggested), true)
                        .clicked()
                    {
                        send(ScanAction::ConfirmBrand);
                    }
                    for brand in alternatives {
                        if widgets::chip(ui, brand, false).clicked() {
                            send(ScanAction::ChooseBrand {
                                brand: brand.to_string(),
                            });
                        }
                    }
                    if widgets::chip(ui, loc.t("other_brand"), false).clicked() {
                        send(ScanAction::OtherBrand);
                    }
                });
            }
            LearnPrompt::ChooseMaterial => {
                widgets::caption(ui, loc.t("is_this_correct"));
                ui.horizontal_wrapped(|ui| {
                    for &material in MaterialType::all() {
                        if widgets::chip(ui, loc.pick(&material.label()), false).clicked() {
                            send(ScanAction::ConfirmMaterial { material });
                        }
                    }
                });
            }
        }
    });
}

fn frame_line(ui: &mut egui::Ui, loc: &LocalizationState, key: &str, captured: bool) {
    let state = if captured { "✔" } else { "-" };
    widgets::stat_row(ui, loc.t(key), state);
}

fn done_ui(
    ui: &mut egui::Ui,
    loc: &LocalizationState,
    session: &ScanSession,
    send: &mut impl FnMut(ScanAction),
) {
    widgets::card(ui, |ui| {
        ui.vertical_centered(|ui| {
            widgets::caption(ui, loc.t("earned_points"));
            ui.label(
                egui::RichText::new(format!("+{} {}", session.earned_points, loc.t("points")))
                    .size(theme::FONT_TITLE)
                    .color(theme::SUCCESS)
                    .strong(),
            );
        });
        if let Some(hash) = session.display_hash() {
            widgets::stat_row(ui, loc.t("tx_hash"), &hash);
        }
        frame_line(ui, loc, "disposal_proof", session.disposal_frame.is_some());
        ui.separator();
        ui.label(egui::RichText::new(loc.t("synced_to_dashboard")).color(theme::PRIMARY));
        widgets::caption(ui, loc.t("data_synced_desc"));
        widgets::caption(ui, loc.t("data_integrity"));
    });
    ui.add_space(theme::ITEM_SPACING);
    if widgets::primary_button(ui, loc.t("start_scan")).clicked() {
        send(ScanAction::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulation::localization::Lang;

    #[test]
    fn test_step_labels_are_translated() {
        let mut loc = LocalizationState::default();
        for lang in [Lang::Vi, Lang::En] {
            loc.lang = lang;
            for key in ANALYSIS_STEPS.iter().chain(SYNC_STEPS.iter()) {
                assert!(loc.get(key).is_some(), "missing {key} for {lang:?}");
            }
        }
    }

    #[test]
    fn test_every_group_has_a_distinct_color() {
        let colors = [
            group_color(WasteGroup::Recyclable),
            group_color(WasteGroup::Organic),
            group_color(WasteGroup::Residual),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }
}
