//! B2B dashboard: EPR brand report, ESG breakdown, building waste and pickup
//! scheduling.
//!
//! Report tables are static demo data. The only live inputs are the session
//! [`EprLog`](crate::epr_log::EprLog) and the bookings submitted through
//! [`DashboardAction`].

pub mod booking;
pub mod calendar;
pub mod report;
#[cfg(test)]
mod tests;

pub use booking::*;
pub use calendar::*;
pub use report::*;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    #[default]
    BuildingManager,
    Corporate,
}

impl DashboardView {
    pub fn label_key(self) -> &'static str {
        match self {
            DashboardView::BuildingManager => "building_manager",
            DashboardView::Corporate => "corporate",
        }
    }
}

#[derive(Event, Debug, Clone, PartialEq)]
pub enum DashboardAction {
    SetView(DashboardView),
    PrevMonth,
    NextMonth,
    SelectDay(u32),
    ScanQrTag,
    ClearQr,
    Submit(BookingForm),
    StartAnother,
}

pub fn handle_dashboard_actions(
    mut actions: EventReader<DashboardAction>,
    mut view: ResMut<DashboardView>,
    mut schedule: ResMut<PickupSchedule>,
) {
    for action in actions.read() {
        match action {
            DashboardAction::SetView(v) => *view = *v,
            DashboardAction::PrevMonth => schedule.prev_month(),
            DashboardAction::NextMonth => schedule.next_month(),
            DashboardAction::SelectDay(day) => schedule.select_day(*day),
            DashboardAction::ScanQrTag => {
                let location = schedule.scan_qr_tag();
                info!("QR tag scanned: {}", location);
            }
            DashboardAction::ClearQr => schedule.clear_qr(),
            DashboardAction::Submit(form) => match schedule.submit(form) {
                Ok(()) => info!(
                    "pickup booked: {:?} {} {:?} on {}, {:.0} kg projected",
                    form.kind,
                    form.volume.trim(),
                    form.unit,
                    schedule.selected_date.as_deref().unwrap_or_default(),
                    schedule.projected_waste_kg()
                ),
                Err(err) => warn!("pickup booking rejected: {}", err),
            },
            DashboardAction::StartAnother => schedule.start_another(),
        }
    }
}

pub struct DashboardPlugin;

impl Plugin for DashboardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DashboardView>()
            .init_resource::<PickupSchedule>()
            .add_event::<DashboardAction>()
            .add_systems(
                Update,
                handle_dashboard_actions.in_set(crate::SimulationSet::Input),
            );
    }
}
