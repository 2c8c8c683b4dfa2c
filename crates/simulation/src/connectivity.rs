//! Online/offline status.
//!
//! Offline only changes presentation and the analysis tick rate. Nothing is
//! queued and sync is never blocked.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connectivity {
    pub online: bool,
}

impl Default for Connectivity {
    fn default() -> Self {
        Self { online: true }
    }
}

impl Connectivity {
    pub fn set_online(&mut self, online: bool) {
        if self.online != online {
            info!("connectivity: {}", if online { "online" } else { "offline" });
        }
        self.online = online;
    }

    pub fn toggle(&mut self) {
        self.set_online(!self.online);
    }
}

/// Request to go on- or offline.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetOnline(pub bool);

pub fn apply_connectivity_changes(
    mut requests: EventReader<SetOnline>,
    mut connectivity: ResMut<Connectivity>,
) {
    for SetOnline(online) in requests.read() {
        connectivity.set_online(*online);
    }
}

pub struct ConnectivityPlugin;

impl Plugin for ConnectivityPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Connectivity>()
            .add_event::<SetOnline>()
            .add_systems(
                Update,
                apply_connectivity_changes.in_set(crate::SimulationSet::Input),
            );
    }
}
