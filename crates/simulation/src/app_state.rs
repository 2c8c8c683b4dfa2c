//! Top-level tab navigation.
//!
//! [`Tab`] is a Bevy [`States`] enum so systems can react to entering or
//! leaving a screen (the scan flow resets when its tab is left). It lives in
//! the `simulation` crate so both `ui` and the headless agent can drive it.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Home,
    Map,
    Scan,
    Dashboard,
    Profile,
}

impl Tab {
    /// Bottom navigation order.
    pub fn all() -> &'static [Tab] {
        &[Tab::Home, Tab::Map, Tab::Scan, Tab::Dashboard, Tab::Profile]
    }

    /// Translation key for the tab name.
    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Map => "map",
            Tab::Scan => "scan",
            Tab::Dashboard => "saas",
            Tab::Profile => "profile",
        }
    }
}

/// Shortcut buttons on the home tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    ScanNow,
    ViewMap,
    RequestPickup,
    RedeemPoints,
}

impl QuickAction {
    pub fn all() -> &'static [QuickAction] {
        &[
            QuickAction::ScanNow,
            QuickAction::ViewMap,
            QuickAction::RequestPickup,
            QuickAction::RedeemPoints,
        ]
    }

    pub fn label_key(self) -> &'static str {
        match self {
            QuickAction::ScanNow => "scan_now",
            QuickAction::ViewMap => "view_map",
            QuickAction::RequestPickup => "request_pickup",
            QuickAction::RedeemPoints => "redeem_points",
        }
    }

    pub fn target(self) -> Tab {
        match self {
            QuickAction::ScanNow => Tab::Scan,
            QuickAction::ViewMap => Tab::Map,
            QuickAction::RequestPickup => Tab::Dashboard,
            QuickAction::RedeemPoints => Tab::Profile,
        }
    }
}

/// Logs every tab switch.
pub fn log_tab_changes(mut transitions: EventReader<StateTransitionEvent<Tab>>) {
    for transition in transitions.read() {
        if let (Some(from), Some(to)) = (transition.exited, transition.entered) {
            if from != to {
                info!("tab {:?} -> {:?}", from, to);
            }
        }
    }
}

/// Registers [`Tab`], starting at `Home`. Needs `StatesPlugin`, which
/// headless apps add explicitly.
pub struct AppStatePlugin;

impl Plugin for AppStatePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Tab>()
            .add_systems(Update, log_tab_changes);
    }
}
