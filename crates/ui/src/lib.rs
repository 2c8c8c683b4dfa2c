use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use simulation::app_state::Tab;

pub mod shell;
pub mod tabs;
pub mod theme;
pub mod widgets;

/// Draws the app with egui. Reads simulation resources and sends events;
/// the only state it owns is the booking form buffer.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<tabs::dashboard::BookingFormBuffer>()
            .add_systems(Startup, theme::apply_eco_theme)
            .add_systems(Update, (shell::header_ui, shell::bottom_nav_ui).chain())
            .add_systems(
                Update,
                (
                    tabs::home::home_tab_ui.run_if(in_state(Tab::Home)),
                    tabs::map::map_tab_ui.run_if(in_state(Tab::Map)),
                    tabs::scan::scan_tab_ui.run_if(in_state(Tab::Scan)),
                    tabs::dashboard::dashboard_tab_ui.run_if(in_state(Tab::Dashboard)),
                    tabs::profile::profile_tab_ui.run_if(in_state(Tab::Profile)),
                )
                    .after(shell::bottom_nav_ui),
            );
    }
}
