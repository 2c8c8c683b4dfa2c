use bevy::prelude::*;

use crate::*;

/// Register all simulation feature plugins.
///
/// Each plugin is registered on its own line. When adding a feature plugin,
/// append a new `app.add_plugins(...)` line to the appropriate section.
pub(crate) fn register_feature_plugins(app: &mut App) {
    // Shell and ambient state
    app.add_plugins(app_state::AppStatePlugin);
    app.add_plugins(sim_rng::SimRngPlugin);
    app.add_plugins(localization::LocalizationPlugin);
    app.add_plugins(connectivity::ConnectivityPlugin);

    // Scan pipeline
    app.add_plugins(epr_log::EprLogPlugin);
    app.add_plugins(points::PointsPlugin);
    app.add_plugins(scan_flow::ScanFlowPlugin);

    // Other tabs
    app.add_plugins(collection_points::CollectionPointsPlugin);
    app.add_plugins(dashboard::DashboardPlugin);
}
