//! Plugin that installs the property registry.

use bevy::prelude::*;

use super::config::InspectorConfig;
use super::context::PropertyContext;

/// Plugin that makes [`PropertyContext`] and [`InspectorConfig`] available as resources.
///
/// Register properties from a startup system:
///
/// ```no_run
/// use bevy::prelude::*;
/// use property_inspector::{PropertyContext, PropertyInspectorPlugin};
///
/// fn register(mut context: ResMut<PropertyContext>, mut commands: Commands) {
///     let inspector = commands.spawn_empty().id();
///     context.configure(inspector, "Transform", |config| {
///         config.add_properties(["translation.x", "translation.y"]);
///     });
/// }
///
/// App::new()
///     .add_plugins(PropertyInspectorPlugin)
///     .add_systems(Startup, register)
///     .run();
/// ```
pub struct PropertyInspectorPlugin;

impl Plugin for PropertyInspectorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PropertyContext>()
            .init_resource::<InspectorConfig>();
    }
}
