//! Registers properties for a player and prints the inspector sections once.
//!
//! Runs headless: the sections are written to the log instead of a window.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use property_inspector::{InspectorConfig, PropertyCell, PropertyContext, PropertyInspectorPlugin};

#[derive(Reflect)]
struct Weapon {
    name: String,
    damage: f32,
}

#[derive(Resource, Reflect)]
struct Player {
    name: String,
    health: f32,
    transform: Transform,
    weapon: Option<Weapon>,
    inventory: Vec<String>,
}

/// The inspector entity the properties belong to.
#[derive(Resource)]
struct DemoInspector(Entity);

fn main() {
    App::new()
        .add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(PropertyInspectorPlugin)
        .insert_resource(Player {
            name: "Ferris".to_string(),
            health: 87.5,
            transform: Transform::from_xyz(4.0, 2.0, 0.0),
            weapon: Some(Weapon {
                name: "Claw".to_string(),
                damage: 12.0,
            }),
            inventory: vec!["potion".to_string(), "map".to_string()],
        })
        .add_systems(Startup, register_properties)
        .add_systems(Update, print_sections)
        .run();
}

fn register_properties(mut commands: Commands, mut context: ResMut<PropertyContext>) {
    let inspector = commands.spawn(Name::new("Player Inspector")).id();
    commands.insert_resource(DemoInspector(inspector));

    context.configure(inspector, "General", |config| {
        config.add_property("name", None, None);
        config
            .add_property("health", Some("Health"), None)
            .set_cell_configuration(|cell: &mut PropertyCell| {
                cell.min = Some(0.0);
                cell.max = Some(100.0);
                cell.drag_speed = 0.5;
            });
        config.add_properties(["inventory"]);
    });

    context.configure(inspector, "Transform", |config| {
        config.add_labeled_properties([
            [("transform.translation.x", "X")],
            [("transform.translation.y", "Y")],
            [("transform.translation.z", "Z")],
        ]);
    });

    context.configure(inspector, "Weapon", |config| {
        config.add_properties(["weapon.name", "weapon.damage", "weapon.range"]);
    });
}

fn print_sections(
    context: Res<PropertyContext>,
    config: Res<InspectorConfig>,
    player: Res<Player>,
    inspector: Res<DemoInspector>,
    mut exit: MessageWriter<AppExit>,
) {
    for section in context.sections(inspector.0, &*player, &config) {
        info!("[{}]", section.category);
        for cell in &section.cells {
            info!("  {}: {}", cell.label, cell.display_value(&config));
        }
    }
    exit.write(AppExit::Success);
}
