//! Demo scene spawned by the `nudge` binary.

use bevy::prelude::*;

use crate::settings::MoverSettings;

/// Spawns the demo scene: the mover cube, a marker on its target, a light
/// and a camera looking at the origin.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn spawn_world_system(
    mut commands: Commands,
    settings: Res<MoverSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::default())),
        MeshMaterial3d(materials.add(Color::srgb(0.8, 0.7, 0.6))),
        settings.spawn_transform(),
        settings.mover(),
        settings.rigid_body(),
        Name::new("Mover"),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(0.1))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.2, 0.2))),
        Transform::from_translation(Vec3::from_array(settings.target)),
        Name::new("Target"),
    ));

    commands.spawn((
        PointLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0),
    ));

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(-4.0, 4.5, 9.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
