use glam::Vec3;

use crate::host::SceneHost;
use crate::math::AABB;

/// World-space points an object contributes to the selection bounds: its
/// bounding box corners through the full world matrix, or its origin when it
/// has no geometry.
pub fn world_sample_points<H: SceneHost>(host: &H, object: H::Object) -> Vec<Vec3> {
    let world = host.world_matrix(object);

    match host.local_bounding_box(object).and_then(AABB::from_points) {
        Some(local) => local.transformed_corners(&world).to_vec(),
        None => vec![world.w_axis.truncate()],
    }
}

/// Axis-aligned world bounds of all objects, `None` only for an empty slice.
pub fn world_bounds<H: SceneHost>(host: &H, objects: &[H::Object]) -> Option<AABB> {
    let bounds = AABB::from_points(
        objects
            .iter()
            .flat_map(|&object| world_sample_points(host, object)),
    );

    if let Some(bounds) = &bounds {
        log::debug!(
            "World bounds of {} objects: min {} max {}",
            objects.len(),
            bounds.min,
            bounds.max
        );
    }

    bounds
}
