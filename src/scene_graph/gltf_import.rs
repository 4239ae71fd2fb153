use std::path::Path;

use anyhow::Context;
use glam::{Quat, Vec3};

use crate::math::{EulerXyz, AABB};
use crate::scene_graph::collection::CollectionId;
use crate::scene_graph::object3d::{EmptyDisplay, Object3D, ObjectId, ObjectKind};
use crate::scene_graph::scene::Scene;
use crate::scene_graph::transform::Transform;

impl Scene {
    /// Imports every scene of a glTF file. Each glTF scene becomes a collection,
    /// each node an object. Returns the ids of the imported root nodes.
    pub fn import_gltf(&mut self, path: impl AsRef<Path>) -> anyhow::Result<Vec<ObjectId>> {
        let path = path.as_ref();
        let gltf = gltf::Gltf::open(path)
            .with_context(|| format!("Failed to open glTF file {}", path.display()))?;

        let mut roots = Vec::new();

        for scene in gltf.scenes() {
            let collection_name = scene
                .name()
                .map(String::from)
                .unwrap_or_else(|| format!("Scene {}", scene.index()));
            let collection_id = self.add_collection(collection_name);

            for node in scene.nodes() {
                roots.push(self.spawn_gltf_node(&node, None, collection_id));
            }
        }

        if roots.is_empty() {
            return Err(anyhow::anyhow!("No nodes in glTF file {}", path.display()));
        }

        log::info!(
            "Imported {} objects from {}",
            self.objects.len(),
            path.display()
        );

        Ok(roots)
    }

    fn spawn_gltf_node(
        &mut self,
        node: &gltf::Node,
        parent: Option<ObjectId>,
        collection_id: CollectionId,
    ) -> ObjectId {
        let node_name = node
            .name()
            .map(String::from)
            .unwrap_or_else(|| format!("Node {}", node.index()));

        let (translation, rotation, scale) = node.transform().decomposed();
        let transform = Transform::new(
            translation.into(),
            EulerXyz::from_quat(Quat::from_array(rotation)),
            scale.into(),
        );

        let (kind, local_bounds) = match node.mesh() {
            Some(mesh) => (ObjectKind::Mesh, mesh_bounds(&mesh)),
            None if node.camera().is_some() => (ObjectKind::Camera, None),
            None => (ObjectKind::Empty(EmptyDisplay::PlainAxes), None),
        };

        let mut object = Object3D::new(self.unique_object_name(&node_name), kind)
            .with_transform(transform);
        object.local_bounds = local_bounds;

        let object_id = self.add_object_to(object, collection_id);

        if let Some(parent_id) = parent {
            self.set_object_parent(object_id, Some(parent_id));
        }

        for child in node.children() {
            self.spawn_gltf_node(&child, Some(object_id), collection_id);
        }

        object_id
    }
}

/// Union of the accessor bounds of every primitive in the mesh.
fn mesh_bounds(mesh: &gltf::Mesh) -> Option<AABB> {
    mesh.primitives()
        .map(|primitive| {
            let bounds = primitive.bounding_box();
            AABB::new(Vec3::from(bounds.min), Vec3::from(bounds.max))
        })
        .reduce(AABB::union)
}
