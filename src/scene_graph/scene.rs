use glam::{Mat4, Vec3};
use id_arena::Arena;
use itertools::Itertools;
use std::fmt::Write;

use crate::grouping::PivotTransform;
use crate::host::SceneHost;
use crate::math::EulerXyz;
use crate::scene_graph::collection::{Collection, CollectionId};
use crate::scene_graph::object3d::{EmptyDisplay, Object3D, ObjectId, ObjectKind};
use crate::scene_graph::transform::Transform;

pub const ROOT_COLLECTION_NAME: &str = "Scene Collection";

pub struct Scene {
    pub objects: Arena<Object3D>,
    pub collections: Arena<Collection>,
    root_collection: CollectionId,
    selection: Vec<ObjectId>,
    active: Option<ObjectId>,
}

impl Scene {
    pub fn new() -> Self {
        let mut collections = Arena::new();
        let root_collection = collections.alloc(Collection::new(ROOT_COLLECTION_NAME));

        Self {
            objects: Arena::new(),
            collections,
            root_collection,
            selection: Vec::new(),
            active: None,
        }
    }

    /// Adds an object and links it into the root collection.
    pub fn add_object(&mut self, object: Object3D) -> ObjectId {
        let collection_id = self.root_collection;
        self.add_object_to(object, collection_id)
    }

    pub fn add_object_to(&mut self, object: Object3D, collection_id: CollectionId) -> ObjectId {
        let object_id = self.objects.alloc(object);
        self.link_object(collection_id, object_id);
        object_id
    }

    pub fn add_collection(&mut self, name: impl Into<String>) -> CollectionId {
        self.collections.alloc(Collection::new(name))
    }

    pub fn root_collection_id(&self) -> CollectionId {
        self.root_collection
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&Object3D> {
        self.objects.get(id)
    }

    pub fn get_object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, object)| object.name == name)
            .map(|(id, _)| id)
    }

    pub fn get_collection(&self, id: CollectionId) -> Option<&Collection> {
        self.collections.get(id)
    }

    pub fn get_collection_by_name(&self, name: &str) -> Option<CollectionId> {
        self.collections
            .iter()
            .find(|(_, collection)| collection.name == name)
            .map(|(id, _)| id)
    }

    /// `base` if no object uses it yet, otherwise the first free `base.NNN`.
    pub fn unique_object_name(&self, base: &str) -> String {
        let taken = |name: &str| self.objects.iter().any(|(_, object)| object.name == name);

        if !taken(base) {
            return base.to_string();
        }

        (1..)
            .map(|n| format!("{base}.{n:03}"))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    pub fn root_objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .filter(|(_, object)| object.parent_id.is_none())
            .map(|(id, _)| id)
    }

    /// Composes `parent_inverse * local` from the object up to its root.
    pub fn world_matrix(&self, object_id: ObjectId) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut current = self.objects.get(object_id);

        while let Some(object) = current {
            matrix = object.parent_inverse * object.transform.get_local_matrix() * matrix;
            current = object.parent(self);
        }

        matrix
    }

    /// True if `ancestor` appears anywhere above `object_id` in the hierarchy.
    pub fn is_ancestor(&self, ancestor: ObjectId, object_id: ObjectId) -> bool {
        let mut current = self.objects.get(object_id).and_then(|o| o.parent_id);

        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.objects.get(id).and_then(|o| o.parent_id);
        }

        false
    }

    /// Sets the parent of an object and updates child relationships. The
    /// parent inverse is cleared and the local transform is left as is, so
    /// the world transform may change.
    pub fn set_object_parent(&mut self, child_id: ObjectId, new_parent_id: Option<ObjectId>) {
        // Remove from old parent's children list
        if let Some(child) = self.objects.get(child_id) {
            if let Some(old_parent_id) = child.parent_id {
                if let Some(old_parent) = self.objects.get_mut(old_parent_id) {
                    old_parent.child_ids.retain(|&id| id != child_id);
                }
            }
        }

        // Set new parent and add to new parent's children list
        if let Some(child) = self.objects.get_mut(child_id) {
            child.parent_id = new_parent_id;
            child.parent_inverse = Mat4::IDENTITY;

            if let Some(new_parent_id) = new_parent_id {
                if let Some(new_parent) = self.objects.get_mut(new_parent_id) {
                    new_parent.child_ids.push(child_id);
                }
            }
        }
    }

    /// Reparents without touching the local transform: the parent inverse
    /// absorbs the difference so the world transform is unchanged, shear
    /// included. Returns false, leaving the scene untouched, when the link
    /// would create a cycle.
    pub fn set_object_parent_keep_transform(
        &mut self,
        child_id: ObjectId,
        new_parent_id: Option<ObjectId>,
    ) -> bool {
        if let Some(parent_id) = new_parent_id {
            if parent_id == child_id || self.is_ancestor(child_id, parent_id) {
                log::warn!(
                    "Refusing to parent {:?} to {:?}: would create a cycle",
                    child_id,
                    parent_id
                );
                return false;
            }
        }

        let world = self.world_matrix(child_id);
        let parent_world = new_parent_id
            .map(|id| self.world_matrix(id))
            .unwrap_or(Mat4::IDENTITY);

        self.set_object_parent(child_id, new_parent_id);

        if let Some(child) = self.objects.get_mut(child_id) {
            let local = child.transform.get_local_matrix();
            child.parent_inverse = parent_world.inverse() * world * local.inverse();
        }

        true
    }

    pub fn set_object_transform(
        &mut self,
        object_id: ObjectId,
        translation: Vec3,
        rotation: EulerXyz,
        scale: Vec3,
    ) {
        if let Some(object) = self.objects.get_mut(object_id) {
            object.transform.set_transform(translation, rotation, scale);
        }
    }

    pub fn get_object_transform(&self, object_id: ObjectId) -> Option<&Transform> {
        self.objects.get(object_id).map(|object| &object.transform)
    }

    /// Collections containing the object, in creation order.
    pub fn object_collections(&self, object_id: ObjectId) -> Vec<CollectionId> {
        self.collections
            .iter()
            .filter(|(_, collection)| collection.contains(object_id))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn link_object(&mut self, collection_id: CollectionId, object_id: ObjectId) {
        if let Some(collection) = self.collections.get_mut(collection_id) {
            collection.link(object_id);
        }
    }

    pub fn unlink_object(&mut self, collection_id: CollectionId, object_id: ObjectId) {
        if let Some(collection) = self.collections.get_mut(collection_id) {
            collection.unlink(object_id);
        }
    }

    pub fn select(&mut self, selected: &[ObjectId], active: Option<ObjectId>) {
        self.selection = selected.iter().copied().unique().collect();
        self.active = active;
    }

    pub fn selection(&self) -> &[ObjectId] {
        &self.selection
    }

    pub fn active(&self) -> Option<ObjectId> {
        self.active
    }

    pub fn is_selected(&self, object_id: ObjectId) -> bool {
        self.selection.contains(&object_id)
    }

    /// Human-readable dump of the hierarchy followed by collection contents.
    pub fn outline(&self) -> String {
        let mut out = String::new();

        for root_id in self.root_objects() {
            self.outline_object(&mut out, root_id, 0);
        }

        let _ = writeln!(out, "Collections:");
        for (_, collection) in self.collections.iter() {
            let names = collection
                .object_ids
                .iter()
                .filter_map(|id| self.get_object(*id))
                .map(|object| object.name.as_str())
                .join(", ");
            let _ = writeln!(out, "  {}: [{}]", collection.name, names);
        }

        out
    }

    fn outline_object(&self, out: &mut String, object_id: ObjectId, depth: usize) {
        let Some(object) = self.get_object(object_id) else {
            return;
        };

        let location = self.world_translation(object_id);
        let marker = match (self.active == Some(object_id), self.is_selected(object_id)) {
            (true, _) => "@",
            (false, true) => "*",
            (false, false) => " ",
        };

        let _ = writeln!(
            out,
            "{}{} {} ({:?}) world ({:.3}, {:.3}, {:.3})",
            "  ".repeat(depth),
            marker,
            object.name,
            object.kind,
            location.x,
            location.y,
            location.z
        );

        for &child_id in &object.child_ids {
            self.outline_object(out, child_id, depth + 1);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneHost for Scene {
    type Object = ObjectId;
    type Collection = CollectionId;

    fn selected_objects(&self) -> Vec<ObjectId> {
        self.selection.clone()
    }

    fn active_object(&self) -> Option<ObjectId> {
        self.active
    }

    fn world_matrix(&self, object: ObjectId) -> Mat4 {
        Scene::world_matrix(self, object)
    }

    fn rotation_euler(&self, object: ObjectId) -> EulerXyz {
        self.get_object(object)
            .map(|o| o.transform.rotation())
            .unwrap_or(EulerXyz::IDENTITY)
    }

    fn local_bounding_box(&self, object: ObjectId) -> Option<[Vec3; 8]> {
        self.get_object(object)
            .and_then(|o| o.local_bounds)
            .map(|bounds| bounds.corners())
    }

    fn is_hidden(&self, object: ObjectId) -> bool {
        self.get_object(object).is_some_and(|o| o.hidden)
    }

    fn collections_of(&self, object: ObjectId) -> Vec<CollectionId> {
        self.object_collections(object)
    }

    fn object_name(&self, object: ObjectId) -> String {
        self.get_object(object)
            .map(|o| o.name.clone())
            .unwrap_or_default()
    }

    fn root_collection(&self) -> CollectionId {
        self.root_collection
    }

    fn create_empty(&mut self, name: &str, transform: &PivotTransform) -> ObjectId {
        let name = self.unique_object_name(name);
        let object = Object3D::new(name, ObjectKind::Empty(EmptyDisplay::PlainAxes))
            .with_transform(Transform::new(
                transform.location,
                transform.rotation,
                transform.scale(),
            ));

        self.add_object(object)
    }

    fn set_parent_keep_transform(&mut self, children: &[ObjectId], parent: ObjectId) {
        for &child_id in children {
            self.set_object_parent_keep_transform(child_id, Some(parent));
        }
    }

    fn link(&mut self, collection: CollectionId, object: ObjectId) {
        self.link_object(collection, object);
    }

    fn unlink(&mut self, collection: CollectionId, object: ObjectId) {
        self.unlink_object(collection, object);
    }

    fn set_selection(&mut self, selected: &[ObjectId], active: Option<ObjectId>) {
        self.select(selected, active);
    }
}
