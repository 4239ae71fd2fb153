use id_arena::Id;

use crate::scene_graph::object3d::ObjectId;

pub type CollectionId = Id<Collection>;

/// Named organizational container. Independent of the parent/child hierarchy:
/// an object may sit in several collections, or none.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub name: String,
    pub object_ids: Vec<ObjectId>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            object_ids: Vec::new(),
        }
    }

    pub fn contains(&self, object_id: ObjectId) -> bool {
        self.object_ids.contains(&object_id)
    }

    /// Returns false if the object was already linked.
    pub fn link(&mut self, object_id: ObjectId) -> bool {
        if self.contains(object_id) {
            return false;
        }
        self.object_ids.push(object_id);
        true
    }

    pub fn unlink(&mut self, object_id: ObjectId) -> bool {
        let before = self.object_ids.len();
        self.object_ids.retain(|&id| id != object_id);
        self.object_ids.len() != before
    }
}
