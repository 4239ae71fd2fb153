//! The narrow scene-graph contract the grouping core runs against.
//!
//! Anything that can answer these queries and apply these mutations can be
//! grouped: the in-memory [`Scene`](crate::scene_graph::Scene) implements it,
//! and so can a binding to an external editor.

use std::fmt::Debug;
use std::hash::Hash;

use glam::{Mat4, Vec3};

use crate::grouping::PivotTransform;
use crate::math::EulerXyz;

pub trait SceneHost {
    type Object: Copy + Eq + Hash + Debug;
    type Collection: Copy + Eq + Hash + Debug;

    fn selected_objects(&self) -> Vec<Self::Object>;

    fn active_object(&self) -> Option<Self::Object>;

    fn world_matrix(&self, object: Self::Object) -> Mat4;

    /// The object's own Euler rotation channel.
    fn rotation_euler(&self, object: Self::Object) -> EulerXyz;

    /// The 8 corners of the object's local-space bounding box, if it has geometry.
    fn local_bounding_box(&self, object: Self::Object) -> Option<[Vec3; 8]>;

    fn is_hidden(&self, object: Self::Object) -> bool;

    /// Collections holding the object, in the host's enumeration order.
    fn collections_of(&self, object: Self::Object) -> Vec<Self::Collection>;

    fn object_name(&self, object: Self::Object) -> String;

    /// The collection new objects land in by default.
    fn root_collection(&self) -> Self::Collection;

    /// Creates a parent-only node at `transform` and links it into the root collection.
    fn create_empty(&mut self, name: &str, transform: &PivotTransform) -> Self::Object;

    /// Parents `children` to `parent`, rewriting each child's local transform so
    /// that its world transform is unchanged.
    fn set_parent_keep_transform(&mut self, children: &[Self::Object], parent: Self::Object);

    fn link(&mut self, collection: Self::Collection, object: Self::Object);

    fn unlink(&mut self, collection: Self::Collection, object: Self::Object);

    /// Replaces the selection. `active` is not implicitly selected.
    fn set_selection(&mut self, selected: &[Self::Object], active: Option<Self::Object>);

    fn world_translation(&self, object: Self::Object) -> Vec3 {
        self.world_matrix(object).w_axis.truncate()
    }
}
