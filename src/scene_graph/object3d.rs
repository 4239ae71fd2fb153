use glam::Mat4;
use id_arena::Id;

use crate::math::AABB;
use crate::scene_graph::scene::Scene;
use crate::scene_graph::transform::Transform;

pub type ObjectId = Id<Object3D>;

/// How a parent-only node is drawn in an editor viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyDisplay {
    #[default]
    PlainAxes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Mesh,
    Light,
    Camera,
    Empty(EmptyDisplay),
}

#[derive(Debug, Clone)]
pub struct Object3D {
    pub name: String,
    pub kind: ObjectKind,
    pub transform: Transform,
    /// Local-space bounds; `None` for objects without geometry.
    pub local_bounds: Option<AABB>,
    pub hidden: bool,
    /// Applied between the parent's world matrix and the local transform,
    /// so `world = parent_world * parent_inverse * local`.
    pub parent_inverse: Mat4,
    pub parent_id: Option<ObjectId>,
    pub child_ids: Vec<ObjectId>,
}

impl Object3D {
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_bounds(mut self, bounds: AABB) -> Self {
        self.local_bounds = Some(bounds);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn parent<'a>(&self, scene: &'a Scene) -> Option<&'a Object3D> {
        self.parent_id.and_then(|id| scene.get_object(id))
    }
}

impl Default for Object3D {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: ObjectKind::Empty(EmptyDisplay::PlainAxes),
            transform: Transform::default(),
            local_bounds: None,
            hidden: false,
            parent_inverse: Mat4::IDENTITY,
            parent_id: None,
            child_ids: Vec::new(),
        }
    }
}
