pub mod collection;
pub mod gltf_import;
pub mod object3d;
pub mod scene;
pub mod transform;

pub use collection::{Collection, CollectionId};
pub use object3d::{EmptyDisplay, Object3D, ObjectId, ObjectKind};
pub use scene::Scene;
pub use transform::Transform;
