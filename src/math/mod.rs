pub mod bounds;
pub mod euler;

pub use bounds::AABB;
pub use euler::EulerXyz;
