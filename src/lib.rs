//! Group scene objects under a new parent node placed at a computed pivot,
//! keeping every object's world transform.

pub mod grouping;
pub mod host;
pub mod math;
pub mod scene_graph;

pub use grouping::{make_group_parent, GroupConfiguration, GroupError, GroupReport, PivotMode};
pub use host::SceneHost;
pub use scene_graph::Scene;
