//! Grouping selected objects under a new parent node.
//!
//! The command runs in three steps: the [`bounds`] aggregator collects the
//! selection's world-space extents, the [`pivot`] resolver turns them (or the
//! active object) into a transform, and [`reparent`] moves the selection under
//! a fresh empty created at that transform. [`operator::make_group_parent`]
//! ties them together.

pub mod bounds;
pub mod config;
pub mod error;
pub mod operator;
pub mod pivot;
pub mod reparent;
pub mod report;

pub use config::{GroupConfiguration, PivotMode};
pub use error::{GroupError, GroupResult, ParsePivotModeError};
pub use operator::{make_group_parent, GroupReport};
pub use pivot::{resolve_pivot, Downgrade, PivotResolution, PivotTransform};
pub use reparent::ReparentingPlan;
pub use report::{ReportLevel, ReportMessage};
