use glam::{Mat4, Vec3};

use crate::grouping::bounds::world_bounds;
use crate::grouping::config::{GroupConfiguration, PivotMode};
use crate::grouping::error::{GroupError, GroupResult};
use crate::host::SceneHost;
use crate::math::EulerXyz;

/// Transform the new group node is created with. The scale is always one so
/// the group never compounds scale onto its children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotTransform {
    pub location: Vec3,
    pub rotation: EulerXyz,
}

impl PivotTransform {
    pub fn new(location: Vec3, rotation: EulerXyz) -> Self {
        Self { location, rotation }
    }

    pub fn scale(&self) -> Vec3 {
        Vec3::ONE
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation.to_quat(), self.location)
    }
}

/// Why the requested pivot mode was replaced by another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Downgrade {
    /// Active-object pivot requested without an active object in the selection.
    ActiveObjectUnavailable,
}

impl Downgrade {
    pub fn message(&self) -> &'static str {
        match self {
            Downgrade::ActiveObjectUnavailable => {
                "Active object is not available, using Bounds Center instead"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotResolution {
    pub transform: PivotTransform,
    /// The mode actually used, which differs from the requested one after a downgrade.
    pub mode: PivotMode,
    pub downgrade: Option<Downgrade>,
}

/// Computes where the group node goes. Read-only: nothing in the scene changes.
pub fn resolve_pivot<H: SceneHost>(
    host: &H,
    objects: &[H::Object],
    config: &GroupConfiguration,
    active: Option<H::Object>,
) -> GroupResult<PivotResolution> {
    if objects.is_empty() {
        return Err(GroupError::EmptySelection);
    }

    let active = active.filter(|active| objects.contains(active));

    let resolution = match config.pivot_mode {
        PivotMode::ActiveObject => match active {
            Some(active) => PivotResolution {
                transform: PivotTransform::new(
                    host.world_translation(active),
                    host.rotation_euler(active),
                ),
                mode: PivotMode::ActiveObject,
                downgrade: None,
            },
            None => {
                let downgrade = Downgrade::ActiveObjectUnavailable;
                log::info!("{}", downgrade.message());

                // Alignment is not retried: there is no usable active object.
                let transform = bounds_pivot(host, objects, PivotMode::BoundsCenter, None)?;
                PivotResolution {
                    transform,
                    mode: PivotMode::BoundsCenter,
                    downgrade: Some(downgrade),
                }
            }
        },
        mode => {
            let align_to = active.filter(|_| config.align_rotation_to_active);
            PivotResolution {
                transform: bounds_pivot(host, objects, mode, align_to)?,
                mode,
                downgrade: None,
            }
        }
    };

    log::debug!(
        "Resolved pivot ({}): location {} rotation {:?}",
        resolution.mode,
        resolution.transform.location,
        resolution.transform.rotation
    );

    Ok(resolution)
}

fn bounds_pivot<H: SceneHost>(
    host: &H,
    objects: &[H::Object],
    mode: PivotMode,
    align_to: Option<H::Object>,
) -> GroupResult<PivotTransform> {
    let bounds = world_bounds(host, objects).ok_or(GroupError::UndefinedBounds)?;

    let location = match mode {
        PivotMode::BoundsBottom => bounds.bottom_center(),
        _ => bounds.center(),
    };

    let rotation = align_to
        .map(|object| host.rotation_euler(object))
        .unwrap_or(EulerXyz::IDENTITY);

    Ok(PivotTransform::new(location, rotation))
}
