use glam::{Mat4, Vec3};
use std::cell::Cell;

use crate::math::EulerXyz;

/// Local transform of an object relative to its parent.
#[derive(Debug, Clone)]
pub struct Transform {
    translation: Vec3,
    rotation: EulerXyz,
    scale: Vec3,

    local_matrix: Cell<Mat4>,
    local_dirty: Cell<bool>,
}

impl Transform {
    pub fn new(translation: Vec3, rotation: EulerXyz, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
            local_matrix: Cell::new(Mat4::IDENTITY),
            local_dirty: Cell::new(true),
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, EulerXyz::IDENTITY, Vec3::ONE)
    }

    pub fn get_local_matrix(&self) -> Mat4 {
        if self.local_dirty.get() {
            let matrix = Mat4::from_scale_rotation_translation(
                self.scale,
                self.rotation.to_quat(),
                self.translation,
            );

            self.local_matrix.set(matrix);
            self.local_dirty.set(false);
        }

        self.local_matrix.get()
    }

    fn invalidate_local(&self) {
        self.local_dirty.set(true);
    }

    pub fn set_transform(&mut self, translation: Vec3, rotation: EulerXyz, scale: Vec3) {
        self.translation = translation;
        self.rotation = rotation;
        self.scale = scale;
        self.invalidate_local();
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn rotation(&self) -> EulerXyz {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_translation(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_matrix_tracks_setters() {
        let mut transform = Transform::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            transform.get_local_matrix().transform_point3(Vec3::ZERO),
            Vec3::new(1.0, 2.0, 3.0)
        );

        transform.set_transform(
            Vec3::new(1.0, 2.0, 3.0),
            EulerXyz::IDENTITY,
            Vec3::new(2.0, 2.0, 2.0),
        );
        assert_eq!(
            transform.get_local_matrix().transform_point3(Vec3::ONE),
            Vec3::new(3.0, 4.0, 5.0)
        );
    }
}
