use glam::{EulerRot, Quat, Vec3};

/// Euler rotation in radians, XYZ order: X is applied first, then Y, then Z
/// (all about the parent axes), so the composed rotation is `Rz * Ry * Rx`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerXyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl EulerXyz {
    pub const IDENTITY: EulerXyz = EulerXyz {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::ZYX, self.z, self.y, self.x)
    }

    pub fn from_quat(rotation: Quat) -> Self {
        let (z, y, x) = rotation.normalize().to_euler(EulerRot::ZYX);
        Self { x, y, z }
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_is_identity_quat() {
        assert!(EulerXyz::IDENTITY.to_quat().abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn x_is_applied_before_z() {
        // Rotating +Y by 90deg about X gives +Z; Z rotation then leaves it alone.
        let rotation = EulerXyz::new(FRAC_PI_2, 0.0, FRAC_PI_2).to_quat();
        let v = rotation * Vec3::Y;
        assert!(v.abs_diff_eq(Vec3::Z, 1e-6), "{v}");
    }

    #[test]
    fn quat_round_trip() {
        let euler = EulerXyz::new(0.3, -0.7, 1.2);
        let back = EulerXyz::from_quat(euler.to_quat());
        assert!(back.to_vec3().abs_diff_eq(euler.to_vec3(), 1e-5), "{back:?}");
    }
}
