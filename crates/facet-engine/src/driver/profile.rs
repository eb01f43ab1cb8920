use glam::Vec3;

use crate::geometry::Solid;
use crate::paint::Color;

/// Per-solid presentation: camera placement, tumble ratio and background.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MotionProfile {
    /// Initial eye position; the camera always looks at the origin.
    pub eye: Vec3,
    /// X-axis rotation as a fraction of the Y-axis angle.
    pub x_ratio: f32,
    /// Clear color behind the solid.
    pub clear: Color,
}

impl MotionProfile {
    pub fn for_solid(solid: Solid) -> Self {
        match solid {
            Solid::Tetrahedron => Self {
                eye: Vec3::new(0.0, 0.5, -4.0),
                x_ratio: 0.5,
                clear: Color::rgb(0.1, 0.15, 0.1),
            },
            Solid::Hexahedron | Solid::Octahedron => Self {
                eye: Vec3::new(0.0, 0.5, -4.0),
                x_ratio: 0.5,
                clear: Color::rgb(0.1, 0.1, 0.15),
            },
            Solid::Dodecahedron => Self {
                eye: Vec3::new(0.0, 0.5, -4.5),
                x_ratio: 0.6,
                clear: Color::rgb(0.15, 0.1, 0.1),
            },
            Solid::Icosahedron => Self {
                eye: Vec3::new(0.0, 0.5, -4.5),
                x_ratio: 0.6,
                clear: Color::rgb(0.1, 0.1, 0.1),
            },
        }
    }
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self::for_solid(Solid::default())
    }
}
