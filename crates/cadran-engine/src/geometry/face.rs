use crate::coords::Vec2;

/// Face placement derived from the surface size.
///
/// Recomputed on every resize and read-only while a frame is emitted. The
/// face is the largest circle inscribed in the surface, centered in it.
///
/// Invariant: `radius >= 0`. A zero radius means the surface has not been
/// sized yet; frames drawn against it degenerate to zero extent but are
/// still well-formed.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FaceGeometry {
    pub radius: f32,
    pub center: Vec2,
}

impl FaceGeometry {
    /// Geometry for a surface that has not reported a size yet.
    #[inline]
    pub const fn empty() -> Self {
        Self { radius: 0.0, center: Vec2::zero() }
    }

    /// Derives radius and center from the surface dimensions.
    #[inline]
    pub fn from_surface(size: Vec2) -> Self {
        Self {
            radius: (size.min_component() / 2.0).max(0.0),
            center: size / 2.0,
        }
    }

    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.radius <= 0.0
    }
}
