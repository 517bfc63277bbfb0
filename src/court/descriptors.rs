use glam::{EulerRot, Quat, Vec2, Vec3, Vec4};
use serde::Serialize;

/// Which face of a planar mesh the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Front,
    Back,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CourtSide {
    Left,
    Right,
}

impl CourtSide {
    /// Sign of the `x` coordinate on this side of the court.
    #[inline]
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            CourtSide::Left => -1.0,
            CourtSide::Right => 1.0,
        }
    }
}

/// Named palette used by the court model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CourtColor {
    White,
    Red,
    Black,
    Orange,
    /// Light fill used inside the service boxes.
    ServiceBoxTint,
}

impl CourtColor {
    #[must_use]
    pub fn to_rgba(self) -> Vec4 {
        match self {
            CourtColor::White => Vec4::ONE,
            CourtColor::Red => Vec4::new(1.0, 0.0, 0.0, 1.0),
            CourtColor::Black => Vec4::new(0.0, 0.0, 0.0, 1.0),
            CourtColor::Orange => Vec4::new(1.0, 0.647, 0.0, 1.0),
            CourtColor::ServiceBoxTint => Vec4::new(1.0, 0.92, 0.92, 1.0),
        }
    }
}

/// The court feature a surface or label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CourtFeature {
    Floor,
    SideWall(CourtSide),
    /// Band above the side wall marking the out-of-court area.
    SideWallOutBand(CourtSide),
    SideWallDiagonal(CourtSide),
    FrontWall,
    FrontWallOutBand,
    BackWall,
    ShortLine,
    HalfCourtLine,
    ServiceBox(CourtSide),
    ServiceBoxOutline(CourtSide),
    Tin,
    ServiceLine,
    OutLine,
}

/// One planar mesh: a unit plane in its local XY, scaled by `extent`,
/// rotated by the XYZ Euler angles in `rotation`, and placed at `position`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceDescriptor {
    pub feature: CourtFeature,
    pub position: Vec3,
    /// Euler angles (radians, XYZ order).
    pub rotation: Vec3,
    pub extent: Vec2,
    pub color: CourtColor,
    pub side: Side,
}

impl SurfaceDescriptor {
    #[must_use]
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Front-face normal in world space.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.quat() * Vec3::Z
    }
}

/// A boundary line drawn from two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeLineDescriptor {
    pub start: Vec3,
    pub end: Vec3,
    pub color: CourtColor,
}

impl EdgeLineDescriptor {
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelDescriptor {
    pub feature: CourtFeature,
    pub text: &'static str,
    pub position: Vec3,
    /// Euler angles (radians, XYZ order).
    pub rotation: Vec3,
    pub font_size: f32,
}

/// Everything the renderer needs to draw the static court.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CourtLayout {
    pub surfaces: Vec<SurfaceDescriptor>,
    pub edges: Vec<EdgeLineDescriptor>,
    pub labels: Vec<LabelDescriptor>,
}

impl CourtLayout {
    /// First surface representing `feature`.
    #[must_use]
    pub fn surface(&self, feature: CourtFeature) -> Option<&SurfaceDescriptor> {
        self.surfaces.iter().find(|s| s.feature == feature)
    }

    #[must_use]
    pub fn label(&self, feature: CourtFeature) -> Option<&LabelDescriptor> {
        self.labels.iter().find(|l| l.feature == feature)
    }
}
