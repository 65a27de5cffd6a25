use glam::{IVec3, Vec3};

/// One of the six axis-aligned faces of a voxel, indexed 0..6.
///
/// A ray entering a voxel is reported with the face it came through,
/// so the normal points back toward the ray origin. Z is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Face {
    #[default]
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    /// Top face.
    PosZ = 4,
    /// Bottom face.
    NegZ = 5,
}

/// All faces in index order.
pub const ALL_FACES: [Face; 6] = [
    Face::PosX,
    Face::NegX,
    Face::PosY,
    Face::NegY,
    Face::PosZ,
    Face::NegZ,
];

/// Directional light multiplier per face, approximating a single overhead
/// light: top brightest, bottom darkest.
pub const FACE_BRIGHTNESS: [f32; 6] = [
    0.8, // +X
    0.6, // -X
    0.9, // +Y
    0.7, // -Y
    1.0, // +Z (top)
    0.2, // -Z (bottom)
];

impl Face {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Face for a raw index. Returns None outside 0..6.
    pub fn from_index(index: usize) -> Option<Face> {
        ALL_FACES.get(index).copied()
    }

    /// Face a ray enters through after stepping along `axis` (0=x, 1=y, 2=z)
    /// in direction `step` (+1 or -1). Stepping +X enters through -X.
    pub fn entered(axis: usize, step: i32) -> Face {
        match (axis, step > 0) {
            (0, true) => Face::NegX,
            (0, false) => Face::PosX,
            (1, true) => Face::NegY,
            (1, false) => Face::PosY,
            (_, true) => Face::NegZ,
            (_, false) => Face::PosZ,
        }
    }

    /// Integer offset from a voxel to its neighbor across this face.
    pub fn offset(self) -> IVec3 {
        match self {
            Face::PosX => IVec3::new(1, 0, 0),
            Face::NegX => IVec3::new(-1, 0, 0),
            Face::PosY => IVec3::new(0, 1, 0),
            Face::NegY => IVec3::new(0, -1, 0),
            Face::PosZ => IVec3::new(0, 0, 1),
            Face::NegZ => IVec3::new(0, 0, -1),
        }
    }

    /// Unit normal of this face.
    pub fn normal(self) -> Vec3 {
        self.offset().as_vec3()
    }

    /// Axis this face is perpendicular to (0=x, 1=y, 2=z).
    pub fn axis(self) -> usize {
        self.index() / 2
    }

    pub fn brightness(self) -> f32 {
        FACE_BRIGHTNESS[self.index()]
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::PosX => Face::NegX,
            Face::NegX => Face::PosX,
            Face::PosY => Face::NegY,
            Face::NegY => Face::PosY,
            Face::PosZ => Face::NegZ,
            Face::NegZ => Face::PosZ,
        }
    }
}
