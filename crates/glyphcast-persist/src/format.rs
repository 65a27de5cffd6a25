/// Size of the dimension header in bytes.
pub const HEADER_SIZE: usize = std::mem::size_of::<SnapshotHeader>();

/// Size of the lighting trailer (time of day + sky brightness) in bytes.
pub const TRAILER_SIZE: usize = 8;

/// Snapshot header: world dimensions, little-endian.
///
/// Layout: header (12B) + block ids (w*h*d, z-major) + trailer (8B).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SnapshotHeader {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
}

impl SnapshotHeader {
    /// Header with each field converted to little-endian for writing.
    pub fn to_le(self) -> Self {
        Self {
            width: self.width.to_le(),
            height: self.height.to_le(),
            depth: self.depth.to_le(),
        }
    }

    /// Header with each field converted from little-endian after reading.
    pub fn to_native(self) -> Self {
        Self {
            width: i32::from_le(self.width),
            height: i32::from_le(self.height),
            depth: i32::from_le(self.depth),
        }
    }

    /// Number of block cells, or None if any dimension is non-positive or
    /// the product overflows.
    pub fn cell_count(&self) -> Option<usize> {
        if self.width < 1 || self.height < 1 || self.depth < 1 {
            return None;
        }
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.depth as usize)
    }
}

/// Total snapshot size for a header, or None if it does not describe a
/// valid world.
pub fn snapshot_size(header: &SnapshotHeader) -> Option<usize> {
    header
        .cell_count()?
        .checked_add(HEADER_SIZE + TRAILER_SIZE)
}
