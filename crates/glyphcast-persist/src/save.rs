use std::path::Path;

use glyphcast_world::World;

use crate::error::PersistError;
use crate::format::*;

/// Serialize a world into the flat snapshot format.
///
/// Layout: header (12B) + block ids (z-major) + time of day (f32) + sky
/// brightness (f32), all little-endian.
pub fn save(world: &World) -> Vec<u8> {
    let header = SnapshotHeader {
        width: world.width(),
        height: world.height(),
        depth: world.depth(),
    };

    let blocks = world.blocks();
    let mut output = Vec::with_capacity(HEADER_SIZE + blocks.len() + TRAILER_SIZE);
    output.extend_from_slice(bytemuck::bytes_of(&header.to_le()));
    output.extend_from_slice(blocks);
    output.extend_from_slice(&world.time_of_day().to_le_bytes());
    output.extend_from_slice(&world.sky_brightness().to_le_bytes());
    output
}

/// Write a snapshot of `world` to `path`, replacing any existing file.
pub fn save_to_path(world: &World, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let path = path.as_ref();
    let bytes = save(world);
    std::fs::write(path, &bytes)?;
    log::info!("Saved snapshot to {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;
    use glyphcast_core::types::BlockId;

    #[test]
    fn test_save_layout() {
        let mut world = World::create(3, 2, 2).expect("world");
        world.set_block(IVec3::new(1, 0, 0), BlockId::STONE);
        world.set_block(IVec3::new(2, 1, 1), BlockId::GRASS);
        world.set_time(0.25);
        world.update_lighting();

        let data = save(&world);
        assert_eq!(data.len(), HEADER_SIZE + 12 + TRAILER_SIZE);

        let header: SnapshotHeader = bytemuck::pod_read_unaligned(&data[..HEADER_SIZE]);
        assert_eq!(
            header.to_native(),
            SnapshotHeader {
                width: 3,
                height: 2,
                depth: 2
            }
        );

        let body = &data[HEADER_SIZE..HEADER_SIZE + 12];
        // (z * h + y) * w + x
        assert_eq!(body[1], BlockId::STONE.0);
        assert_eq!(body[(2 + 1) * 3 + 2], BlockId::GRASS.0);
        assert_eq!(body.iter().filter(|&&b| b != 0).count(), 2);

        let time = f32::from_le_bytes(data[24..28].try_into().expect("4-byte slice"));
        let sky = f32::from_le_bytes(data[28..32].try_into().expect("4-byte slice"));
        assert_eq!(time, 0.25);
        assert_eq!(sky, world.sky_brightness());
    }
}
