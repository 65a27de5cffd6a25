use std::path::Path;

use glyphcast_core::constants::{MAX_BRIGHTNESS, MIN_BRIGHTNESS};
use glyphcast_world::World;

use crate::error::PersistError;
use crate::format::*;

/// Parse a snapshot and rebuild the world it describes.
///
/// The whole buffer is validated before the grid is allocated, so a rejected
/// file never leaves a partial world behind. The lighting trailer must hold a
/// wrapped time of day in `[0, 1)` and a sky brightness in `[0.2, 1]`.
///
/// Block ids are copied as stored. Ids past the block-type table are legal
/// grid contents (`set_block` accepts them) and read back as air.
pub fn load(bytes: &[u8]) -> Result<World, PersistError> {
    let minimum = HEADER_SIZE + 1 + TRAILER_SIZE;
    if bytes.len() < HEADER_SIZE {
        return Err(PersistError::FileTooSmall(bytes.len(), minimum));
    }

    let header: SnapshotHeader = bytemuck::pod_read_unaligned(&bytes[..HEADER_SIZE]);
    let header = header.to_native();
    let invalid = || PersistError::InvalidDimensions {
        width: header.width,
        height: header.height,
        depth: header.depth,
    };
    let cells = header.cell_count().ok_or_else(invalid)?;
    let expected = snapshot_size(&header).ok_or_else(invalid)?;

    if bytes.len() < expected {
        return Err(PersistError::TruncatedFile {
            expected,
            actual: bytes.len(),
        });
    }
    if bytes.len() > expected {
        return Err(PersistError::TrailingData(bytes.len() - expected));
    }

    let body_end = HEADER_SIZE + cells;
    let trailer = &bytes[body_end..];
    let time_of_day = f32::from_le_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
    let sky_brightness = f32::from_le_bytes([trailer[4], trailer[5], trailer[6], trailer[7]]);
    if !time_of_day.is_finite() || !sky_brightness.is_finite() {
        return Err(PersistError::NonFiniteLighting {
            time_of_day,
            sky_brightness,
        });
    }
    if !(0.0..1.0).contains(&time_of_day)
        || !(MIN_BRIGHTNESS..=MAX_BRIGHTNESS).contains(&sky_brightness)
    {
        return Err(PersistError::LightingOutOfRange {
            time_of_day,
            sky_brightness,
        });
    }

    let mut blocks = Vec::new();
    blocks
        .try_reserve_exact(cells)
        .map_err(|_| glyphcast_core::error::WorldError::AllocationFailed { cells })?;
    blocks.extend_from_slice(&bytes[HEADER_SIZE..body_end]);

    let world = World::from_raw_parts(
        header.width,
        header.height,
        header.depth,
        blocks,
        time_of_day,
        sky_brightness,
    )?;
    Ok(world)
}

/// Read and parse a snapshot file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<World, PersistError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    match load(&bytes) {
        Ok(world) => {
            log::info!(
                "Loaded {}x{}x{} world from {}",
                world.width(),
                world.height(),
                world.depth(),
                path.display()
            );
            Ok(world)
        }
        Err(e) => {
            log::warn!("Rejected snapshot {}: {e}", path.display());
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::{self, save_to_path};
    use glam::IVec3;
    use glyphcast_core::types::BlockId;

    fn sample_world() -> World {
        let mut world = World::create(10, 7, 6).expect("world");
        world.generate_terrain(42);
        world.set_block(IVec3::new(9, 6, 5), BlockId::BRICK);
        world.set_time(0.8);
        world.update_lighting();
        world
    }

    #[test]
    fn test_save_load_roundtrip() {
        let world = sample_world();
        let loaded = load(&save::save(&world)).expect("load should succeed");

        assert_eq!(loaded.dimensions(), world.dimensions());
        assert_eq!(loaded.blocks(), world.blocks());
        for z in 0..6 {
            for y in 0..7 {
                for x in 0..10 {
                    let pos = IVec3::new(x, y, z);
                    assert_eq!(loaded.get_block(pos), world.get_block(pos));
                }
            }
        }
        // exact: nothing lossy in between
        assert_eq!(loaded.time_of_day(), world.time_of_day());
        assert_eq!(loaded.sky_brightness(), world.sky_brightness());
        assert_eq!(loaded, world);
    }

    #[test]
    fn test_file_too_small_rejected() {
        let result = load(&[0u8; 10]);
        assert!(matches!(result, Err(PersistError::FileTooSmall(10, 21))));
    }

    #[test]
    fn test_bad_dimensions_rejected() {
        let mut data = save::save(&sample_world());
        data[4..8].copy_from_slice(&0i32.to_le_bytes());
        assert!(matches!(
            load(&data),
            Err(PersistError::InvalidDimensions { height: 0, .. })
        ));

        data[4..8].copy_from_slice(&(-5i32).to_le_bytes());
        assert!(matches!(
            load(&data),
            Err(PersistError::InvalidDimensions { height: -5, .. })
        ));
    }

    #[test]
    fn test_huge_dimensions_rejected_before_allocating() {
        let mut data = vec![0u8; HEADER_SIZE + TRAILER_SIZE + 1];
        for field in 0..3 {
            let start = field * 4;
            data[start..start + 4].copy_from_slice(&i32::MAX.to_le_bytes());
        }
        // cell count overflows usize
        assert!(matches!(
            load(&data),
            Err(PersistError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_truncated_file_rejected() {
        let data = save::save(&sample_world());
        let full = data.len();

        // missing trailer
        let result = load(&data[..full - 4]);
        assert!(matches!(
            result,
            Err(PersistError::TruncatedFile { expected, actual }) if expected == full && actual == full - 4
        ));

        // missing body
        let result = load(&data[..HEADER_SIZE + 3]);
        assert!(matches!(result, Err(PersistError::TruncatedFile { .. })));
    }

    #[test]
    fn test_trailing_data_rejected() {
        let mut data = save::save(&sample_world());
        data.extend_from_slice(&[1, 2, 3]);
        assert!(matches!(load(&data), Err(PersistError::TrailingData(3))));
    }

    #[test]
    fn test_non_finite_lighting_rejected() {
        let mut data = save::save(&sample_world());
        let time_at = data.len() - TRAILER_SIZE;
        data[time_at..time_at + 4].copy_from_slice(&f32::NAN.to_le_bytes());
        assert!(matches!(
            load(&data),
            Err(PersistError::NonFiniteLighting { .. })
        ));
    }

    #[test]
    fn test_out_of_range_lighting_rejected() {
        let data = save::save(&sample_world());
        let time_at = data.len() - TRAILER_SIZE;

        let mut late = data.clone();
        late[time_at..time_at + 4].copy_from_slice(&7.5f32.to_le_bytes());
        assert!(matches!(
            load(&late),
            Err(PersistError::LightingOutOfRange { time_of_day, .. }) if time_of_day == 7.5
        ));

        let mut dark = data.clone();
        dark[time_at + 4..].copy_from_slice(&(-3.0f32).to_le_bytes());
        assert!(matches!(
            load(&dark),
            Err(PersistError::LightingOutOfRange { sky_brightness, .. }) if sky_brightness == -3.0
        ));

        let mut full_day = data;
        full_day[time_at..time_at + 4].copy_from_slice(&1.0f32.to_le_bytes());
        assert!(matches!(
            load(&full_day),
            Err(PersistError::LightingOutOfRange { .. })
        ));
    }

    #[test]
    fn test_lighting_after_non_finite_set_time_survives() {
        let mut world = sample_world();
        world.set_time(f32::INFINITY);
        let loaded = load(&save::save(&world)).expect("load should succeed");
        assert_eq!(loaded, world);
    }

    #[test]
    fn test_unknown_block_ids_kept() {
        let mut world = sample_world();
        world.set_block(IVec3::new(0, 0, 5), BlockId(200));
        let loaded = load(&save::save(&world)).expect("load should succeed");

        assert_eq!(loaded.get_block(IVec3::new(0, 0, 5)), BlockId(200));
        assert!(!loaded.is_solid(IVec3::new(0, 0, 5)));
        assert_eq!(loaded.get_block_type(BlockId(200)).name, "Air");
    }

    #[test]
    fn test_file_roundtrip() {
        let world = sample_world();
        let path = std::env::temp_dir().join(format!(
            "glyphcast-snapshot-{}.bin",
            std::process::id()
        ));

        save_to_path(&world, &path).expect("save should succeed");
        let loaded = load_from_path(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.expect("load should succeed"), world);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("glyphcast-snapshot-does-not-exist.bin");
        assert!(matches!(load_from_path(&path), Err(PersistError::Io(_))));
    }
}
