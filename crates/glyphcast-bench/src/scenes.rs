use glam::{IVec3, Vec3};
use glyphcast_core::config::EngineConfig;
use glyphcast_core::error::WorldError;
use glyphcast_world::structures::{StructureGenerator, HOUSE_LENGTH, HOUSE_WIDTH};
use glyphcast_world::{TerrainGenerator, World};

/// Seed used when neither the command line nor the config names one.
pub const DEFAULT_SEED: u32 = 42;

/// Configuration for a single benchmark scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub name: &'static str,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
}

/// A generated world and where its house went, if anywhere.
pub struct BenchWorld {
    pub world: World,
    pub house: Option<IVec3>,
}

/// Build and populate a world from the config's world section.
pub fn build_world(config: &EngineConfig, seed: u32) -> Result<BenchWorld, WorldError> {
    let settings = &config.world;
    let mut world = World::create(settings.width, settings.height, settings.depth)?;
    TerrainGenerator::new(seed)
        .with_ground_height(settings.ground_height)
        .generate(&mut world);
    let house = StructureGenerator::new(seed).generate(&mut world);
    Ok(BenchWorld { world, house })
}

/// Standard camera views over a generated world: spawn point, a corner
/// overview, a level view across the terrain, and the house if placed.
pub fn standard_scenes(bench: &BenchWorld, eye_height: f32) -> Vec<SceneConfig> {
    let world = &bench.world;
    let w = world.width() as f32;
    let h = world.height() as f32;
    let d = world.depth() as f32;
    let spawn = world
        .spawn_point(eye_height)
        .unwrap_or(Vec3::new(w / 2.0, h / 2.0, d - 0.5));

    let mut scenes = vec![
        SceneConfig {
            name: "spawn",
            camera_position: spawn,
            camera_target: spawn + Vec3::new(w / 4.0, 0.0, -eye_height),
        },
        SceneConfig {
            name: "overview",
            camera_position: Vec3::new(1.5, 1.5, d - 0.5),
            camera_target: Vec3::new(w / 2.0, h / 2.0, 0.0),
        },
        SceneConfig {
            name: "horizon",
            camera_position: Vec3::new(0.5, h / 2.0, d * 0.6),
            camera_target: Vec3::new(w, h / 2.0, d * 0.6),
        },
    ];

    if let Some(origin) = bench.house {
        let house_centre =
            origin.as_vec3() + Vec3::new(HOUSE_WIDTH as f32 / 2.0, HOUSE_LENGTH as f32 / 2.0, 2.0);
        scenes.push(SceneConfig {
            name: "house",
            camera_position: house_centre + Vec3::new(0.0, -8.0, 1.0),
            camera_target: house_centre,
        });
    }

    log::debug!("Built {} scenes", scenes.len());
    scenes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> EngineConfig {
        let mut config = EngineConfig::default();
        config.world.width = 32;
        config.world.height = 32;
        config.world.depth = 12;
        config
    }

    #[test]
    fn test_build_world_is_deterministic() {
        let config = small_config();
        let a = build_world(&config, 9).expect("world");
        let b = build_world(&config, 9).expect("world");
        assert_eq!(a.world, b.world);
        assert_eq!(a.house, b.house);
        assert_eq!(a.world.dimensions(), IVec3::new(32, 32, 12));
    }

    #[test]
    fn test_build_world_rejects_bad_size() {
        let mut config = small_config();
        config.world.depth = 0;
        assert!(build_world(&config, 1).is_err());
    }

    #[test]
    fn test_standard_scenes_are_distinct() {
        let bench = build_world(&small_config(), 3).expect("world");
        let scenes = standard_scenes(&bench, 1.6);
        assert!(scenes.len() >= 3);
        for scene in &scenes {
            assert_ne!(scene.camera_position, scene.camera_target, "{}", scene.name);
        }
        let mut names: Vec<_> = scenes.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), scenes.len());
    }
}
