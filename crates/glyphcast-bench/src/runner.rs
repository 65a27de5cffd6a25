use std::time::Instant;

use glyphcast_core::config::EngineConfig;
use glyphcast_render::{Camera, Frame};
use glyphcast_world::World;

use crate::scenes::SceneConfig;

/// Timing data for a single benchmark run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub width: usize,
    pub height: usize,
    pub frame_count: u32,
    /// Cells that hit a block in the last frame.
    pub hit_cells: usize,
    pub timings: TimingSeries,
}

/// Renders each scene repeatedly into a reused frame and times the passes.
pub struct BenchmarkRunner {
    config: EngineConfig,
    width: usize,
    height: usize,
    frame_count: u32,
}

impl BenchmarkRunner {
    pub fn new(config: EngineConfig, width: usize, height: usize, frame_count: u32) -> Self {
        Self {
            config,
            width,
            height,
            frame_count,
        }
    }

    pub fn camera_for(&self, scene: &SceneConfig) -> Camera {
        let mut camera = Camera::new(scene.camera_position, 0.0, 0.0)
            .with_settings(self.config.view, self.config.shading);
        camera.look_at(scene.camera_target);
        camera
    }

    /// Render one frame of a scene, for printing.
    pub fn render_once(&self, world: &World, scene: &SceneConfig) -> Frame {
        self.camera_for(scene).render(world, self.width, self.height)
    }

    /// Run a single benchmark scene and return timing results.
    pub fn run_scene(&self, world: &World, scene: &SceneConfig) -> BenchmarkResult {
        log::info!(
            "Running scene '{}' ({}x{}, {} frames)...",
            scene.name,
            self.width,
            self.height,
            self.frame_count
        );

        let camera = self.camera_for(scene);
        let mut frame = Frame::new(self.width, self.height);
        let mut frame_times = Vec::with_capacity(self.frame_count as usize);
        let mut hit_cells = 0;

        for _ in 0..self.frame_count {
            let frame_start = Instant::now();
            hit_cells = camera.render_into(world, &mut frame);
            frame_times.push(frame_start.elapsed().as_secs_f64() * 1000.0);
        }

        let timings = compute_timings(&frame_times);
        log::info!(
            "  Done: mean={:.3}ms, p95={:.3}ms, hits={}/{}",
            timings.mean_ms,
            timings.p95_ms,
            hit_cells,
            self.width * self.height
        );

        BenchmarkResult {
            scene_name: scene.name.to_string(),
            width: self.width,
            height: self.height,
            frame_count: self.frame_count,
            hit_cells,
            timings,
        }
    }
}

/// Compute timing statistics from a list of frame times in milliseconds.
pub fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let p95_idx = ((n as f64) * 0.95).ceil() as usize;
    let p99_idx = ((n as f64) * 0.99).ceil() as usize;

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        p95_ms: sorted[p95_idx.min(n - 1)],
        p99_ms: sorted[p99_idx.min(n - 1)],
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}
