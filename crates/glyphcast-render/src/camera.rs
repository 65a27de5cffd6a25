use glam::Vec3;
use glyphcast_core::config::{ShadingSettings, ViewSettings};
use glyphcast_core::math::direction_from_angles;
use glyphcast_world::World;

use crate::display::shade_cell;
use crate::frame::Frame;
use crate::raycast::{cast_ray_with, RayHit};

/// Orthonormal view basis. Z is world up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

/// First-person camera that turns output cells into world-space rays.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Elevation in radians, positive looks up.
    pub pitch: f32,
    /// Heading in radians, 0 looks along +X.
    pub yaw: f32,
    pub view: ViewSettings,
    pub shading: ShadingSettings,
}

impl Camera {
    pub fn new(position: Vec3, pitch: f32, yaw: f32) -> Self {
        Self {
            position,
            pitch,
            yaw,
            view: ViewSettings::default(),
            shading: ShadingSettings::default(),
        }
    }

    pub fn with_settings(mut self, view: ViewSettings, shading: ShadingSettings) -> Self {
        self.view = view;
        self.shading = shading;
        self
    }

    /// Point the camera at `target`. Leaves the angles alone if the target
    /// is the camera position.
    pub fn look_at(&mut self, target: Vec3) {
        let Some(dir) = (target - self.position).try_normalize() else {
            return;
        };
        self.pitch = dir.z.clamp(-1.0, 1.0).asin();
        self.yaw = dir.y.atan2(dir.x);
    }

    pub fn forward(&self) -> Vec3 {
        direction_from_angles(self.pitch, self.yaw)
    }

    pub fn basis(&self) -> CameraBasis {
        let forward = self.forward();
        // looking straight up or down: any horizontal right will do
        let right = forward.cross(Vec3::Z).try_normalize().unwrap_or(Vec3::X);
        let up = right.cross(forward).normalize();
        CameraBasis { forward, right, up }
    }

    /// Normalized ray direction through output cell (x, y) of a
    /// `width` x `height` grid. Row 0 is the top.
    pub fn ray_direction(&self, x: usize, y: usize, width: usize, height: usize) -> Vec3 {
        let basis = self.basis();
        self.ray_direction_in(&basis, x, y, width, height)
    }

    fn ray_direction_in(
        &self,
        basis: &CameraBasis,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Vec3 {
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        let aspect = w / h;
        let screen_x = (2.0 * x as f32 / w - 1.0) * aspect * self.view.fov_horizontal;
        let screen_y = (1.0 - 2.0 * y as f32 / h) * self.view.fov_vertical;
        (basis.forward + basis.right * screen_x + basis.up * screen_y).normalize()
    }

    /// Cast the ray for one output cell against the far plane.
    pub fn cast(&self, world: &World, x: usize, y: usize, width: usize, height: usize) -> RayHit {
        let dir = self.ray_direction(x, y, width, height);
        cast_ray_with(world, self.position, dir, self.view.far_plane, &self.shading)
    }

    /// Render a fresh `width` x `height` frame.
    pub fn render(&self, world: &World, width: usize, height: usize) -> Frame {
        let mut frame = Frame::new(width, height);
        self.render_into(world, &mut frame);
        frame
    }

    /// Render into an existing frame, one ray per cell. Returns the number
    /// of cells that hit a block.
    pub fn render_into(&self, world: &World, frame: &mut Frame) -> usize {
        let basis = self.basis();
        let (width, height) = (frame.width(), frame.height());
        let mut hits = 0;

        for y in 0..height {
            for x in 0..width {
                let dir = self.ray_direction_in(&basis, x, y, width, height);
                let hit = cast_ray_with(world, self.position, dir, self.view.far_plane, &self.shading);
                hits += usize::from(hit.hit);
                let cell = shade_cell(
                    world,
                    &hit,
                    y,
                    height,
                    self.view.edge_threshold,
                    self.shading.shading_enabled,
                );
                frame.set(x, y, cell);
            }
        }

        hits
    }
}
