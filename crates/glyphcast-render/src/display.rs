//! Mapping from ray hits to glyphs and terminal colors.

use glyphcast_core::constants::{EDGE_GLYPH, SHADE_BRIGHT_ABOVE, SHADE_DARK_BELOW, SKY_GLYPH};
use glyphcast_core::types::Color;
use glyphcast_world::World;

use crate::frame::FrameCell;
use crate::raycast::RayHit;

/// Whether a hit lands within `threshold` of its face's border along either
/// in-plane axis.
pub fn is_block_edge(hit: &RayHit, threshold: f32) -> bool {
    if !hit.hit {
        return false;
    }
    let local = (hit.position - hit.cell.as_vec3()).to_array();
    let near_border = |v: f32| v < threshold || v > 1.0 - threshold;
    let (a, b) = match hit.face.axis() {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    };
    near_border(local[a]) || near_border(local[b])
}

/// Glyph for a hit: the edge glyph near borders, else the block's glyph.
pub fn hit_glyph(world: &World, hit: &RayHit, edge_threshold: f32) -> char {
    if !hit.hit {
        return SKY_GLYPH;
    }
    if is_block_edge(hit, edge_threshold) {
        return EDGE_GLYPH;
    }
    world.get_block_type(hit.block).glyph
}

/// Foreground color for a hit, with the bright bit driven by brightness
/// when `shading` is on.
pub fn hit_color(world: &World, hit: &RayHit, shading: bool) -> Color {
    if !hit.hit {
        return Color::BLACK;
    }
    let color = world.get_block_type(hit.block).fg;
    if !shading {
        color
    } else if hit.brightness < SHADE_DARK_BELOW {
        color.dim()
    } else if hit.brightness > SHADE_BRIGHT_ABOVE {
        color.bright()
    } else {
        color
    }
}

/// Background for a sky cell on row `y` of `height`: the upper half takes
/// the sky color, the lower half a horizon tint.
pub fn sky_color(sky_brightness: f32, y: usize, height: usize) -> Color {
    let daylight = sky_brightness > 0.5;
    let upper = (y as f32) < height as f32 * 0.5;
    match (daylight, upper) {
        (true, true) => Color::CYAN,
        (true, false) => Color::BLUE,
        (false, _) => Color::BLACK,
    }
}

/// Full frame cell for a hit, or sky on a miss.
pub fn shade_cell(
    world: &World,
    hit: &RayHit,
    y: usize,
    height: usize,
    edge_threshold: f32,
    shading: bool,
) -> FrameCell {
    if hit.hit {
        FrameCell {
            glyph: hit_glyph(world, hit, edge_threshold),
            fg: hit_color(world, hit, shading),
            bg: Color::BLACK,
            depth: hit.distance,
        }
    } else {
        FrameCell {
            glyph: SKY_GLYPH,
            fg: Color::BLACK,
            bg: sky_color(world.sky_brightness(), y, height),
            depth: f32::INFINITY,
        }
    }
}
