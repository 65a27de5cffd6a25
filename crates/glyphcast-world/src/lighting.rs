//! Day/night sky curve and the vertical occlusion term.

use glyphcast_core::constants::{MAX_BRIGHTNESS, MIN_BRIGHTNESS, OCCLUSION_FACTOR};
use glyphcast_core::math::{clamp, smoothstep};

/// Phase of dawn in the day cycle (0 = midnight, 0.5 = noon).
pub const DAWN: f32 = 0.25;
pub const NOON: f32 = 0.5;
pub const DUSK: f32 = 0.75;

/// Brightness reached at dawn and dusk.
const TWILIGHT_BRIGHTNESS: f32 = 0.8;

/// Wrap a time value into `[0, 1)`.
pub fn wrap_time(t: f32) -> f32 {
    let wrapped = t.rem_euclid(1.0);
    // rem_euclid of tiny negatives rounds up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Sky brightness for a wrapped time of day. Four smoothstep segments:
/// night->dawn 0.2->0.8, dawn->noon 0.8->1.0, then mirrored to midnight.
pub fn sky_brightness_at(time: f32) -> f32 {
    let night_span = TWILIGHT_BRIGHTNESS - MIN_BRIGHTNESS;
    let day_span = MAX_BRIGHTNESS - TWILIGHT_BRIGHTNESS;

    if time < DAWN {
        smoothstep(0.0, DAWN, time) * night_span + MIN_BRIGHTNESS
    } else if time < NOON {
        smoothstep(DAWN, NOON, time) * day_span + TWILIGHT_BRIGHTNESS
    } else if time < DUSK {
        (1.0 - smoothstep(NOON, DUSK, time)) * day_span + TWILIGHT_BRIGHTNESS
    } else {
        (1.0 - smoothstep(DUSK, 1.0, time)) * night_span + MIN_BRIGHTNESS
    }
}

/// Apply `occluders` layers of vertical occlusion to `sky` and clamp.
pub fn occluded_brightness(sky: f32, occluders: u32) -> f32 {
    let mut brightness = sky;
    for _ in 0..occluders {
        brightness *= OCCLUSION_FACTOR;
        if brightness < MIN_BRIGHTNESS {
            break;
        }
    }
    clamp(brightness, MIN_BRIGHTNESS, MAX_BRIGHTNESS)
}
