//! Interpolation helpers:
//! - lerp_f32 / lerp_vec3 (component-wise)
//! - lerp_rgb (RGB channels only; alpha carried from the start color)
//! - ease_out_sine (fast start, slow finish)
//! - punch (single decaying oscillation for the release overshoot)

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::value::{Color, Scale};

#[inline]
pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec3(a: Scale, b: Scale, t: f32) -> Scale {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

/// Interpolate the RGB channels only; alpha stays at the start color's alpha.
#[inline]
pub fn lerp_rgb(a: Color, b: Color, t: f32) -> Color {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
        a[3],
    ]
}

/// Ease-out sine: `sin(t * pi/2)` over clamped t.
#[inline]
pub fn ease_out_sine(t: f32) -> f32 {
    (clamp01(t) * FRAC_PI_2).sin()
}

/// Decaying single-cycle oscillation: `sin(t * 2pi) * (1 - t) * strength`.
/// Zero at t = 0 and t >= 1; amplitude decays linearly to zero.
#[inline]
pub fn punch(t: f32, strength: f32) -> f32 {
    let t = clamp01(t);
    (t * TAU).sin() * (1.0 - t) * strength
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    #[test]
    fn ease_out_sine_endpoints() {
        approx(ease_out_sine(0.0), 0.0, 1e-6);
        approx(ease_out_sine(1.0), 1.0, 1e-6);
        // clamped outside [0,1]
        approx(ease_out_sine(2.0), 1.0, 1e-6);
        approx(ease_out_sine(-1.0), 0.0, 1e-6);
    }

    #[test]
    fn punch_is_zero_at_both_ends() {
        approx(punch(0.0, 0.08), 0.0, 1e-6);
        approx(punch(1.0, 0.08), 0.0, 1e-5);
        // overshoots positive in the first quarter cycle
        assert!(punch(0.25, 0.08) > 0.0);
        // and undershoots in the third quarter
        assert!(punch(0.75, 0.08) < 0.0);
    }

    #[test]
    fn lerp_rgb_keeps_alpha() {
        let a = [0.0, 0.0, 0.0, 0.5];
        let b = [1.0, 1.0, 1.0, 1.0];
        let mid = lerp_rgb(a, b, 0.5);
        approx(mid[0], 0.5, 1e-6);
        approx(mid[3], 0.5, 1e-6);
    }
}
