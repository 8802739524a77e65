//! Color and scale value types shared across the crate.
//! All numeric types use f32.

/// RGBA color (linear by convention), components in [0, 1].
pub type Color = [f32; 4];

/// 3-component scale vector on a transform-like object.
pub type Scale = [f32; 3];

/// Multiply the RGB channels by `m`, leaving alpha untouched.
#[inline]
pub fn scale_rgb(c: Color, m: f32) -> Color {
    [c[0] * m, c[1] * m, c[2] * m, c[3]]
}

/// Component-wise uniform scale of a 3-vector.
#[inline]
pub fn mul3(v: Scale, f: f32) -> Scale {
    [v[0] * f, v[1] * f, v[2] * f]
}
