use serde::Deserialize;

/// Selects which color palette to use for the density field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMap {
    /// Ink: black -> deep teal -> green -> pale mint -> white.
    #[default]
    Ink,
    /// Plain grayscale ramp.
    Mono,
}

/// Ink color stops: empty water is black, dense dye glows pale green.
pub(crate) const INK_STOPS: [(f32, f32, f32); 5] = [
    (0.0, 0.0, 0.0),       // empty          (0.00)
    (6.0, 45.0, 40.0),     // deep teal      (0.25)
    (19.0, 150.0, 56.0),   // dye green      (0.50)
    (160.0, 230.0, 170.0), // pale mint      (0.75)
    (255.0, 255.0, 255.0), // saturated      (1.00)
];

pub(crate) const MONO_STOPS: [(f32, f32, f32); 5] = [
    (0.0, 0.0, 0.0),
    (63.75, 63.75, 63.75),
    (127.5, 127.5, 127.5),
    (191.25, 191.25, 191.25),
    (255.0, 255.0, 255.0),
];

/// Convert a [0.0, 1.0] value to a packed `0RGB` pixel using the given color map.
pub fn map_to_argb(t: f32, colormap: ColorMap) -> u32 {
    let stops = match colormap {
        ColorMap::Ink => &INK_STOPS,
        ColorMap::Mono => &MONO_STOPS,
    };

    // NaN maps to the empty color rather than poisoning the segment index.
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let seg = t * 4.0;
    let i = (seg as usize).min(3);
    let s = seg - i as f32;

    let (r0, g0, b0) = stops[i];
    let (r1, g1, b1) = stops[i + 1];

    let r = (r0 + s * (r1 - r0)) as u32;
    let g = (g0 + s * (g1 - g0)) as u32;
    let b = (b0 + s * (b1 - b0)) as u32;
    r << 16 | g << 8 | b
}
