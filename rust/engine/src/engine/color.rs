// rust/engine/src/engine/color.rs
#![forbid(unsafe_code)]

/// Linear RGB in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    /// Filler units: light grey (211, 211, 211).
    pub const FILLER: Rgb = Rgb::new(211.0 / 255.0, 211.0 / 255.0, 211.0 / 255.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Face color of unit `index` out of `blocks`: red fading into purple as the
    /// placement order goes up, `(1 - i/n, i/2n, i/n)`.
    pub fn unit_gradient(index: usize, blocks: usize) -> Self {
        if blocks == 0 {
            return Rgb::new(1.0, 0.0, 0.0);
        }
        let i = index as f32;
        let n = blocks as f32;
        Rgb::new(1.0 - i / n, i / (2.0 * n), i / n)
    }

    pub fn to_u8(self) -> (u8, u8, u8) {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}
