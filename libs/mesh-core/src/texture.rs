//! # Texture Binding
//!
//! Raster image bound to a mesh through UV coordinates, with bilinear
//! sampling for vertex colorization.

use std::path::Path;

use glam::DVec2;
use image::RgbaImage;

use crate::error::MeshError;

/// An RGBA raster bound to a mesh via per-vertex UV coordinates.
///
/// Sampling follows OBJ conventions: the UV origin is the bottom-left corner
/// of the image, and coordinates outside [0, 1] repeat.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use image::RgbaImage;
/// use mesh_core::Texture;
///
/// let image = RgbaImage::from_pixel(4, 4, image::Rgba([255, 0, 0, 255]));
/// let texture = Texture::new(image);
/// let [r, g, b, a] = texture.sample(DVec2::new(0.5, 0.5));
/// assert_eq!((r, g, b, a), (1.0, 0.0, 0.0, 1.0));
/// ```
#[derive(Clone)]
pub struct Texture {
    image: RgbaImage,
}

impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

impl Texture {
    /// Wraps an already-decoded RGBA image.
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Decodes a texture from a file on disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, MeshError> {
        let image = image::open(path)?.to_rgba8();
        Ok(Self { image })
    }

    /// Texture width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Texture height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Samples the texture at a UV coordinate with bilinear filtering.
    ///
    /// Returns RGBA in [0.0, 1.0]. UVs repeat outside the unit square and the
    /// V axis is flipped to account for the image's top-left pixel origin.
    pub fn sample(&self, uv: DVec2) -> [f32; 4] {
        let (w, h) = (self.image.width() as i64, self.image.height() as i64);

        // Repeat wrap into [0, 1), then flip V.
        let u = uv.x - uv.x.floor();
        let v = 1.0 - (uv.y - uv.y.floor());

        // Sample positions in continuous pixel space, centered on texels.
        let x = u * w as f64 - 0.5;
        let y = v * h as f64 - 0.5;

        let x0 = x.floor() as i64;
        let y0 = y.floor() as i64;
        let fx = (x - x0 as f64) as f32;
        let fy = (y - y0 as f64) as f32;

        let p00 = self.texel(x0, y0, w, h);
        let p10 = self.texel(x0 + 1, y0, w, h);
        let p01 = self.texel(x0, y0 + 1, w, h);
        let p11 = self.texel(x0 + 1, y0 + 1, w, h);

        let mut out = [0.0f32; 4];
        for c in 0..4 {
            let top = p00[c] * (1.0 - fx) + p10[c] * fx;
            let bottom = p01[c] * (1.0 - fx) + p11[c] * fx;
            out[c] = top * (1.0 - fy) + bottom * fy;
        }
        out
    }

    fn texel(&self, x: i64, y: i64, w: i64, h: i64) -> [f32; 4] {
        let px = x.rem_euclid(w) as u32;
        let py = y.rem_euclid(h) as u32;
        let p = self.image.get_pixel(px, py);
        [
            p[0] as f32 / 255.0,
            p[1] as f32 / 255.0,
            p[2] as f32 / 255.0,
            p[3] as f32 / 255.0,
        ]
    }
}
