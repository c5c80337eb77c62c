//! Icon rasterization
//!
//! Draws the logo onto a transparent tiny-skia canvas and writes it out as
//! a straight-alpha RGBA PNG through the `image` crate.

mod logo;
pub mod shapes;

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tiny_skia::{
    BlendMode, FillRule, LineCap, LineJoin, Paint, Path as SkPath, Pixmap, Stroke, Transform,
};

pub use logo::render_icon;

use shapes::PixelBox;

/// Largest canvas edge we agree to allocate
pub const MAX_CANVAS: u32 = 16_384;

/// Straight (non-premultiplied) RGBA colour
pub type Rgba8 = (u8, u8, u8, u8);

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("icon size must be between 1 and {max}, got {0}", max = MAX_CANVAS)]
    InvalidSize(u32),
    #[error("failed to allocate a {0}x{0} canvas")]
    Allocation(u32),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Thin drawing surface over a pixmap.
///
/// Shapes are rasterized without anti-aliasing and replace the pixels they
/// cover, alpha included, so the output depends on nothing but the geometry.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    pub fn new(size: u32) -> Result<Self, RenderError> {
        if size == 0 || size > MAX_CANVAS {
            return Err(RenderError::InvalidSize(size));
        }
        let pixmap = Pixmap::new(size, size).ok_or(RenderError::Allocation(size))?;
        Ok(Self { pixmap })
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn paint(color: Rgba8) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.0, color.1, color.2, color.3);
        paint.anti_alias = false;
        paint.blend_mode = BlendMode::Source;
        paint
    }

    fn fill(&mut self, path: Option<SkPath>, color: Rgba8) {
        if let Some(path) = path {
            self.pixmap.fill_path(
                &path,
                &Self::paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn stroke(&mut self, path: Option<SkPath>, width: f32, color: Rgba8) {
        let Some(path) = path else { return };
        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &Self::paint(color),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    pub fn fill_rect(&mut self, bounds: PixelBox, color: Rgba8) {
        self.fill(shapes::rect(bounds), color);
    }

    pub fn fill_rounded_rect(&mut self, bounds: PixelBox, radius: f32, color: Rgba8) {
        self.fill(shapes::rounded_rect(bounds, radius), color);
    }

    /// Outline drawn entirely inside `bounds`
    pub fn stroke_rounded_rect(&mut self, bounds: PixelBox, radius: f32, width: f32, color: Rgba8) {
        let half = width / 2.0;
        self.stroke(
            shapes::rounded_rect(bounds.inset(half), (radius - half).max(0.0)),
            width,
            color,
        );
    }

    pub fn fill_ellipse(&mut self, bounds: PixelBox, color: Rgba8) {
        self.fill(shapes::oval(bounds), color);
    }

    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgba8) {
        self.fill(shapes::polygon(points), color);
    }

    /// Arc band of the given width lying inside the circle inscribed in `bounds`
    pub fn stroke_arc(&mut self, bounds: PixelBox, start: f32, end: f32, width: f32, color: Rgba8) {
        let cx = (bounds.x0 + bounds.x1) / 2.0;
        let cy = (bounds.y0 + bounds.y1) / 2.0;
        let radius = bounds.width().min(bounds.height()) / 2.0 - width / 2.0;
        self.stroke(shapes::arc(cx, cy, radius, start, end), width, color);
    }
}

/// Convert a premultiplied pixmap into a straight-alpha RGBA image
pub fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    img
}

/// Write a rendered canvas as PNG
pub fn save_png(pixmap: &Pixmap, path: &Path) -> Result<(), RenderError> {
    to_rgba_image(pixmap)
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Render the logo at `size` and write it to `path`
pub fn render_to_file(size: u32, path: &Path) -> Result<(), RenderError> {
    let pixmap = render_icon(size)?;
    save_png(&pixmap, path)?;
    tracing::debug!("Rendered {}x{} to {}", size, size, path.display());
    Ok(())
}
