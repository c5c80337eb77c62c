//! Path construction for the primitives the logo needs.
//!
//! tiny-skia only ships rectangles and ovals, so rounded rectangles and
//! circular arcs are built here from cubic segments. Every builder returns
//! `None` for degenerate input (zero or negative extent), which callers treat
//! as "nothing to draw".
//!
//! Boxes are given as inclusive pixel corners: `new(x0, y0, x1, y1)` covers
//! columns `x0..=x1` and rows `y0..=y1`.

use tiny_skia::{Path, PathBuilder, Rect};

/// Cubic control-point factor for a quarter circle
const KAPPA: f32 = 0.552_284_8;

/// Axis-aligned box in continuous canvas coordinates; `x1`/`y1` is the far edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl PixelBox {
    /// Box covering the pixels from `(x0, y0)` through `(x1, y1)` inclusive
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0 as f32,
            y0: y0 as f32,
            x1: (x1 + 1) as f32,
            y1: (y1 + 1) as f32,
        }
    }

    /// Square box around a centre point
    pub fn around(cx: i32, cy: i32, radius: i32) -> Self {
        Self::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Clip to a `size`×`size` canvas
    pub fn clip(&self, size: f32) -> Self {
        Self {
            x0: self.x0.max(0.0),
            y0: self.y0.max(0.0),
            x1: self.x1.min(size),
            y1: self.y1.min(size),
        }
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            x0: self.x0 + amount,
            y0: self.y0 + amount,
            x1: self.x1 - amount,
            y1: self.y1 - amount,
        }
    }

    pub fn to_rect(self) -> Option<Rect> {
        if self.width() <= 0.0 || self.height() <= 0.0 {
            return None;
        }
        Rect::from_ltrb(self.x0, self.y0, self.x1, self.y1)
    }
}

pub fn rect(bounds: PixelBox) -> Option<Path> {
    bounds.to_rect().map(PathBuilder::from_rect)
}

pub fn oval(bounds: PixelBox) -> Option<Path> {
    PathBuilder::from_oval(bounds.to_rect()?)
}

/// Rectangle with circular corners; the radius is clamped to half the shorter side
pub fn rounded_rect(bounds: PixelBox, radius: f32) -> Option<Path> {
    let r = radius.min(bounds.width() / 2.0).min(bounds.height() / 2.0);
    if r <= 0.0 {
        return rect(bounds);
    }
    bounds.to_rect()?;

    let PixelBox { x0, y0, x1, y1 } = bounds;
    let k = r * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(x0 + r, y0);
    pb.line_to(x1 - r, y0);
    pb.cubic_to(x1 - r + k, y0, x1, y0 + r - k, x1, y0 + r);
    pb.line_to(x1, y1 - r);
    pb.cubic_to(x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1);
    pb.line_to(x0 + r, y1);
    pb.cubic_to(x0 + r - k, y1, x0, y1 - r + k, x0, y1 - r);
    pb.line_to(x0, y0 + r);
    pb.cubic_to(x0, y0 + r - k, x0 + r - k, y0, x0 + r, y0);
    pb.close();
    pb.finish()
}

/// Closed polygon through the given vertices
pub fn polygon(points: &[(f32, f32)]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    if rest.len() < 2 {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(first.0, first.1);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    pb.close();
    pb.finish()
}

/// Open circular arc around `(cx, cy)`.
///
/// Angles are in degrees, measured clockwise from the positive x axis in
/// screen coordinates (y grows downwards), sweeping from `start` to `end`.
pub fn arc(cx: f32, cy: f32, radius: f32, start: f32, end: f32) -> Option<Path> {
    let sweep = end - start;
    if radius <= 0.0 || sweep <= 0.0 {
        return None;
    }

    let segments = (sweep / 90.0).ceil().max(1.0) as usize;
    let step = (sweep / segments as f32).to_radians();
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    let point = |a: f32| (cx + radius * a.cos(), cy + radius * a.sin());

    let mut pb = PathBuilder::new();
    let mut a0 = start.to_radians();
    let (sx, sy) = point(a0);
    pb.move_to(sx, sy);

    for _ in 0..segments {
        let a1 = a0 + step;
        let (p0x, p0y) = point(a0);
        let (p1x, p1y) = point(a1);
        // Tangent at angle a is (-sin a, cos a)
        let c1 = (p0x - k * radius * a0.sin(), p0y + k * radius * a0.cos());
        let c2 = (p1x + k * radius * a1.sin(), p1y - k * radius * a1.cos());
        pb.cubic_to(c1.0, c1.1, c2.0, c2.1, p1x, p1y);
        a0 = a1;
    }
    pb.finish()
}
