//! The IVS-NDI Bridge logo.
//!
//! A dark rounded tile carrying an orange camera with a play glyph on the
//! left, a white arrow in the middle, a blue signal dot with three arcs on
//! the right, and three accent bars underneath. Every coordinate is a
//! truncated fraction of the canvas size.

use tiny_skia::Pixmap;

use super::shapes::PixelBox;
use super::{Canvas, RenderError, Rgba8};

/// Tile colour
pub const BACKGROUND: Rgba8 = (26, 26, 46, 255);
const BORDER: Rgba8 = (60, 60, 80, 255);
const IVS_ORANGE: Rgba8 = (255, 153, 0, 255);
const NDI_BLUE: Rgba8 = (0, 212, 255, 255);
const WHITE: Rgba8 = (255, 255, 255, 230);
const DARK: Rgba8 = (26, 26, 46, 255);
const BRIDGE_GREY: Rgba8 = (100, 100, 100, 200);

/// Signal arc radii as multiples of the dot radius
const ARC_MULTIPLIERS: [f64; 3] = [1.8, 2.5, 3.2];
const ARC_START: f32 = 200.0;
const ARC_END: f32 = 340.0;

#[inline]
fn frac(size: u32, f: f64) -> i32 {
    (size as f64 * f) as i32
}

#[inline]
fn scaled(value: i32, f: f64) -> i32 {
    (value as f64 * f) as i32
}

/// Every measurement of the logo for one canvas size
#[derive(Debug, Clone, PartialEq)]
pub struct LogoGeometry {
    pub size: i32,
    pub padding: i32,
    pub corner_radius: i32,
    pub border_width: i32,

    pub cam_cx: i32,
    pub cam_cy: i32,
    pub cam_w: i32,
    pub cam_h: i32,
    pub cam_radius: i32,
    pub lens_w: i32,
    pub play_size: i32,

    pub arrow_y: i32,
    pub arrow_x1: i32,
    pub arrow_x2: i32,
    pub arrow_height: i32,
    pub arrow_head: i32,

    pub dot_cx: i32,
    pub dot_cy: i32,
    pub dot_r: i32,
    pub arc_width: i32,

    pub bar_y: i32,
    pub bar_h: i32,
    pub bar_w_ivs: i32,
    pub bar_w_ndi: i32,
    pub bar_w_bridge: i32,
    pub bar_y_bridge: i32,
}

impl LogoGeometry {
    pub fn for_size(size: u32) -> Self {
        let s = size as i32;
        let cam_h = frac(size, 0.16);
        Self {
            size: s,
            padding: frac(size, 0.03),
            corner_radius: frac(size, 0.18),
            border_width: (s / 128).max(1),

            cam_cx: frac(size, 0.28),
            cam_cy: frac(size, 0.45),
            cam_w: frac(size, 0.22),
            cam_h,
            cam_radius: frac(size, 0.02),
            lens_w: frac(size, 0.08),
            play_size: scaled(cam_h, 0.5),

            arrow_y: frac(size, 0.45),
            arrow_x1: frac(size, 0.44),
            arrow_x2: frac(size, 0.56),
            arrow_height: frac(size, 0.035),
            arrow_head: frac(size, 0.05),

            dot_cx: frac(size, 0.72),
            dot_cy: frac(size, 0.45),
            dot_r: frac(size, 0.06),
            arc_width: frac(size, 0.018).max(2),

            bar_y: frac(size, 0.70),
            bar_h: frac(size, 0.025).max(2),
            bar_w_ivs: frac(size, 0.15),
            bar_w_ndi: frac(size, 0.12),
            bar_w_bridge: frac(size, 0.18),
            bar_y_bridge: frac(size, 0.78),
        }
    }

    /// The rounded tile everything sits on.
    ///
    /// Clipped to the canvas, since the padding truncates to zero below 34px.
    pub fn tile(&self) -> PixelBox {
        PixelBox::new(
            self.padding,
            self.padding,
            self.size - self.padding,
            self.size - self.padding,
        )
        .clip(self.size as f32)
    }

    fn cam_origin(&self) -> (i32, i32) {
        (self.cam_cx - self.cam_w / 2, self.cam_cy - self.cam_h / 2)
    }

    pub fn camera_body(&self) -> PixelBox {
        let (x, y) = self.cam_origin();
        PixelBox::new(x, y, x + self.cam_w, y + self.cam_h)
    }

    /// Trapezoid flaring out of the right side of the camera body
    pub fn camera_lens(&self) -> [(f32, f32); 4] {
        let (x, y) = self.cam_origin();
        let right = x + self.cam_w;
        [
            (right, y + scaled(self.cam_h, 0.2)),
            (right + self.lens_w, y - scaled(self.cam_h, 0.1)),
            (right + self.lens_w, y + self.cam_h + scaled(self.cam_h, 0.1)),
            (right, y + scaled(self.cam_h, 0.8)),
        ]
        .map(|(px, py)| (px as f32, py as f32))
    }

    pub fn play_glyph(&self) -> [(f32, f32); 3] {
        let p = self.play_size;
        let offset = scaled(p, 0.12);
        let left = self.cam_cx - p / 3 + offset;
        [
            (left, self.cam_cy - p / 2),
            (left, self.cam_cy + p / 2),
            (self.cam_cx + p / 2 + offset, self.cam_cy),
        ]
        .map(|(px, py)| (px as f32, py as f32))
    }

    pub fn arrow_shaft(&self) -> PixelBox {
        PixelBox::new(
            self.arrow_x1,
            self.arrow_y - self.arrow_height / 2,
            self.arrow_x2 - self.arrow_head,
            self.arrow_y + self.arrow_height / 2,
        )
    }

    pub fn arrow_head(&self) -> [(f32, f32); 3] {
        let base = self.arrow_x2 - self.arrow_head;
        let spread = scaled(self.arrow_head, 0.8);
        [
            (base, self.arrow_y - spread),
            (self.arrow_x2, self.arrow_y),
            (base, self.arrow_y + spread),
        ]
        .map(|(px, py)| (px as f32, py as f32))
    }

    pub fn signal_dot(&self) -> PixelBox {
        PixelBox::around(self.dot_cx, self.dot_cy, self.dot_r)
    }

    /// Bounding boxes and colours of the three signal arcs, innermost first
    pub fn signal_arcs(&self) -> Vec<(PixelBox, Rgba8)> {
        ARC_MULTIPLIERS
            .iter()
            .enumerate()
            .map(|(i, mult)| {
                let r = scaled(self.dot_r, *mult);
                let opacity = (255.0 * (1.0 - i as f64 * 0.2)) as u8;
                (
                    PixelBox::around(self.dot_cx, self.dot_cy, r),
                    (NDI_BLUE.0, NDI_BLUE.1, NDI_BLUE.2, opacity),
                )
            })
            .collect()
    }

    fn bar(&self, cx: i32, y: i32, width: i32) -> PixelBox {
        PixelBox::new(cx - width / 2, y, cx + width / 2, y + self.bar_h)
    }

    pub fn ivs_bar(&self) -> PixelBox {
        self.bar(self.cam_cx, self.bar_y, self.bar_w_ivs)
    }

    pub fn ndi_bar(&self) -> PixelBox {
        self.bar(self.dot_cx, self.bar_y, self.bar_w_ndi)
    }

    pub fn bridge_bar(&self) -> PixelBox {
        self.bar(self.size / 2, self.bar_y_bridge, self.bar_w_bridge)
    }
}

/// Render the logo onto a fresh `size`×`size` transparent canvas
pub fn render_icon(size: u32) -> Result<Pixmap, RenderError> {
    let mut canvas = Canvas::new(size)?;
    let g = LogoGeometry::for_size(size);

    // Tile and its border
    let tile = g.tile();
    let radius = g.corner_radius as f32;
    canvas.fill_rounded_rect(tile, radius, BACKGROUND);
    canvas.stroke_rounded_rect(tile, radius, g.border_width as f32, BORDER);

    // Camera
    canvas.fill_rounded_rect(g.camera_body(), g.cam_radius as f32, IVS_ORANGE);
    canvas.fill_polygon(&g.camera_lens(), IVS_ORANGE);
    canvas.fill_polygon(&g.play_glyph(), DARK);

    // Arrow
    canvas.fill_rect(g.arrow_shaft(), WHITE);
    canvas.fill_polygon(&g.arrow_head(), WHITE);

    // Signal
    canvas.fill_ellipse(g.signal_dot(), NDI_BLUE);
    for (bounds, color) in g.signal_arcs() {
        canvas.stroke_arc(bounds, ARC_START, ARC_END, g.arc_width as f32, color);
    }

    // Accent bars
    let bar_radius = (g.bar_h / 2) as f32;
    canvas.fill_rounded_rect(g.ivs_bar(), bar_radius, IVS_ORANGE);
    canvas.fill_rounded_rect(g.ndi_bar(), bar_radius, NDI_BLUE);
    canvas.fill_rounded_rect(g.bridge_bar(), bar_radius, BRIDGE_GREY);

    Ok(canvas.into_pixmap())
}
