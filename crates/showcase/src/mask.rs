//! Overlay mask rasterization with a punched-out highlight cutout

use crate::color::{Color, DEFAULT_HIGHLIGHT_COLOR};
use crate::geometry::{Rect, Size};
use image::{Rgba, RgbaImage};

/// Outer highlight inflation on every side of the target, in units
pub const HIGHLIGHT_INSET: f32 = 15.0;
/// Soft glow radius around the highlight strokes
pub const GLOW_RADIUS: f32 = 30.0;
/// Line width of the inner rectangle stroke
pub const INNER_STROKE_WIDTH: f32 = 3.0;
/// Line width of the outer rectangle stroke
pub const OUTER_STROKE_WIDTH: f32 = 1.0;
/// Line width of the circle ring strokes
pub const RING_STROKE_WIDTH: f32 = 2.54;
/// How much smaller the circular cutout is than the inner ring
pub const CUTOUT_SHRINK: f32 = 0.54;
/// Opacity the compositor applies to the finished overlay
pub const DEFAULT_OVERLAY_ALPHA: f32 = 0.75;
/// Default circle highlight radius
pub const DEFAULT_CIRCLE_RADIUS: f32 = 25.0;

/// Shape of the highlight drawn around the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    Circle,
    Rectangle,
}

/// Immutable description of one highlight, consumed by [`generate_mask`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightSpec {
    /// Target bounds in screen coordinates
    pub target: Rect,
    pub kind: HighlightKind,
    /// Color covering the rest of the screen
    pub cover_color: Color,
    /// Opacity the compositor should apply to the whole overlay
    pub cover_alpha: f32,
    /// Stroke and glow color of the highlight
    pub highlight_color: Color,
    /// Circle radius; ignored for rectangle highlights
    pub radius: f32,
}

impl HighlightSpec {
    pub fn new(target: Rect) -> Self {
        Self {
            target,
            kind: HighlightKind::Rectangle,
            cover_color: Color::BLACK,
            cover_alpha: DEFAULT_OVERLAY_ALPHA,
            highlight_color: *DEFAULT_HIGHLIGHT_COLOR,
            radius: DEFAULT_CIRCLE_RADIUS,
        }
    }

    pub fn circle(target: Rect, radius: f32) -> Self {
        Self {
            kind: HighlightKind::Circle,
            radius,
            ..Self::new(target)
        }
    }
}

/// Rasterize the overlay mask for one highlight.
///
/// The result is a screen-sized image: the cover color everywhere, highlight
/// strokes and glow around the target, and a fully transparent cutout over
/// the target itself so the live UI shows through. `cover_alpha` is not baked
/// in; the compositor applies it when layering the mask over the screen.
///
/// Degenerate targets still rasterize (the cutout collapses to nothing for a
/// zero-size rectangle, the ring shrinks to a point-centered dot); there is
/// no failure path.
pub fn generate_mask(screen: Size, spec: &HighlightSpec) -> RgbaImage {
    let width = screen.width.ceil().max(0.0) as u32;
    let height = screen.height.ceil().max(0.0) as u32;
    let mut canvas = RgbaImage::new(width, height);

    match spec.kind {
        HighlightKind::Rectangle => rasterize_rectangle(&mut canvas, spec),
        HighlightKind::Circle => rasterize_circle(&mut canvas, spec),
    }

    canvas
}

fn rasterize_rectangle(canvas: &mut RgbaImage, spec: &HighlightSpec) {
    let target = spec.target;
    let outer = target.inset(-HIGHLIGHT_INSET);

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        // Clear-composite cutout: the live UI shows through the target
        if target.contains(px, py) {
            *pixel = Rgba([0, 0, 0, 0]);
            continue;
        }

        let d_outer = rect_edge_distance(px, py, &outer);
        let d_inner = rect_edge_distance(px, py, &target);

        let stroke = stroke_coverage(d_outer, OUTER_STROKE_WIDTH)
            .max(stroke_coverage(d_inner, INNER_STROKE_WIDTH));
        let glow = glow_falloff(d_outer).max(glow_falloff(d_inner));

        *pixel = shade(spec, stroke.max(glow));
    }
}

fn rasterize_circle(canvas: &mut RgbaImage, spec: &HighlightSpec) {
    let (cx, cy) = spec.target.center();
    let radius = spec.radius.max(0.0);
    let cutout_radius = radius - CUTOUT_SHRINK;

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let dist = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();

        if dist <= cutout_radius {
            *pixel = Rgba([0, 0, 0, 0]);
            continue;
        }

        let d_outer = (dist - 2.0 * radius).abs();
        let d_inner = (dist - radius).abs();

        let stroke = stroke_coverage(d_outer, RING_STROKE_WIDTH)
            .max(stroke_coverage(d_inner, RING_STROKE_WIDTH));
        let glow = glow_falloff(d_outer).max(glow_falloff(d_inner));

        *pixel = shade(spec, stroke.max(glow));
    }
}

/// Distance from a point to the rectangle outline (zero on the edge)
fn rect_edge_distance(px: f32, py: f32, rect: &Rect) -> f32 {
    let dx = (rect.left() - px).max(px - rect.right()).max(0.0);
    let dy = (rect.top() - py).max(py - rect.bottom()).max(0.0);

    if dx > 0.0 || dy > 0.0 {
        // Outside: euclidean distance to the nearest edge point
        (dx * dx + dy * dy).sqrt()
    } else {
        // Inside: distance to the closest edge
        (px - rect.left())
            .min(rect.right() - px)
            .min(py - rect.top())
            .min(rect.bottom() - py)
    }
}

/// Anti-aliased coverage of a stroke band centered on the outline
fn stroke_coverage(distance: f32, line_width: f32) -> f32 {
    (line_width / 2.0 + 0.5 - distance).clamp(0.0, 1.0)
}

/// Soft shadow falloff from the outline out to [`GLOW_RADIUS`]
fn glow_falloff(distance: f32) -> f32 {
    let t = (1.0 - distance / GLOW_RADIUS).clamp(0.0, 1.0);
    t * t
}

/// Blend the highlight color over the cover color at weight `t`
fn shade(spec: &HighlightSpec, t: f32) -> Rgba<u8> {
    let cover = spec.cover_color;
    let tint = spec.highlight_color;
    let mix = Color::new(
        cover.r + (tint.r - cover.r) * t,
        cover.g + (tint.g - cover.g) * t,
        cover.b + (tint.b - cover.b) * t,
        cover.a + (tint.a - cover.a) * t,
    );
    Rgba(mix.rgba8())
}
