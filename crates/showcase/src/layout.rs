//! Label placement within the chosen free-space region

use crate::color::Color;
use crate::geometry::{Rect, Size};
use crate::region::Region;

/// Vertical gap above the title when text sits in the top region
pub const TOP_TITLE_MARGIN: f32 = 64.0;

/// Horizontal alignment for rendered label text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Text content and styling for the two label blocks.
///
/// The core never measures or renders text; these fields pass through to the
/// display surface untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    pub title: String,
    pub details: String,
    pub title_color: Color,
    pub details_color: Color,
    pub title_alignment: TextAlignment,
    pub details_alignment: TextAlignment,
}

impl LabelSpec {
    pub fn new(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            title_color: Color::WHITE,
            details_color: Color::WHITE,
            title_alignment: TextAlignment::default(),
            details_alignment: TextAlignment::default(),
        }
    }
}

/// Where the two label blocks go; handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub title: Rect,
    pub details: Rect,
}

/// Place the title and details blocks inside `container` for `region`.
///
/// `title_size` and `details_size` are the measured text block sizes. In the
/// Left and Right regions both block widths are reduced by the target width
/// so the text wraps clear of the highlight. The bottom region constructs
/// the details block first and stacks the title above it; every other region
/// stacks title then details. Finally both blocks are re-centered
/// horizontally in the container, whatever the region.
pub fn layout(
    region: Region,
    title_size: Size,
    details_size: Size,
    container: Rect,
    target: Rect,
) -> Placement {
    let (title_w, details_w) = if region.is_horizontal() {
        (
            (title_size.width - target.width).max(0.0),
            (details_size.width - target.width).max(0.0),
        )
    } else {
        (title_size.width, details_size.width)
    };
    let title_h = title_size.height;
    let details_h = details_size.height;

    let (title_y, details_y) = match region {
        Region::Top => {
            let title_y = title_h + TOP_TITLE_MARGIN;
            (title_y, title_y + title_h + details_h / 2.0)
        }
        Region::Left | Region::Right => {
            let title_y = container.height / 2.0;
            (title_y, title_y + title_h + details_h / 2.0)
        }
        Region::Bottom => {
            // Details anchor near the bottom edge first, title stacks above
            let details_y = container.height - details_h * 2.0;
            (details_y - details_h - title_h / 2.0, details_y)
        }
    };

    let center_x = |block_w: f32| container.x + container.width / 2.0 - block_w / 2.0;

    Placement {
        title: Rect::new(center_x(title_w), container.y + title_y, title_w, title_h),
        details: Rect::new(
            center_x(details_w),
            container.y + details_y,
            details_w,
            details_h,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 320.0,
        height: 480.0,
    };

    fn title_size() -> Size {
        Size::new(100.0, 20.0)
    }

    fn details_size() -> Size {
        Size::new(150.0, 40.0)
    }

    fn target() -> Rect {
        Rect::new(130.0, 225.0, 60.0, 30.0)
    }

    #[test]
    fn top_region_golden_rects() {
        let p = layout(Region::Top, title_size(), details_size(), CONTAINER, target());
        assert_eq!(p.title, Rect::new(110.0, 84.0, 100.0, 20.0));
        assert_eq!(p.details, Rect::new(85.0, 124.0, 150.0, 40.0));
    }

    #[test]
    fn bottom_region_anchors_details_first() {
        let p = layout(
            Region::Bottom,
            title_size(),
            details_size(),
            CONTAINER,
            target(),
        );
        assert_eq!(p.details, Rect::new(85.0, 400.0, 150.0, 40.0));
        assert_eq!(p.title, Rect::new(110.0, 350.0, 100.0, 20.0));
        // Title sits strictly above details, the reverse stacking order
        assert!(p.title.bottom() < p.details.y);
    }

    #[test]
    fn left_region_reduces_widths_by_target() {
        let p = layout(Region::Left, title_size(), details_size(), CONTAINER, target());
        assert_eq!(p.title, Rect::new(140.0, 240.0, 40.0, 20.0));
        assert_eq!(p.details, Rect::new(115.0, 280.0, 90.0, 40.0));
    }

    #[test]
    fn right_region_reduces_widths_by_target() {
        let p = layout(
            Region::Right,
            title_size(),
            details_size(),
            CONTAINER,
            target(),
        );
        assert_eq!(p.title, Rect::new(140.0, 240.0, 40.0, 20.0));
        assert_eq!(p.details, Rect::new(115.0, 280.0, 90.0, 40.0));
    }

    #[test]
    fn blocks_never_overlap_each_other() {
        for region in [Region::Top, Region::Left, Region::Bottom, Region::Right] {
            let p = layout(region, title_size(), details_size(), CONTAINER, target());
            assert!(!p.title.intersects(&p.details), "{region:?}");
        }
    }

    #[test]
    fn zero_sizes_collapse_without_error() {
        let p = layout(
            Region::Top,
            Size::default(),
            Size::default(),
            CONTAINER,
            target(),
        );
        assert_eq!(p.title.size(), Size::default());
        assert_eq!(p.details.size(), Size::default());
    }

    #[test]
    fn wide_target_clamps_reduced_width_to_zero() {
        let wide = Rect::new(0.0, 225.0, 320.0, 30.0);
        let p = layout(Region::Left, title_size(), details_size(), CONTAINER, wide);
        assert_eq!(p.title.width, 0.0);
        assert_eq!(p.details.width, 0.0);
    }

    #[test]
    fn container_origin_offsets_both_blocks() {
        let container = Rect::new(10.0, 30.0, 320.0, 480.0);
        let p = layout(Region::Top, title_size(), details_size(), container, target());
        assert_eq!(p.title, Rect::new(120.0, 114.0, 100.0, 20.0));
    }
}
