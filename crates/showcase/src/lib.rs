//! Showcase overlay geometry kit
//!
//! Computes everything a coach-mark overlay needs before it hits the screen:
//! which screen region has the most free space for text, a screen-sized mask
//! raster with a transparent cutout over the highlighted target, and the
//! placement rectangles for the title and details blocks. Rendering, gesture
//! handling and persistence stay with the host UI toolkit; the host injects a
//! [`FlagStore`] for single-shot suppression and composites the returned
//! [`ShowcaseFrame`] itself.

pub mod color;
pub mod geometry;
pub mod layout;
pub mod mask;
pub mod region;
pub mod session;
pub mod single_shot;

pub use color::{Color, DEFAULT_HIGHLIGHT_COLOR};
pub use geometry::{Rect, Size};
pub use layout::{layout, LabelSpec, Placement, TextAlignment};
pub use mask::{generate_mask, HighlightKind, HighlightSpec};
pub use region::{select_region, Region};
pub use session::{Showcase, ShowcaseEvent, ShowcaseFrame};
pub use single_shot::{
    flag_key, mark_shown, should_suppress, FlagStore, MemoryFlagStore, SingleShotId,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("event channel disconnected")]
    EventChannel,
}

pub type ShowcaseResult<T> = Result<T, ShowcaseError>;
