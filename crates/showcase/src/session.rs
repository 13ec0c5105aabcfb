//! Show/dismiss orchestration for one highlight at a time

use crate::color::Color;
use crate::geometry::{Rect, Size};
use crate::layout::{layout, LabelSpec, Placement};
use crate::mask::{generate_mask, HighlightKind, HighlightSpec};
use crate::region::{select_region, Region};
use crate::single_shot::{mark_shown, should_suppress, FlagStore, SingleShotId};
use crate::{ShowcaseError, ShowcaseResult};
use crossbeam_channel::Sender;
use image::RgbaImage;
use uuid::Uuid;

/// Lifecycle event emitted on the showcase event channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseEvent {
    Shown { session: Uuid },
    Dismissed { session: Uuid },
}

/// Everything the display surface needs to composite one highlight.
///
/// Owned by the caller; the showcase keeps no reference once it returns.
#[derive(Debug, Clone)]
pub struct ShowcaseFrame {
    pub session: Uuid,
    pub region: Region,
    pub mask: RgbaImage,
    pub placement: Placement,
    /// Opacity to apply to `mask` when layering it over the live UI
    pub overlay_alpha: f32,
}

/// One configured coach-mark, presented and dismissed by the host.
///
/// Presentation is a pure computation: every call builds a fresh mask and
/// placement from its inputs, so the same showcase can be presented for any
/// number of targets. The flag store and the display surface stay on the
/// host side.
#[derive(Debug, Clone)]
pub struct Showcase {
    pub kind: HighlightKind,
    pub cover_color: Color,
    pub cover_alpha: f32,
    pub highlight_color: Color,
    pub radius: f32,
    pub labels: LabelSpec,
    pub single_shot: SingleShotId,
    events: Option<Sender<ShowcaseEvent>>,
    current: Option<Uuid>,
}

impl Showcase {
    pub fn new(labels: LabelSpec) -> Self {
        let defaults = HighlightSpec::new(Rect::default());
        Self {
            kind: defaults.kind,
            cover_color: defaults.cover_color,
            cover_alpha: defaults.cover_alpha,
            highlight_color: defaults.highlight_color,
            radius: defaults.radius,
            labels,
            single_shot: None,
            events: None,
            current: None,
        }
    }

    /// Deliver lifecycle events through `sender`
    pub fn set_event_channel(&mut self, sender: Sender<ShowcaseEvent>) {
        self.events = Some(sender);
    }

    fn highlight_spec(&self, target: Rect) -> HighlightSpec {
        HighlightSpec {
            target,
            kind: self.kind,
            cover_color: self.cover_color,
            cover_alpha: self.cover_alpha,
            highlight_color: self.highlight_color,
            radius: self.radius,
        }
    }

    /// Compute the full overlay for `target`.
    ///
    /// Returns `Ok(None)` without computing anything when a single-shot id is
    /// set and the flag store says this highlight was already shown.
    /// Otherwise picks the free-space region, rasterizes the mask, places the
    /// labels and emits [`ShowcaseEvent::Shown`].
    pub fn present(
        &mut self,
        screen: Size,
        target: Rect,
        title_size: Size,
        details_size: Size,
        store: &dyn FlagStore,
    ) -> ShowcaseResult<Option<ShowcaseFrame>> {
        if should_suppress(self.single_shot, store) {
            return Ok(None);
        }

        let region = select_region(screen, target);
        let mask = generate_mask(screen, &self.highlight_spec(target));
        let container = Rect::new(0.0, 0.0, screen.width, screen.height);
        let placement = layout(region, title_size, details_size, container, target);

        let session = Uuid::new_v4();
        self.current = Some(session);
        self.emit(ShowcaseEvent::Shown { session })?;

        Ok(Some(ShowcaseFrame {
            session,
            region,
            mask,
            placement,
            overlay_alpha: self.cover_alpha,
        }))
    }

    /// Record a tap-dismissal of the current presentation.
    ///
    /// Persists the single-shot flag and clears the id, so presenting the
    /// same showcase again in this process is not suppressed, then emits
    /// [`ShowcaseEvent::Dismissed`].
    pub fn dismiss(&mut self, store: &mut dyn FlagStore) -> ShowcaseResult<()> {
        mark_shown(self.single_shot.take(), store);

        if let Some(session) = self.current.take() {
            self.emit(ShowcaseEvent::Dismissed { session })?;
        }

        Ok(())
    }

    fn emit(&self, event: ShowcaseEvent) -> ShowcaseResult<()> {
        if let Some(sender) = &self.events {
            sender
                .send(event)
                .map_err(|_| ShowcaseError::EventChannel)?;
        }
        Ok(())
    }
}
