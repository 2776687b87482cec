//! The border rectangle generator.
//!
//! Holds the frame widths (converted to device pixels once per config
//! load) and the three packed colors, and emits one frame's worth of
//! rectangles per [`BorderRects::collect`] call.

use sash_common::types::{PaneId, PixelRect};
use sash_config::schema::WindowConfig;
use sash_config::Palette;

use crate::gpu::PhysicalSize;
use crate::scale::pt_to_px;

use super::sink::RectSink;

/// Packed color of the sentinel rectangle: fully transparent.
const NO_COLOR: u32 = 0;

// =============================================================================
// TYPES
// =============================================================================

/// Generates the filled rectangles for pane borders, padding fills, and
/// blank-region fills.
///
/// Constructed once per configuration load (startup or live reload) and
/// invoked once per redraw. Holds no per-frame state: each [`collect`]
/// call is a pure function of its inputs plus this immutable
/// configuration, apart from the emission side effect on the sink.
///
/// [`collect`]: BorderRects::collect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderRects {
    /// Border stroke width in device pixels.
    border_width: u32,
    /// Padding fill width in device pixels.
    padding_width: u32,
    background: u32,
    active_border: u32,
    inactive_border: u32,
}

impl BorderRects {
    /// Build a generator from the window config and resolved palette.
    ///
    /// Point widths are converted to device pixels here, using the
    /// current display scale; colors are packed here. Both stay fixed
    /// until the generator is rebuilt on the next config load.
    pub fn new(window: &WindowConfig, palette: &Palette, scale_factor: f64) -> Self {
        Self {
            border_width: pt_to_px(window.border_width, scale_factor) as u32,
            padding_width: pt_to_px(window.padding_width, scale_factor) as u32,
            background: palette.background.to_packed(),
            active_border: palette.active_border.to_packed(),
            inactive_border: palette.inactive_border.to_packed(),
        }
    }

    /// Emit one frame's rectangles into `sink` and submit them.
    ///
    /// Order matters: the sentinel first, then blank regions (layout's
    /// `blank_rects` followed by `extra_blank_rects`) in background color,
    /// then per pane the border ring and the padding ring. The border ring
    /// occupies the outer band of the frame; the padding ring fills the
    /// band between the pane's content edge and the stroke.
    ///
    /// `active_pane` selects the border color per pane by `PaneId` equality.
    /// `draw_pane_borders = false` suppresses border strokes but keeps
    /// padding fills.
    #[allow(clippy::too_many_arguments)]
    pub fn collect<S: RectSink>(
        &self,
        sink: &mut S,
        panes: &[(PaneId, PixelRect)],
        active_pane: Option<PaneId>,
        blank_rects: &[PixelRect],
        extra_blank_rects: &[PixelRect],
        draw_pane_borders: bool,
        viewport: PhysicalSize,
    ) {
        // Zero-area sentinel, always first. The backend renders it as a
        // no-op; kept as the frame's reset marker.
        sink.accumulate_rect(0.0, 0.0, 0.0, 0.0, NO_COLOR);

        for rect in blank_rects.iter().chain(extra_blank_rects) {
            sink.accumulate_rect(rect.left, rect.top, rect.right, rect.bottom, self.background);
        }

        let bw = self.border_width as f32;
        let pw = self.padding_width as f32;
        let frame_width = bw + pw;

        if frame_width > 0.0 {
            for (id, geometry) in panes {
                if bw > 0.0 && draw_pane_borders {
                    let color = if active_pane == Some(*id) {
                        self.active_border
                    } else {
                        self.inactive_border
                    };
                    ring(sink, color, bw, geometry.expanded(frame_width));
                }
                if pw > 0.0 {
                    ring(sink, self.background, pw, geometry.expanded(pw));
                }
            }
        }

        sink.submit_rects(viewport.width as f32, viewport.height as f32);
    }
}

// =============================================================================
// RING EMISSION
// =============================================================================

/// Emit the four rectangles of a stroked frame of width `sz` whose outer
/// extent is `outer`: top and bottom edges spanning the full width, left
/// and right edges spanning the full height. The four corner squares are
/// covered twice, always by the same color.
fn ring<S: RectSink>(sink: &mut S, color: u32, sz: f32, outer: PixelRect) {
    let PixelRect {
        left,
        top,
        right,
        bottom,
    } = outer;
    sink.accumulate_rect(left, top, right, top + sz, color);
    sink.accumulate_rect(left, bottom - sz, right, bottom, color);
    sink.accumulate_rect(left, top, left + sz, bottom, color);
    sink.accumulate_rect(right - sz, top, right, bottom, color);
}

// =============================================================================
// TESTS
// =============================================================================
