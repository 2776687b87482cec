//! Demo pane arrangement.
//!
//! Sash's compositor consumes pane geometries and blank regions produced
//! by a layout engine; this module supplies a fixed master-stack
//! arrangement so the binary has something to frame. The bottom strip is
//! deliberately left uncovered and reported as a blank rect.

use sash_common::types::{PaneId, PixelRect};
use sash_renderer::PhysicalSize;

/// Margin between the viewport edge / neighboring panes and each pane's
/// content area, leaving room for the padding and border rings.
const PANE_MARGIN: f32 = 16.0;

/// Height of the uncovered strip at the bottom of the viewport.
const BLANK_STRIP_HEIGHT: f32 = 48.0;

/// One frame's layout inputs: pane geometries, the focused pane, and the
/// regions no pane covers.
pub struct Scene {
    pub panes: Vec<(PaneId, PixelRect)>,
    pub active_pane: Option<PaneId>,
    pub blank_rects: Vec<PixelRect>,
}

/// Build the demo scene for the given viewport: one master pane on the
/// left, two stacked panes on the right, and a blank strip along the
/// bottom. Falls back to a single pane when the viewport is too small to
/// split.
pub fn demo_scene(viewport: PhysicalSize) -> Scene {
    let w = viewport.width as f32;
    let h = viewport.height as f32;
    let m = PANE_MARGIN;

    let content_bottom = (h - BLANK_STRIP_HEIGHT).max(m * 3.0);
    // The clamp can push the content area past a very short viewport; no
    // strip remains in that case.
    let blank_rects = if content_bottom < h {
        vec![PixelRect::new(0.0, content_bottom, w, h)]
    } else {
        Vec::new()
    };

    if w < 6.0 * m || h < 6.0 * m + BLANK_STRIP_HEIGHT {
        let panes = vec![(PaneId(1), PixelRect::new(m, m, w - m, content_bottom - m))];
        return Scene {
            panes,
            active_pane: Some(PaneId(1)),
            blank_rects,
        };
    }

    let split = (w / 2.0).floor();
    let stack_split = (content_bottom / 2.0).floor();

    let panes = vec![
        (PaneId(1), PixelRect::new(m, m, split - m, content_bottom - m)),
        (PaneId(2), PixelRect::new(split + m, m, w - m, stack_split - m)),
        (
            PaneId(3),
            PixelRect::new(split + m, stack_split + m, w - m, content_bottom - m),
        ),
    ];

    Scene {
        panes,
        active_pane: Some(PaneId(1)),
        blank_rects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> PhysicalSize {
        PhysicalSize {
            width: 1280,
            height: 800,
        }
    }

    #[test]
    fn three_panes_at_normal_size() {
        let scene = demo_scene(viewport());
        assert_eq!(scene.panes.len(), 3);
        assert_eq!(scene.active_pane, Some(PaneId(1)));
        assert_eq!(scene.blank_rects.len(), 1);
    }

    #[test]
    fn panes_stay_inside_viewport() {
        let scene = demo_scene(viewport());
        for (_, rect) in &scene.panes {
            assert!(rect.left >= 0.0);
            assert!(rect.top >= 0.0);
            assert!(rect.right <= 1280.0);
            assert!(rect.bottom <= 800.0);
            assert!(!rect.is_empty());
        }
    }

    #[test]
    fn panes_do_not_overlap() {
        let scene = demo_scene(viewport());
        for (i, (_, a)) in scene.panes.iter().enumerate() {
            for (_, b) in scene.panes.iter().skip(i + 1) {
                let disjoint =
                    a.right <= b.left || b.right <= a.left || a.bottom <= b.top || b.bottom <= a.top;
                assert!(disjoint, "panes {a:?} and {b:?} overlap");
            }
        }
    }

    #[test]
    fn blank_strip_sits_below_all_panes() {
        let scene = demo_scene(viewport());
        let strip = scene.blank_rects[0];
        assert_eq!(strip.bottom, 800.0);
        for (_, rect) in &scene.panes {
            assert!(rect.bottom <= strip.top);
        }
    }

    #[test]
    fn tiny_viewport_collapses_to_single_pane() {
        let scene = demo_scene(PhysicalSize {
            width: 80,
            height: 80,
        });
        assert_eq!(scene.panes.len(), 1);
    }
}
