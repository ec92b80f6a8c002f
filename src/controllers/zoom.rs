use crate::core::data::grid_dims::GridDims;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_plane::pixel_to_plane;

/// Translates pointer gestures on the selection surface into new viewports.
///
/// Zoom-in picks a rectangle of exactly half the current width/height,
/// centred on the plane point under the anchor pixel and clamped inside
/// the current view. Zoom-out doubles the extents about the current
/// centre. The rectangle is replaced wholesale; the engine observes the
/// change and rebuilds its grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomController {
    viewport: Viewport,
    surface: GridDims,
}

impl ZoomController {
    #[must_use]
    pub fn new(viewport: Viewport, surface: GridDims) -> Self {
        Self { viewport, surface }
    }

    #[must_use]
    pub fn current_rect(&self) -> Viewport {
        self.viewport
    }

    /// Halves the view around the anchor pixel and returns the new
    /// rectangle. At the f64 precision floor the halved rectangle can
    /// collapse to zero width; the current view is kept in that case
    /// rather than letting a degenerate rectangle reach the engine.
    pub fn zoom_in(&mut self, anchor_x: u32, anchor_y: u32) -> Viewport {
        let half_width = self.viewport.width() / 2.0;
        let half_height = self.viewport.height() / 2.0;

        let anchor = pixel_to_plane(anchor_x, anchor_y, self.surface, &self.viewport);
        let xmin = clamp_origin(
            anchor.real,
            half_width,
            self.viewport.xmin(),
            self.viewport.xmax(),
        );
        let ymin = clamp_origin(
            anchor.imag,
            half_height,
            self.viewport.ymin(),
            self.viewport.ymax(),
        );

        if let Ok(next) = Viewport::new(xmin, xmin + half_width, ymin, ymin + half_height) {
            self.viewport = next;
        }

        self.viewport
    }

    /// Doubles the view extents about the current centre.
    pub fn zoom_out(&mut self) -> Viewport {
        let (cx, cy) = self.viewport.center();
        let width = self.viewport.width();
        let height = self.viewport.height();

        if let Ok(next) = Viewport::new(cx - width, cx + width, cy - height, cy + height) {
            self.viewport = next;
        }

        self.viewport
    }
}

/// Minimum edge of a span-wide selection centred on the anchor, shifted so
/// the selection stays inside the current extent. `span` never exceeds
/// `max - min`, so the clamp bounds cannot cross.
fn clamp_origin(anchor: f64, span: f64, min: f64, max: f64) -> f64 {
    (anchor - span / 2.0).clamp(min, max - span)
}
