use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    Degenerate { width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate { width, height } => {
                write!(
                    f,
                    "viewport extents must be positive and finite: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The complex-plane rectangle under observation.
///
/// Replaced wholesale on zoom; the engine rebuilds its sample grid from it.
/// The constructor is the boundary that keeps degenerate rectangles out of
/// the engine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl Viewport {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, ViewportError> {
        let width = xmax - xmin;
        let height = ymax - ymin;

        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ViewportError::Degenerate { width, height });
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            self.xmin + self.width() / 2.0,
            self.ymin + self.height() / 2.0,
        )
    }
}

impl Default for Viewport {
    /// The reference view of the whole set.
    fn default() -> Self {
        Self::new(-2.0, 0.5, -1.5, 1.5).expect("default viewport is valid")
    }
}
