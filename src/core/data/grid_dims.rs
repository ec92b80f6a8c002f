use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridDimsError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for GridDimsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "grid dimensions must be at least 2x2: {}x{}", width, height)
            }
        }
    }
}

impl Error for GridDimsError {}

/// Pixel dimensions of the sample grid and frame.
///
/// Both sides must be at least 2 so the corner-to-corner linear
/// interpolation (which divides by `n - 1`) is well defined.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridDims {
    width: u32,
    height: u32,
}

impl GridDims {
    pub fn new(width: u32, height: u32) -> Result<Self, GridDimsError> {
        if width < 2 || height < 2 {
            return Err(GridDimsError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
