use crate::core::data::complex::Complex;
use crate::core::data::grid_dims::GridDims;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_plane::pixel_to_plane;

/// The per-pixel complex coordinates for one epoch.
///
/// Built once from the viewport when an epoch starts and immutable until the
/// next viewport change; every iteration reads the same `c` values.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    dims: GridDims,
    points: Vec<Complex>,
}

impl SampleGrid {
    #[must_use]
    pub fn new(viewport: &Viewport, dims: GridDims) -> Self {
        let mut points = Vec::with_capacity(dims.pixel_count());

        for y in 0..dims.height() {
            for x in 0..dims.width() {
                points.push(pixel_to_plane(x, y, dims, viewport));
            }
        }

        Self { dims, points }
    }

    #[must_use]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[must_use]
    pub fn points(&self) -> &[Complex] {
        &self.points
    }

    #[must_use]
    pub fn point_at(&self, x: u32, y: u32) -> Complex {
        self.points[y as usize * self.dims.width() as usize + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_samples_are_exact() {
        let viewport = Viewport::new(-2.0, 0.5, -1.5, 1.5).unwrap();
        let dims = GridDims::new(256, 256).unwrap();

        let grid = SampleGrid::new(&viewport, dims);

        assert_eq!(
            grid.point_at(0, 0),
            Complex {
                real: -2.0,
                imag: -1.5
            }
        );
        assert_eq!(
            grid.point_at(255, 255),
            Complex {
                real: 0.5,
                imag: 1.5
            }
        );
    }

    #[test]
    fn test_corner_samples_exact_on_non_square_grid() {
        let viewport = Viewport::new(-1.0, 2.0, -0.5, 0.5).unwrap();
        let dims = GridDims::new(64, 48).unwrap();

        let grid = SampleGrid::new(&viewport, dims);

        assert_eq!(
            grid.point_at(0, 0),
            Complex {
                real: -1.0,
                imag: -0.5
            }
        );
        assert_eq!(
            grid.point_at(63, 47),
            Complex {
                real: 2.0,
                imag: 0.5
            }
        );
    }

    #[test]
    fn test_grid_is_row_major() {
        let viewport = Viewport::new(0.0, 1.0, 0.0, 1.0).unwrap();
        let dims = GridDims::new(3, 2).unwrap();

        let grid = SampleGrid::new(&viewport, dims);

        assert_eq!(grid.points().len(), 6);
        // Second row starts at index width, not height.
        assert_eq!(grid.points()[3], grid.point_at(0, 1));
        assert_eq!(grid.points()[3].imag, 1.0);
        assert_eq!(grid.points()[3].real, 0.0);
    }

    #[test]
    fn test_samples_increase_monotonically() {
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        let dims = GridDims::new(16, 16).unwrap();

        let grid = SampleGrid::new(&viewport, dims);

        for x in 1..16 {
            assert!(grid.point_at(x, 0).real > grid.point_at(x - 1, 0).real);
        }
        for y in 1..16 {
            assert!(grid.point_at(0, y).imag > grid.point_at(0, y - 1).imag);
        }
    }
}
