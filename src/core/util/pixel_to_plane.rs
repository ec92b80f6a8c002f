use crate::core::data::complex::Complex;
use crate::core::data::grid_dims::GridDims;
use crate::core::data::viewport::Viewport;

/// Maps a grid position to its complex-plane coordinate by linear
/// interpolation across the viewport.
///
/// Corner samples are exact: `(0, 0)` maps to `(xmin, ymin)` and
/// `(width - 1, height - 1)` maps to `(xmax, ymax)`.
pub fn pixel_to_plane(x: u32, y: u32, dims: GridDims, viewport: &Viewport) -> Complex {
    debug_assert!(x < dims.width() && y < dims.height());

    let x_fraction = f64::from(x) / f64::from(dims.width() - 1);
    let y_fraction = f64::from(y) / f64::from(dims.height() - 1);

    Complex {
        real: viewport.xmin() + x_fraction * viewport.width(),
        imag: viewport.ymin() + y_fraction * viewport.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_viewport() -> Viewport {
        Viewport::new(-2.0, 0.5, -1.5, 1.5).unwrap()
    }

    #[test]
    fn test_origin_maps_to_min_corner() {
        let dims = GridDims::new(256, 256).unwrap();

        let c = pixel_to_plane(0, 0, dims, &test_viewport());

        assert_eq!(c.real, -2.0);
        assert_eq!(c.imag, -1.5);
    }

    #[test]
    fn test_last_pixel_maps_to_max_corner() {
        let dims = GridDims::new(256, 256).unwrap();

        let c = pixel_to_plane(255, 255, dims, &test_viewport());

        assert_eq!(c.real, 0.5);
        assert_eq!(c.imag, 1.5);
    }

    #[test]
    fn test_center_of_symmetric_grid() {
        let dims = GridDims::new(3, 3).unwrap();
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap();

        let c = pixel_to_plane(1, 1, dims, &viewport);

        assert_eq!(c.real, 0.0);
        assert_eq!(c.imag, 0.0);
    }
}
