use cloudcast_image::Image;
use thiserror::Error;

/// Error types for RGB-D frames.
#[derive(Error, Debug, PartialEq)]
pub enum RgbdError {
    /// The color and depth resolutions differ.
    #[error("Shape mismatch: rgb is {0}x{1} but depth is {2}x{3}")]
    ShapeMismatch(usize, usize, usize, usize),
}

/// An RGB image paired with its aligned per-pixel metric depth map.
///
/// Both buffers share the same resolution; the pairing is validated at
/// construction so the reconstruction itself never has to re-check it.
#[derive(Debug, Clone)]
pub struct RgbdImage {
    rgb: Image<u8, 3>,
    depth: Image<f64, 1>,
}

impl RgbdImage {
    /// Pair a color image with its aligned depth map.
    ///
    /// # Errors
    ///
    /// Fails with [`RgbdError::ShapeMismatch`] unless both images share the
    /// same resolution.
    pub fn new(rgb: Image<u8, 3>, depth: Image<f64, 1>) -> Result<Self, RgbdError> {
        if rgb.size() != depth.size() {
            return Err(RgbdError::ShapeMismatch(
                rgb.width(),
                rgb.height(),
                depth.width(),
                depth.height(),
            ));
        }

        Ok(Self { rgb, depth })
    }

    /// Get the color image.
    pub fn rgb(&self) -> &Image<u8, 3> {
        &self.rgb
    }

    /// Get the depth map in meters.
    pub fn depth(&self) -> &Image<f64, 1> {
        &self.depth
    }

    /// Get the width of the frame in pixels.
    pub fn width(&self) -> usize {
        self.rgb.width()
    }

    /// Get the height of the frame in pixels.
    pub fn height(&self) -> usize {
        self.rgb.height()
    }

    /// Get the depth value at a specific pixel.
    #[inline]
    pub fn get_depth(&self, x: usize, y: usize) -> f64 {
        self.depth.as_slice()[y * self.width() + x]
    }

    /// Get the color value at a specific pixel.
    #[inline]
    pub fn get_color(&self, x: usize, y: usize) -> [u8; 3] {
        let idx = (y * self.width() + x) * 3;
        let rgb = self.rgb.as_slice();
        [rgb[idx], rgb[idx + 1], rgb[idx + 2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudcast_image::ImageSize;

    #[test]
    fn rgbd_image_smoke() -> Result<(), Box<dyn std::error::Error>> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let rgb = Image::new(size, vec![1u8, 2, 3, 4, 5, 6])?;
        let depth = Image::new(size, vec![0.5, 1.0])?;

        let frame = RgbdImage::new(rgb, depth)?;
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 1);
        assert_eq!(frame.get_depth(1, 0), 1.0);
        assert_eq!(frame.get_color(0, 0), [1, 2, 3]);

        Ok(())
    }

    #[test]
    fn rgbd_image_shape_mismatch() -> Result<(), Box<dyn std::error::Error>> {
        let rgb = Image::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0u8,
        )?;
        let depth = Image::from_size_val(
            ImageSize {
                width: 2,
                height: 3,
            },
            0.0,
        )?;

        let result = RgbdImage::new(rgb, depth);
        assert_eq!(result.unwrap_err(), RgbdError::ShapeMismatch(2, 2, 2, 3));

        Ok(())
    }

    #[test]
    fn rgbd_image_matching_shapes_accepted() -> Result<(), Box<dyn std::error::Error>> {
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let rgb = Image::from_size_val(size, 0u8)?;
        let depth = Image::from_size_val(size, 0.0)?;

        assert!(RgbdImage::new(rgb, depth).is_ok());

        Ok(())
    }
}
