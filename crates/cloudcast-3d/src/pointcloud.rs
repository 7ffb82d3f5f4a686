/// A dense point cloud retaining the image grid structure.
///
/// Every pixel of the source image maps to exactly one 3D point, so the
/// cloud holds `width * height` points in row-major order and stays aligned
/// 1:1 with the color image and any per-pixel label map. Pixels without
/// valid range data keep their degenerate projection (the all-zero point for
/// zero depth); the cloud is never compacted.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    // The points in the point cloud, row-major over the image grid.
    points: Vec<[f64; 3]>,
    // The colors of the points.
    colors: Option<Vec<[u8; 3]>>,
    // The image grid dimensions.
    width: usize,
    height: usize,
}

impl PointCloud {
    /// Create a new dense point cloud from grid-shaped points and optional
    /// colors.
    ///
    /// PRECONDITION: `points` covers the full image grid, and `colors` (when
    /// present) has one entry per point.
    pub fn new(
        points: Vec<[f64; 3]>,
        colors: Option<Vec<[u8; 3]>>,
        width: usize,
        height: usize,
    ) -> Self {
        assert_eq!(
            points.len(),
            width * height,
            "points must cover the full image grid"
        );
        if let Some(colors) = &colors {
            assert_eq!(
                colors.len(),
                points.len(),
                "colors must have one entry per point"
            );
        }

        Self {
            points,
            colors,
            width,
            height,
        }
    }

    /// Get the number of points in the point cloud.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the width of the image grid.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the image grid.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get as reference the points in the point cloud.
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    /// Get as reference the colors of the points in the point cloud.
    pub fn colors(&self) -> Option<&[[u8; 3]]> {
        self.colors.as_deref()
    }

    /// Get the point at a specific pixel.
    #[inline]
    pub fn get_point(&self, x: usize, y: usize) -> [f64; 3] {
        self.points[y * self.width + x]
    }

    /// Get the color at a specific pixel, if the cloud carries colors.
    #[inline]
    pub fn get_color(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        self.colors
            .as_ref()
            .map(|colors| colors[y * self.width + x])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointcloud() {
        let pointcloud = PointCloud::new(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
            Some(vec![[255, 0, 0], [0, 255, 0]]),
            2,
            1,
        );

        assert_eq!(pointcloud.len(), 2);
        assert_eq!(pointcloud.width(), 2);
        assert_eq!(pointcloud.height(), 1);
        assert!(!pointcloud.is_empty());

        assert_eq!(pointcloud.get_point(1, 0), [1.0, 0.0, 0.0]);
        assert_eq!(pointcloud.get_color(0, 0), Some([255, 0, 0]));

        if let Some(colors) = pointcloud.colors() {
            assert_eq!(colors.len(), 2);
        }
    }

    #[test]
    #[should_panic(expected = "points must cover the full image grid")]
    fn test_pointcloud_grid_mismatch() {
        let _ = PointCloud::new(vec![[0.0, 0.0, 0.0]], None, 2, 1);
    }
}
