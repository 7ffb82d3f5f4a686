use thiserror::Error;

/// Error types for camera intrinsic parameters.
#[derive(Error, Debug, PartialEq)]
pub enum CameraError {
    /// Focal lengths must be strictly positive.
    #[error("Invalid focal length (fx: {0}, fy: {1}), must be > 0")]
    InvalidFocalLength(f64, f64),
}

/// Represents the intrinsic parameters of a pinhole camera.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraIntrinsic {
    /// The focal length in the x direction
    pub fx: f64,
    /// The focal length in the y direction
    pub fy: f64,
    /// The x coordinate of the principal point
    pub cx: f64,
    /// The y coordinate of the principal point
    pub cy: f64,
}

impl CameraIntrinsic {
    /// Create intrinsic parameters from focal lengths and principal point.
    ///
    /// # Errors
    ///
    /// Fails if either focal length is not strictly positive.
    pub fn new(fx: f64, fy: f64, cx: f64, cy: f64) -> Result<Self, CameraError> {
        if fx <= 0.0 || fy <= 0.0 {
            return Err(CameraError::InvalidFocalLength(fx, fy));
        }

        Ok(Self { fx, fy, cx, cy })
    }

    /// Create intrinsic parameters from a canonical 3x3 pinhole matrix.
    ///
    /// The matrix layout is `[[fx, 0, cx], [0, fy, cy], [0, 0, 1]]`,
    /// row-major.
    pub fn from_matrix(matrix: &[[f64; 3]; 3]) -> Result<Self, CameraError> {
        Self::new(matrix[0][0], matrix[1][1], matrix[0][2], matrix[1][2])
    }

    /// Return the canonical 3x3 camera matrix, row-major.
    pub fn camera_matrix(&self) -> [[f64; 3]; 3] {
        [
            [self.fx, 0.0, self.cx],
            [0.0, self.fy, self.cy],
            [0.0, 0.0, 1.0],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_matrix_roundtrip() -> Result<(), CameraError> {
        let matrix = [
            [383.432861, 0.0, 322.729065],
            [0.0, 383.432861, 240.311951],
            [0.0, 0.0, 1.0],
        ];

        let intrinsic = CameraIntrinsic::from_matrix(&matrix)?;
        assert_eq!(intrinsic.fx, 383.432861);
        assert_eq!(intrinsic.fy, 383.432861);
        assert_eq!(intrinsic.cx, 322.729065);
        assert_eq!(intrinsic.cy, 240.311951);

        assert_eq!(intrinsic.camera_matrix(), matrix);

        Ok(())
    }

    #[test]
    fn camera_rejects_non_positive_focal_length() {
        let result = CameraIntrinsic::new(0.0, 383.432861, 322.729065, 240.311951);
        assert_eq!(
            result,
            Err(CameraError::InvalidFocalLength(0.0, 383.432861))
        );

        let result = CameraIntrinsic::new(383.432861, -1.0, 322.729065, 240.311951);
        assert!(result.is_err());
    }
}
