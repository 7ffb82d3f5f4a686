use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Marker line preceding the 3x3 matrix block in a calibration file.
pub const CAMERA_MATRIX_MARKER: &str = "Camera Matrix (K) in 3x3 format:";

/// Error types for the camera matrix reader.
#[derive(Debug, thiserror::Error)]
pub enum CameraMatrixError {
    /// Error reading the calibration file
    #[error("error reading the calibration file")]
    Io(#[from] std::io::Error),

    /// The marker line was not found anywhere in the file.
    #[error("camera matrix marker line not found")]
    MarkerNotFound,

    /// A matrix row is missing or does not hold three numeric fields.
    #[error("malformed matrix row {0}")]
    MalformedRow(usize),
}

/// Read a 3x3 pinhole camera matrix from a calibration text file.
///
/// The file must contain the literal marker line
/// `"Camera Matrix (K) in 3x3 format:"`; the three non-empty lines that
/// follow it are parsed as whitespace-separated rows of three floats each,
/// row-major.
///
/// # Arguments
///
/// * `path` - The path to the calibration text file.
///
/// # Returns
///
/// The 3x3 camera matrix, row-major.
pub fn read_camera_matrix_txt(path: impl AsRef<Path>) -> Result<[[f64; 3]; 3], CameraMatrixError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;

    let start = lines
        .iter()
        .position(|line| line.contains(CAMERA_MATRIX_MARKER))
        .ok_or(CameraMatrixError::MarkerNotFound)?
        + 1;

    let mut rows = lines[start..].iter().filter(|line| !line.trim().is_empty());

    let mut matrix = [[0.0; 3]; 3];
    for (i, row) in matrix.iter_mut().enumerate() {
        let line = rows.next().ok_or(CameraMatrixError::MalformedRow(i))?;

        let fields = line
            .split_whitespace()
            .map(|field| field.parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| CameraMatrixError::MalformedRow(i))?;

        if fields.len() != 3 {
            return Err(CameraMatrixError::MalformedRow(i));
        }

        row.copy_from_slice(&fields);
    }

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // the layout the capture tooling writes calibration files in
    const CALIBRATION_FILE: &str = "\
Camera Matrix (K):
fx: 383.432861
fy: 383.432861
cx: 322.729065
cy: 240.311951

Camera Matrix (K) in 3x3 format:
383.432861 0.000000 322.729065
0.000000 383.432861 240.311951
0.000000 0.000000 1.000000
";

    #[test]
    fn read_camera_matrix() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        file.write_all(CALIBRATION_FILE.as_bytes())?;

        let matrix = read_camera_matrix_txt(file.path())?;

        assert_eq!(matrix[0][0], 383.432861);
        assert_eq!(matrix[1][1], 383.432861);
        assert_eq!(matrix[0][2], 322.729065);
        assert_eq!(matrix[1][2], 240.311951);
        assert_eq!(matrix[2], [0.0, 0.0, 1.0]);

        Ok(())
    }

    #[test]
    fn marker_not_found() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"fx: 383.432861\nfy: 383.432861\n")?;

        let result = read_camera_matrix_txt(file.path());
        assert!(matches!(result, Err(CameraMatrixError::MarkerNotFound)));

        Ok(())
    }

    #[test]
    fn truncated_matrix_block() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        file.write_all(
            b"Camera Matrix (K) in 3x3 format:\n383.432861 0.0 322.729065\n0.0 383.432861 240.311951\n",
        )?;

        let result = read_camera_matrix_txt(file.path());
        assert!(matches!(result, Err(CameraMatrixError::MalformedRow(2))));

        Ok(())
    }

    #[test]
    fn non_numeric_field() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        file.write_all(
            b"Camera Matrix (K) in 3x3 format:\n383.432861 zero 322.729065\n0.0 383.432861 240.311951\n0.0 0.0 1.0\n",
        )?;

        let result = read_camera_matrix_txt(file.path());
        assert!(matches!(result, Err(CameraMatrixError::MalformedRow(0))));

        Ok(())
    }

    #[test]
    fn wrong_field_count() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        file.write_all(
            b"Camera Matrix (K) in 3x3 format:\n383.432861 0.0\n0.0 383.432861 240.311951\n0.0 0.0 1.0\n",
        )?;

        let result = read_camera_matrix_txt(file.path());
        assert!(matches!(result, Err(CameraMatrixError::MalformedRow(0))));

        Ok(())
    }

    #[test]
    fn missing_file() {
        let result = read_camera_matrix_txt("does_not_exist.txt");
        assert!(matches!(result, Err(CameraMatrixError::Io(_))));
    }
}
