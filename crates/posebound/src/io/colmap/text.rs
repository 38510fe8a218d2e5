use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use super::{ImagePose, Point3d};

/// Error types for the COLMAP module.
#[derive(Debug, thiserror::Error)]
pub enum ColmapError {
    /// Error reading or writing file
    #[error("error reading or writing file. {0}")]
    Io(#[from] std::io::Error),

    /// A record line with missing or unparseable fields
    #[error("{path}:{line}: {reason}")]
    MalformedRecord {
        /// File the record was read from
        path: String,
        /// 1-based line number of the record
        line: usize,
        /// Why the record could not be parsed
        reason: String,
    },
}

/// Read the images.txt file and return the extrinsics of each registered image.
///
/// Lines starting with `#` and blank lines are skipped. Every remaining line
/// is one record with at least 8 whitespace-separated fields:
/// `IMAGE_ID, QW, QX, QY, QZ, TX, TY, TZ, ...`
/// Fields after the translation (camera id, image name) are ignored.
///
/// # Arguments
///
/// * `path` - The path to the images.txt file.
///
/// # Returns
///
/// A vector of ImagePose structs, in file order.
pub fn read_images_txt(path: impl AsRef<Path>) -> Result<Vec<ImagePose>, ColmapError> {
    let path = path.as_ref();

    // open the file and create a buffered reader
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut poses = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if !is_record_line(&line) {
            continue;
        }
        let pose = parse_image_line(&line).map_err(|reason| malformed(path, idx, reason))?;
        poses.push(pose);
    }

    Ok(poses)
}

/// Read the points3D.txt file and return the position of each reconstructed point.
///
/// Same skip convention as [`read_images_txt`]. Every remaining line is one
/// record with at least 4 whitespace-separated fields:
/// `POINT3D_ID, X, Y, Z, ...`
/// Fields after the position (color, reprojection error, track) are ignored.
///
/// # Arguments
///
/// * `path` - The path to the points3D.txt file.
///
/// # Returns
///
/// A vector of Point3d structs, in file order.
pub fn read_points3d_txt(path: impl AsRef<Path>) -> Result<Vec<Point3d>, ColmapError> {
    let path = path.as_ref();

    // open the file and create a buffered reader
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if !is_record_line(&line) {
            continue;
        }
        let point = parse_point3d_line(&line).map_err(|reason| malformed(path, idx, reason))?;
        points.push(point);
    }

    Ok(points)
}

/// Comment lines and blank lines carry no record.
fn is_record_line(line: &str) -> bool {
    !line.starts_with('#') && !line.trim().is_empty()
}

fn malformed(path: &Path, line_idx: usize, reason: String) -> ColmapError {
    ColmapError::MalformedRecord {
        path: path.display().to_string(),
        line: line_idx + 1,
        reason,
    }
}

/// Utility function for parsing COLMAP numeric fields
fn parse_field(s: &str) -> Result<f64, String> {
    s.parse::<f64>().map_err(|e| format!("{}: {}", s, e))
}

/// Parse an image record line and return an ImagePose struct.
/// NOTE: trailing fields past the translation are not interpreted.
fn parse_image_line(line: &str) -> Result<ImagePose, String> {
    // split the line into parts by whitespace
    let parts = line.split_whitespace().collect::<Vec<_>>();

    if parts.len() < 8 {
        return Err(format!("expected at least 8 fields, got {}", parts.len()));
    }

    Ok(ImagePose {
        rotation: parts[1..5]
            .iter()
            .map(|s| parse_field(s))
            .collect::<Result<Vec<_>, _>>()?
            .try_into()
            .map_err(|_| "invalid number of rotation fields".to_string())?,
        translation: parts[5..8]
            .iter()
            .map(|s| parse_field(s))
            .collect::<Result<Vec<_>, _>>()?
            .try_into()
            .map_err(|_| "invalid number of translation fields".to_string())?,
    })
}

/// Parse a point record line and return a Point3d struct.
fn parse_point3d_line(line: &str) -> Result<Point3d, String> {
    // split the line into parts by whitespace
    let parts = line.split_whitespace().collect::<Vec<_>>();

    if parts.len() < 4 {
        return Err(format!("expected at least 4 fields, got {}", parts.len()));
    }

    Ok(Point3d {
        xyz: parts[1..4]
            .iter()
            .map(|s| parse_field(s))
            .collect::<Result<Vec<_>, _>>()?
            .try_into()
            .map_err(|_| "invalid number of xyz coordinates".to_string())?,
    })
}
