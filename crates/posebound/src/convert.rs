use std::path::{Path, PathBuf};

use crate::bounds::{depth_bounds, BoundsError};
use crate::io::artifact::{write_pose_bounds, ArtifactError, PoseBounds};
use crate::io::colmap::{read_images_txt, read_points3d_txt, ColmapError};
use crate::transforms::pose_to_transform;

/// File names a sparse reconstruction directory is expected to contain.
const REQUIRED_FILES: [&str; 3] = ["cameras.txt", "images.txt", "points3D.txt"];

/// Error types for the conversion pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The sparse directory or one of its required files does not exist
    #[error("missing reconstruction input(s): {}", format_paths(.0))]
    MissingInput(Vec<PathBuf>),

    /// Failed to parse a reconstruction file
    #[error("failed to parse the sparse reconstruction. {0}")]
    Colmap(#[from] ColmapError),

    /// Failed to estimate the scene depth bounds
    #[error("failed to estimate the scene depth bounds. {0}")]
    Bounds(#[from] BoundsError),

    /// Failed to write the artifact
    #[error("failed to write the artifact. {0}")]
    Artifact(#[from] ArtifactError),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read a sparse reconstruction directory and compute its pose bounds.
///
/// This is the pure core of the tool: directory in, artifact out, nothing
/// written to disk. Every front end goes through this one function.
///
/// # Arguments
///
/// * `sparse_dir` - Directory containing `cameras.txt`, `images.txt` and
///   `points3D.txt`.
///
/// # Returns
///
/// The pose bounds of the reconstruction.
pub fn read_sparse_dir(sparse_dir: impl AsRef<Path>) -> Result<PoseBounds, ConvertError> {
    let sparse_dir = sparse_dir.as_ref();
    if !sparse_dir.is_dir() {
        return Err(ConvertError::MissingInput(vec![sparse_dir.to_path_buf()]));
    }

    // verify all expected inputs up front and report every missing path
    let missing = REQUIRED_FILES
        .iter()
        .map(|name| sparse_dir.join(name))
        .filter(|path| !path.exists())
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(ConvertError::MissingInput(missing));
    }

    let images = read_images_txt(sparse_dir.join("images.txt"))?;
    log::debug!("loaded {} camera poses", images.len());

    let poses = images
        .iter()
        .map(|image| pose_to_transform(&image.rotation, &image.translation))
        .collect::<Vec<_>>();

    let points = read_points3d_txt(sparse_dir.join("points3D.txt"))?;
    let positions = points.iter().map(|point| point.xyz).collect::<Vec<_>>();
    let bounds = depth_bounds(&positions)?;
    log::debug!("depth bounds over {} points: {:?}", points.len(), bounds);

    Ok(PoseBounds { poses, bounds })
}

/// Convert a sparse reconstruction directory into a pose bounds artifact file.
///
/// Runs [`read_sparse_dir`] and persists the result at `output_file`. No
/// file is created when loading or bounds estimation fails.
///
/// # Arguments
///
/// * `sparse_dir` - Directory containing the sparse reconstruction.
/// * `output_file` - Destination path of the artifact.
///
/// # Returns
///
/// The artifact that was written.
pub fn generate_pose_bounds(
    sparse_dir: impl AsRef<Path>,
    output_file: impl AsRef<Path>,
) -> Result<PoseBounds, ConvertError> {
    let pose_bounds = read_sparse_dir(sparse_dir)?;
    write_pose_bounds(&output_file, &pose_bounds)?;
    log::info!(
        "wrote {} poses to {}",
        pose_bounds.poses.len(),
        output_file.as_ref().display()
    );
    Ok(pose_bounds)
}
