use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error types for the artifact module.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// Failed to read or write the artifact file
    #[error("failed to access the artifact file. {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode the artifact
    #[error("failed to encode the artifact. {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// Failed to decode the artifact
    #[error("failed to decode the artifact. {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

/// The persisted result of a pose bounds conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct PoseBounds {
    /// Rigid transform of each registered image, in input file order
    pub poses: Vec<[[f64; 4]; 4]>,
    /// Near and far scene depth bounds
    pub bounds: [f64; 2],
}

/// Write a pose bounds artifact to the given file path.
///
/// The encoded bytes are staged to a sibling file and renamed into place, so
/// a failed write cannot leave a truncated artifact behind. An existing file
/// at `file_path` is overwritten.
///
/// # Arguments
///
/// * `file_path` - The destination path of the artifact.
/// * `pose_bounds` - The artifact to serialize.
pub fn write_pose_bounds(
    file_path: impl AsRef<Path>,
    pose_bounds: &PoseBounds,
) -> Result<(), ArtifactError> {
    let file_path = file_path.as_ref();
    let buf = bincode::encode_to_vec(pose_bounds, bincode::config::standard())?;

    let staging_path = file_path.with_extension("part");
    std::fs::write(&staging_path, &buf)?;
    std::fs::rename(&staging_path, file_path)?;

    Ok(())
}

/// Read a pose bounds artifact from the given file path.
///
/// # Arguments
///
/// * `file_path` - The path of a file written by [`write_pose_bounds`].
///
/// # Returns
///
/// The deserialized artifact.
pub fn read_pose_bounds(file_path: impl AsRef<Path>) -> Result<PoseBounds, ArtifactError> {
    let buf = std::fs::read(file_path)?;
    let (pose_bounds, _) = bincode::decode_from_slice(&buf, bincode::config::standard())?;
    Ok(pose_bounds)
}
