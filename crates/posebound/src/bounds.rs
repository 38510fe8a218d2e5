/// Error types for the bounds module.
#[derive(Debug, thiserror::Error)]
pub enum BoundsError {
    /// The point cloud contains no points
    #[error("cannot compute depth bounds from an empty point cloud")]
    EmptyPointCloud,
}

/// Compute the near and far depth bounds of a sparse point cloud.
///
/// The distance of each point is measured from the world origin, not from
/// any camera, so the result is a depth proxy only when the reconstruction
/// is centered near the camera cluster.
///
/// # Arguments
///
/// * `points` - A set of 3D points.
///
/// # Returns
///
/// The `[near, far]` pair, i.e. the minimum and maximum point distance.
///
/// Example:
///
/// ```
/// use posebound::bounds::depth_bounds;
///
/// let points = vec![[1.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 2.0, 0.0]];
/// let bounds = depth_bounds(&points).unwrap();
/// assert_eq!(bounds, [1.0, 3.0]);
/// ```
pub fn depth_bounds(points: &[[f64; 3]]) -> Result<[f64; 2], BoundsError> {
    // min/max over zero distances is undefined
    if points.is_empty() {
        return Err(BoundsError::EmptyPointCloud);
    }

    let mut near = f64::INFINITY;
    let mut far = f64::NEG_INFINITY;
    for point in points {
        let dist = (point[0] * point[0] + point[1] * point[1] + point[2] * point[2]).sqrt();
        near = near.min(dist);
        far = far.max(dist);
    }

    Ok([near, far])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_depth_bounds() -> Result<(), BoundsError> {
        let points = vec![[1.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 2.0, 0.0]];
        let bounds = depth_bounds(&points)?;
        assert_eq!(bounds, [1.0, 3.0]);
        Ok(())
    }

    #[test]
    fn test_depth_bounds_single_point() -> Result<(), BoundsError> {
        let bounds = depth_bounds(&[[3.0, 4.0, 0.0]])?;
        assert_relative_eq!(bounds[0], 5.0);
        assert_relative_eq!(bounds[1], 5.0);
        Ok(())
    }

    #[test]
    fn test_depth_bounds_empty() {
        let result = depth_bounds(&[]);
        assert!(matches!(result, Err(BoundsError::EmptyPointCloud)));
    }
}
