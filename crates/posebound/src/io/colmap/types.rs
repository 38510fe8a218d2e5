/// Extrinsics of a registered image in the Colmap system.
#[derive(Debug, Clone)]
pub struct ImagePose {
    /// Orientation quaternion
    pub rotation: [f64; 4], // qw, qx, qy, qz
    /// Translation
    pub translation: [f64; 3], // x, y, z
}

/// Position of a reconstructed 3D point in the Colmap system.
#[derive(Debug, Clone)]
pub struct Point3d {
    /// x, y, z coordinates
    pub xyz: [f64; 3],
}
