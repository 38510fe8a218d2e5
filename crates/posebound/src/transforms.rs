/// Compute the rotation matrix from an orientation quaternion.
///
/// # Arguments
///
/// * `quaternion` - The orientation quaternion as `[qw, qx, qy, qz]`.
///
/// # Returns
///
/// The rotation matrix.
///
/// PRECONDITION: quaternion is unit norm. No normalization is applied, so a
/// non-unit quaternion yields a non-orthonormal matrix.
///
/// Example:
///
/// ```
/// use posebound::transforms::quaternion_to_rotation_matrix;
///
/// let rotation = quaternion_to_rotation_matrix(&[1.0, 0.0, 0.0, 0.0]);
/// assert_eq!(rotation, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
/// ```
pub fn quaternion_to_rotation_matrix(quaternion: &[f64; 4]) -> [[f64; 3]; 3] {
    let [qw, qx, qy, qz] = *quaternion;

    let m00 = 1.0 - 2.0 * qy * qy - 2.0 * qz * qz;
    let m01 = 2.0 * qx * qy - 2.0 * qz * qw;
    let m02 = 2.0 * qx * qz + 2.0 * qy * qw;

    let m10 = 2.0 * qx * qy + 2.0 * qz * qw;
    let m11 = 1.0 - 2.0 * qx * qx - 2.0 * qz * qz;
    let m12 = 2.0 * qy * qz - 2.0 * qx * qw;

    let m20 = 2.0 * qx * qz - 2.0 * qy * qw;
    let m21 = 2.0 * qy * qz + 2.0 * qx * qw;
    let m22 = 1.0 - 2.0 * qx * qx - 2.0 * qy * qy;

    [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]]
}

/// Compose a quaternion and a translation into a 4x4 rigid transform.
///
/// The rotation matrix fills the top-left 3x3 block, the translation the top
/// of the last column, and the bottom row is the homogeneous `[0, 0, 0, 1]`.
///
/// # Arguments
///
/// * `rotation` - The orientation quaternion as `[qw, qx, qy, qz]`.
/// * `translation` - The translation vector.
///
/// # Returns
///
/// The row-major 4x4 transform matrix.
///
/// PRECONDITION: rotation is unit norm, see [`quaternion_to_rotation_matrix`].
pub fn pose_to_transform(rotation: &[f64; 4], translation: &[f64; 3]) -> [[f64; 4]; 4] {
    let r = quaternion_to_rotation_matrix(rotation);
    let [tx, ty, tz] = *translation;

    [
        [r[0][0], r[0][1], r[0][2], tx],
        [r[1][0], r[1][1], r[1][2], ty],
        [r[2][0], r[2][1], r[2][2], tz],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;

    #[test]
    fn test_identity_quaternion() {
        let transform = pose_to_transform(&[1.0, 0.0, 0.0, 0.0], &[0.5, -1.25, 3.0]);
        let expected = [
            [1.0, 0.0, 0.0, 0.5],
            [0.0, 1.0, 0.0, -1.25],
            [0.0, 0.0, 1.0, 3.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        assert_eq!(transform, expected);
    }

    #[test]
    fn test_quarter_turn_around_z() {
        let half = std::f64::consts::FRAC_PI_4;
        let rotation = quaternion_to_rotation_matrix(&[half.cos(), 0.0, 0.0, half.sin()]);
        let expected = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(rotation[i][j], expected[i][j], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_rotation_block_is_orthonormal() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let q: [f64; 4] = std::array::from_fn(|_| rng.random_range(-1.0..1.0));
            let norm = q.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm < 1e-6 {
                continue;
            }
            let q = q.map(|v| v / norm);
            let r = quaternion_to_rotation_matrix(&q);

            // R * R^T must be the identity for a unit quaternion
            for i in 0..3 {
                for j in 0..3 {
                    let dot = (0..3).map(|k| r[i][k] * r[j][k]).sum::<f64>();
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_relative_eq!(dot, expected, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_non_unit_quaternion_is_not_renormalized() {
        let r = quaternion_to_rotation_matrix(&[2.0, 0.0, 0.0, 0.0]);
        // a scaled identity quaternion must pass through unchanged
        assert_eq!(r, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let r = quaternion_to_rotation_matrix(&[0.0, 2.0, 0.0, 0.0]);
        assert_eq!(r[1][1], -7.0);
    }
}
