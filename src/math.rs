//! Mathematical utilities for frame analysis

use nalgebra::{DMatrix, DVector, Matrix3, SMatrix, SVector};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;
pub type Mat3 = Matrix3<f64>;

/// 12x12 matrix for member stiffness
pub type Mat12 = SMatrix<f64, 12, 12>;
/// 12-element vector for member forces/displacements
pub type Vec12 = SVector<f64, 12>;

/// Compute the 3x3 direction cosine matrix for a 3D frame member
///
/// Rows are the member's local x, y and z axes expressed in global
/// coordinates, following PyNite's convention:
/// - Vertical members: local y in the XY plane (-X for members pointing up,
///   +X for members pointing down), local z = global Z
/// - Horizontal members: local y = global Y (up), local z = x cross y
/// - Inclined members: local z horizontal and perpendicular to x,
///   local y = z cross x
pub fn member_rotation_matrix(i_node: &[f64; 3], j_node: &[f64; 3], rotation: f64) -> Mat3 {
    let dx = j_node[0] - i_node[0];
    let dy = j_node[1] - i_node[1];
    let dz = j_node[2] - i_node[2];

    let length = (dx * dx + dy * dy + dz * dz).sqrt();

    // Zero-length members are rejected during model preparation
    debug_assert!(length > 1e-10, "member has zero length");

    // Direction cosines for local x-axis (along member)
    let x = [dx / length, dy / length, dz / length];

    let (y, z) = if (x[0].abs() < 1e-10) && (x[2].abs() < 1e-10) {
        // Vertical member (X and Z components are zero, only Y component)
        if x[1] > 0.0 {
            // Pointing up: y = [-1, 0, 0], z = [0, 0, 1]
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0])
        } else {
            // Pointing down: y = [1, 0, 0], z = [0, 0, 1]
            ([1.0, 0.0, 0.0], [0.0, 0.0, 1.0])
        }
    } else if dy.abs() < 1e-10 {
        // Horizontal member (no Y component): y = global Y, z = x cross y
        let y = [0.0, 1.0, 0.0];
        let z_unnorm = [
            x[1] * y[2] - x[2] * y[1],
            x[2] * y[0] - x[0] * y[2],
            x[0] * y[1] - x[1] * y[0],
        ];
        let z_len = (z_unnorm[0].powi(2) + z_unnorm[1].powi(2) + z_unnorm[2].powi(2)).sqrt();
        let z = [z_unnorm[0] / z_len, z_unnorm[1] / z_len, z_unnorm[2] / z_len];
        (y, z)
    } else {
        // Inclined member: z perpendicular to x with horizontal direction
        let proj = [dx, 0.0, dz];

        let z_unnorm = if x[1] > 0.0 {
            // Member going upward: z = proj cross x
            [
                proj[1] * x[2] - proj[2] * x[1],
                proj[2] * x[0] - proj[0] * x[2],
                proj[0] * x[1] - proj[1] * x[0],
            ]
        } else {
            // Member going downward: z = x cross proj
            [
                x[1] * proj[2] - x[2] * proj[1],
                x[2] * proj[0] - x[0] * proj[2],
                x[0] * proj[1] - x[1] * proj[0],
            ]
        };
        let z_len = (z_unnorm[0].powi(2) + z_unnorm[1].powi(2) + z_unnorm[2].powi(2)).sqrt();
        let z = [z_unnorm[0] / z_len, z_unnorm[1] / z_len, z_unnorm[2] / z_len];

        // y = z cross x
        let y = [
            z[1] * x[2] - z[2] * x[1],
            z[2] * x[0] - z[0] * x[2],
            z[0] * x[1] - z[1] * x[0],
        ];
        let y_len = (y[0].powi(2) + y[1].powi(2) + y[2].powi(2)).sqrt();
        let y = [y[0] / y_len, y[1] / y_len, y[2] / y_len];

        (y, z)
    };

    // Apply member rotation about local x-axis
    let (y, z) = if rotation.abs() > 1e-10 {
        let cos_r = rotation.cos();
        let sin_r = rotation.sin();

        let y_rot = [
            y[0] * cos_r + z[0] * sin_r,
            y[1] * cos_r + z[1] * sin_r,
            y[2] * cos_r + z[2] * sin_r,
        ];
        let z_rot = [
            -y[0] * sin_r + z[0] * cos_r,
            -y[1] * sin_r + z[1] * cos_r,
            -y[2] * sin_r + z[2] * cos_r,
        ];
        (y_rot, z_rot)
    } else {
        (y, z)
    };

    Mat3::new(
        x[0], x[1], x[2], //
        y[0], y[1], y[2], //
        z[0], z[1], z[2],
    )
}

/// Compute the 12x12 transformation matrix for a 3D frame member
///
/// Four copies of the direction cosine matrix on the block diagonal,
/// mapping global nodal DOFs to member-local DOFs.
pub fn member_transformation_matrix(i_node: &[f64; 3], j_node: &[f64; 3], rotation: f64) -> Mat12 {
    let r = member_rotation_matrix(i_node, j_node, rotation);

    let mut t = Mat12::zeros();
    for i in 0..4 {
        let offset = i * 3;
        for row in 0..3 {
            for col in 0..3 {
                t[(offset + row, offset + col)] = r[(row, col)];
            }
        }
    }

    t
}

/// Compute the local stiffness matrix for a 3D frame element
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `g` - Shear modulus
/// * `a` - Cross-sectional area
/// * `iy` - Moment of inertia about local y-axis
/// * `iz` - Moment of inertia about local z-axis
/// * `j` - Torsional constant
/// * `length` - Member length
pub fn member_local_stiffness(
    e: f64,
    g: f64,
    a: f64,
    iy: f64,
    iz: f64,
    j: f64,
    length: f64,
) -> Mat12 {
    let l = length;
    let l2 = l * l;
    let l3 = l2 * l;

    let ea_l = e * a / l;
    let gj_l = g * j / l;

    let eiy_l3 = e * iy / l3;
    let eiy_l2 = e * iy / l2;
    let eiy_l = e * iy / l;

    let eiz_l3 = e * iz / l3;
    let eiz_l2 = e * iz / l2;
    let eiz_l = e * iz / l;

    #[rustfmt::skip]
    let data = [
        // Row 0: axial at i
        ea_l,      0.0,          0.0,           0.0,    0.0,           0.0,          -ea_l,     0.0,          0.0,           0.0,    0.0,           0.0,
        // Row 1: shear Fy at i
        0.0,       12.0*eiz_l3,  0.0,           0.0,    0.0,           6.0*eiz_l2,   0.0,       -12.0*eiz_l3, 0.0,           0.0,    0.0,           6.0*eiz_l2,
        // Row 2: shear Fz at i
        0.0,       0.0,          12.0*eiy_l3,   0.0,    -6.0*eiy_l2,   0.0,          0.0,       0.0,          -12.0*eiy_l3,  0.0,    -6.0*eiy_l2,   0.0,
        // Row 3: torsion at i
        0.0,       0.0,          0.0,           gj_l,   0.0,           0.0,          0.0,       0.0,          0.0,           -gj_l,  0.0,           0.0,
        // Row 4: moment My at i
        0.0,       0.0,          -6.0*eiy_l2,   0.0,    4.0*eiy_l,     0.0,          0.0,       0.0,          6.0*eiy_l2,    0.0,    2.0*eiy_l,     0.0,
        // Row 5: moment Mz at i
        0.0,       6.0*eiz_l2,   0.0,           0.0,    0.0,           4.0*eiz_l,    0.0,       -6.0*eiz_l2,  0.0,           0.0,    0.0,           2.0*eiz_l,
        // Row 6: axial at j
        -ea_l,     0.0,          0.0,           0.0,    0.0,           0.0,          ea_l,      0.0,          0.0,           0.0,    0.0,           0.0,
        // Row 7: shear Fy at j
        0.0,       -12.0*eiz_l3, 0.0,           0.0,    0.0,           -6.0*eiz_l2,  0.0,       12.0*eiz_l3,  0.0,           0.0,    0.0,           -6.0*eiz_l2,
        // Row 8: shear Fz at j
        0.0,       0.0,          -12.0*eiy_l3,  0.0,    6.0*eiy_l2,    0.0,          0.0,       0.0,          12.0*eiy_l3,   0.0,    6.0*eiy_l2,    0.0,
        // Row 9: torsion at j
        0.0,       0.0,          0.0,           -gj_l,  0.0,           0.0,          0.0,       0.0,          0.0,           gj_l,   0.0,           0.0,
        // Row 10: moment My at j
        0.0,       0.0,          -6.0*eiy_l2,   0.0,    2.0*eiy_l,     0.0,          0.0,       0.0,          6.0*eiy_l2,    0.0,    4.0*eiy_l,     0.0,
        // Row 11: moment Mz at j
        0.0,       6.0*eiz_l2,   0.0,           0.0,    0.0,           2.0*eiz_l,    0.0,       -6.0*eiz_l2,  0.0,           0.0,    0.0,           4.0*eiz_l,
    ];

    Mat12::from_row_slice(&data)
}

/// Compute fixed end reactions for a full-span distributed load that varies
/// linearly from `w1` at the i-node to `w2` at the j-node
///
/// The load is split into a uniform part (`w1`) and a triangular part
/// peaking at the j-node (`w2 - w1`); both use the standard fixed-fixed
/// beam formulas.
///
/// # Arguments
/// * `w1` - Intensity at the i-node (force per unit length, local coords)
/// * `w2` - Intensity at the j-node
/// * `length` - Member length
/// * `axis` - Local axis index (0=x axial, 1=y, 2=z)
pub fn fer_linear_load(w1: f64, w2: f64, length: f64, axis: usize) -> Vec12 {
    let l = length;
    let l2 = l * l;

    let wu = w1; // uniform part
    let wt = w2 - w1; // triangular part, zero at i, peak at j

    let mut fer = Vec12::zeros();

    match axis {
        0 => {
            // Axial load
            fer[0] = -(wu * l / 2.0 + wt * l / 6.0);
            fer[6] = -(wu * l / 2.0 + wt * l / 3.0);
        }
        1 => {
            // Load in local y direction
            fer[1] = -(wu * l / 2.0 + 3.0 * wt * l / 20.0);
            fer[5] = -(wu * l2 / 12.0 + wt * l2 / 30.0);
            fer[7] = -(wu * l / 2.0 + 7.0 * wt * l / 20.0);
            fer[11] = wu * l2 / 12.0 + wt * l2 / 20.0;
        }
        2 => {
            // Load in local z direction
            fer[2] = -(wu * l / 2.0 + 3.0 * wt * l / 20.0);
            fer[4] = wu * l2 / 12.0 + wt * l2 / 30.0;
            fer[8] = -(wu * l / 2.0 + 7.0 * wt * l / 20.0);
            fer[10] = -(wu * l2 / 12.0 + wt * l2 / 20.0);
        }
        _ => {}
    }

    fer
}

/// Compute fixed end reactions for a point load
///
/// # Arguments
/// * `p` - Load magnitude (local coords)
/// * `a` - Distance from i-node to load
/// * `length` - Member length
/// * `axis` - Local axis index (0=x axial, 1=y, 2=z)
pub fn fer_point_load(p: f64, a: f64, length: f64, axis: usize) -> Vec12 {
    let l = length;
    let b = l - a;
    let l2 = l * l;
    let l3 = l2 * l;

    let mut fer = Vec12::zeros();

    match axis {
        0 => {
            // Axial load
            fer[0] = -p * b / l;
            fer[6] = -p * a / l;
        }
        1 => {
            // Load in local y direction
            fer[1] = -p * b * b * (3.0 * a + b) / l3;
            fer[5] = -p * a * b * b / l2;
            fer[7] = -p * a * a * (a + 3.0 * b) / l3;
            fer[11] = p * a * a * b / l2;
        }
        2 => {
            // Load in local z direction
            fer[2] = -p * b * b * (3.0 * a + b) / l3;
            fer[4] = p * a * b * b / l2;
            fer[8] = -p * a * a * (a + 3.0 * b) / l3;
            fer[10] = -p * a * a * b / l2;
        }
        _ => {}
    }

    fer
}

/// Solve a linear system using LU decomposition
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    a.clone().lu().solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_matrix_horizontal() {
        let i = [0.0, 0.0, 0.0];
        let j = [10.0, 0.0, 0.0];
        let r = member_rotation_matrix(&i, &j, 0.0);

        // For a horizontal member along X (PyNite convention):
        // local x = global X, local y = global Y, local z = global Z
        assert_relative_eq!(r[(0, 0)], 1.0, epsilon = 1e-10);
        assert_relative_eq!(r[(1, 1)], 1.0, epsilon = 1e-10);
        assert_relative_eq!(r[(2, 2)], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_rotation_matrix_vertical() {
        let i = [0.0, 0.0, 0.0];
        let j = [0.0, 10.0, 0.0];
        let r = member_rotation_matrix(&i, &j, 0.0);

        // For a vertical member pointing up (PyNite convention):
        // local x = global Y, local y = -global X, local z = global Z
        assert_relative_eq!(r[(0, 1)], 1.0, epsilon = 1e-10);
        assert_relative_eq!(r[(1, 0)], -1.0, epsilon = 1e-10);
        assert_relative_eq!(r[(2, 2)], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_rotation_matrix_member_along_z() {
        let i = [0.0, 0.0, 0.0];
        let j = [0.0, 0.0, 7.0];
        let r = member_rotation_matrix(&i, &j, 0.0);

        // Horizontal member along Z: local y stays global Y,
        // local z = x cross y = -global X
        assert_relative_eq!(r[(0, 2)], 1.0, epsilon = 1e-10);
        assert_relative_eq!(r[(1, 1)], 1.0, epsilon = 1e-10);
        assert_relative_eq!(r[(2, 0)], -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_local_stiffness_symmetry() {
        let k = member_local_stiffness(200e9, 77e9, 0.01, 1e-4, 2e-4, 1e-5, 10.0);

        for i in 0..12 {
            for j in 0..12 {
                assert_relative_eq!(k[(i, j)], k[(j, i)], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_fer_uniform_matches_hand_formulas() {
        let w = -10000.0;
        let l = 8.0;
        let fer = fer_linear_load(w, w, l, 1);

        assert_relative_eq!(fer[1], -w * l / 2.0, epsilon = 1e-9);
        assert_relative_eq!(fer[5], -w * l * l / 12.0, epsilon = 1e-9);
        assert_relative_eq!(fer[7], fer[1], epsilon = 1e-9);
        assert_relative_eq!(fer[11], -fer[5], epsilon = 1e-9);
    }

    #[test]
    fn test_fer_triangular_matches_hand_formulas() {
        // Zero at i, peak w at j
        let w = 6000.0;
        let l = 10.0;
        let fer = fer_linear_load(0.0, w, l, 1);

        assert_relative_eq!(fer[1], -3.0 * w * l / 20.0, epsilon = 1e-9);
        assert_relative_eq!(fer[7], -7.0 * w * l / 20.0, epsilon = 1e-9);
        assert_relative_eq!(fer[5], -w * l * l / 30.0, epsilon = 1e-9);
        assert_relative_eq!(fer[11], w * l * l / 20.0, epsilon = 1e-9);

        // Shears must balance the load resultant
        assert_relative_eq!(fer[1] + fer[7], -w * l / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fer_point_load_midspan() {
        let p = -10000.0;
        let l = 6.0;
        let fer = fer_point_load(p, l / 2.0, l, 1);

        assert_relative_eq!(fer[1], -p / 2.0, epsilon = 1e-9);
        assert_relative_eq!(fer[7], fer[1], epsilon = 1e-9);
        assert_relative_eq!(fer[5], -p * l / 8.0, epsilon = 1e-9);
        assert_relative_eq!(fer[11], -fer[5], epsilon = 1e-9);
    }
}
