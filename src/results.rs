//! Result types for frame analysis

use serde::{Deserialize, Serialize};

use crate::error::{FrameError, FrameResult};

/// Number of sample points used by the max-value scans (40 intervals)
///
/// The scan is a fixed-resolution linear sweep, not a true extremum finder:
/// a peak falling between two samples is reported at the nearest sample.
pub const SCAN_SAMPLES: usize = 41;

/// Displacement results at a node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Displacement in X direction
    pub dx: f64,
    /// Displacement in Y direction
    pub dy: f64,
    /// Displacement in Z direction
    pub dz: f64,
    /// Rotation about X axis
    pub rx: f64,
    /// Rotation about Y axis
    pub ry: f64,
    /// Rotation about Z axis
    pub rz: f64,
}

impl NodeDisplacement {
    /// Create from array [DX, DY, DZ, RX, RY, RZ]
    pub fn from_array(arr: [f64; 6]) -> Self {
        Self {
            dx: arr[0],
            dy: arr[1],
            dz: arr[2],
            rx: arr[3],
            ry: arr[4],
            rz: arr[5],
        }
    }

    /// Get translation magnitude
    pub fn translation_magnitude(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2) + self.dz.powi(2)).sqrt()
    }
}

/// Reaction forces at a supported node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction force in X direction
    pub fx: f64,
    /// Reaction force in Y direction
    pub fy: f64,
    /// Reaction force in Z direction
    pub fz: f64,
    /// Reaction moment about X axis
    pub mx: f64,
    /// Reaction moment about Y axis
    pub my: f64,
    /// Reaction moment about Z axis
    pub mz: f64,
}

impl Reactions {
    /// Create from array [FX, FY, FZ, MX, MY, MZ]
    pub fn from_array(arr: [f64; 6]) -> Self {
        Self {
            fx: arr[0],
            fy: arr[1],
            fz: arr[2],
            mx: arr[3],
            my: arr[4],
            mz: arr[5],
        }
    }

    /// Get total force magnitude
    pub fn force_magnitude(&self) -> f64 {
        (self.fx.powi(2) + self.fy.powi(2) + self.fz.powi(2)).sqrt()
    }
}

/// The six internal force/moment components at a member cross-section,
/// expressed in the member's local coordinate frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MemberForces {
    /// Axial force (positive = tension)
    pub axial: f64,
    /// Shear force in local y direction
    pub shear_y: f64,
    /// Shear force in local z direction
    pub shear_z: f64,
    /// Torsion about local x axis
    pub torsion: f64,
    /// Bending moment about local y axis
    pub moment_y: f64,
    /// Bending moment about local z axis
    pub moment_z: f64,
}

impl MemberForces {
    /// Create from local end force array, taking the i-node components
    pub fn from_i_node_forces(forces: &[f64; 12]) -> Self {
        Self {
            axial: -forces[0],
            shear_y: forces[1],
            shear_z: forces[2],
            torsion: -forces[3],
            moment_y: forces[4],
            moment_z: forces[5],
        }
    }

    /// Create from local end force array, taking the j-node components
    pub fn from_j_node_forces(forces: &[f64; 12]) -> Self {
        Self {
            axial: forces[6],
            shear_y: -forces[7],
            shear_z: -forces[8],
            torsion: forces[9],
            moment_y: forces[10],
            moment_z: forces[11],
        }
    }
}

/// A point load resolved into one member-local component
#[derive(Debug, Clone, Copy)]
pub(crate) struct LocalPointLoad {
    /// Local axis index (0=x, 1=y, 2=z)
    pub axis: usize,
    /// Factored magnitude
    pub magnitude: f64,
    /// Distance from the i-node
    pub position: f64,
}

/// Internal force fields along one member for one load combination
///
/// Built from the member's local end forces plus the factored loads applied
/// between its ends, so the six components can be evaluated at any position
/// x ∈ [0, L] measured from the i-node. Valid only for the solve that
/// produced it; the model invalidates access to new instances on mutation.
#[derive(Debug, Clone)]
pub struct MemberInternalForces {
    length: f64,
    /// Local end forces [Fx_i..Mz_i, Fx_j..Mz_j]
    end_forces: [f64; 12],
    /// Linear distributed load intensity per local axis: w(x) = w0 + slope * x
    w0: [f64; 3],
    slope: [f64; 3],
    point_loads: Vec<LocalPointLoad>,
}

impl MemberInternalForces {
    pub(crate) fn new(
        length: f64,
        end_forces: [f64; 12],
        w0: [f64; 3],
        slope: [f64; 3],
        point_loads: Vec<LocalPointLoad>,
    ) -> Self {
        Self {
            length,
            end_forces,
            w0,
            slope,
            point_loads,
        }
    }

    /// Member length
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Validate a query position, clamping values within tolerance of the ends
    fn check_position(&self, x: f64) -> FrameResult<f64> {
        let tol = 1e-9 * self.length.max(1.0);
        if x < -tol || x > self.length + tol {
            return Err(FrameError::OutOfRange {
                position: x,
                length: self.length,
            });
        }
        Ok(x.clamp(0.0, self.length))
    }

    /// Integral of the distributed load on `axis` from 0 to x
    fn load_sum(&self, axis: usize, x: f64) -> f64 {
        let mut sum = self.w0[axis] * x + self.slope[axis] * x * x / 2.0;
        for p in &self.point_loads {
            if p.axis == axis && p.position <= x {
                sum += p.magnitude;
            }
        }
        sum
    }

    /// First moment of the distributed load on `axis` about position x
    fn load_moment(&self, axis: usize, x: f64) -> f64 {
        let mut sum = self.w0[axis] * x * x / 2.0 + self.slope[axis] * x * x * x / 6.0;
        for p in &self.point_loads {
            if p.axis == axis && p.position <= x {
                sum += p.magnitude * (x - p.position);
            }
        }
        sum
    }

    fn axial_at(&self, x: f64) -> f64 {
        -self.end_forces[0] - self.load_sum(0, x)
    }

    fn shear_y_at(&self, x: f64) -> f64 {
        -self.end_forces[1] - self.load_sum(1, x)
    }

    fn shear_z_at(&self, x: f64) -> f64 {
        -self.end_forces[2] - self.load_sum(2, x)
    }

    fn torque_at(&self, _x: f64) -> f64 {
        // No torsional member loads are supported, so torque is constant
        -self.end_forces[3]
    }

    fn moment_y_at(&self, x: f64) -> f64 {
        self.end_forces[4] + self.end_forces[2] * x + self.load_moment(2, x)
    }

    fn moment_z_at(&self, x: f64) -> f64 {
        self.end_forces[5] - self.end_forces[1] * x - self.load_moment(1, x)
    }

    /// Axial force at position x (positive = tension)
    pub fn axial(&self, x: f64) -> FrameResult<f64> {
        Ok(self.axial_at(self.check_position(x)?))
    }

    /// Shear force in local y direction at position x
    pub fn shear_y(&self, x: f64) -> FrameResult<f64> {
        Ok(self.shear_y_at(self.check_position(x)?))
    }

    /// Shear force in local z direction at position x
    pub fn shear_z(&self, x: f64) -> FrameResult<f64> {
        Ok(self.shear_z_at(self.check_position(x)?))
    }

    /// Torsional moment at position x
    pub fn torque(&self, x: f64) -> FrameResult<f64> {
        Ok(self.torque_at(self.check_position(x)?))
    }

    /// Bending moment about local y axis at position x
    pub fn moment_y(&self, x: f64) -> FrameResult<f64> {
        Ok(self.moment_y_at(self.check_position(x)?))
    }

    /// Bending moment about local z axis at position x
    pub fn moment_z(&self, x: f64) -> FrameResult<f64> {
        Ok(self.moment_z_at(self.check_position(x)?))
    }

    /// All six components at position x
    pub fn at(&self, x: f64) -> FrameResult<MemberForces> {
        let x = self.check_position(x)?;
        Ok(MemberForces {
            axial: self.axial_at(x),
            shear_y: self.shear_y_at(x),
            shear_z: self.shear_z_at(x),
            torsion: self.torque_at(x),
            moment_y: self.moment_y_at(x),
            moment_z: self.moment_z_at(x),
        })
    }

    /// Scan the member at [`SCAN_SAMPLES`] points and return the signed value
    /// of greatest magnitude
    fn scan_extreme(&self, f: impl Fn(&Self, f64) -> f64) -> f64 {
        let mut extreme = 0.0_f64;
        for i in 0..SCAN_SAMPLES {
            let x = self.length * i as f64 / (SCAN_SAMPLES - 1) as f64;
            let value = f(self, x);
            if value.abs() > extreme.abs() {
                extreme = value;
            }
        }
        extreme
    }

    /// Signed axial force of greatest magnitude (41-sample scan)
    pub fn max_axial(&self) -> f64 {
        self.scan_extreme(Self::axial_at)
    }

    /// Signed local-y shear of greatest magnitude (41-sample scan)
    pub fn max_shear_y(&self) -> f64 {
        self.scan_extreme(Self::shear_y_at)
    }

    /// Signed local-z shear of greatest magnitude (41-sample scan)
    pub fn max_shear_z(&self) -> f64 {
        self.scan_extreme(Self::shear_z_at)
    }

    /// Signed moment about local y of greatest magnitude (41-sample scan)
    pub fn max_moment_y(&self) -> f64 {
        self.scan_extreme(Self::moment_y_at)
    }

    /// Signed moment about local z of greatest magnitude (41-sample scan)
    pub fn max_moment_z(&self) -> f64 {
        self.scan_extreme(Self::moment_z_at)
    }
}
