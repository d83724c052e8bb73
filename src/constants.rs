//! Physical constants of the broadcast orbit model

/// Earth gravitational parameter (m³.s⁻²)
pub struct GM;

impl GM {
    /// WGS-84 value, as used by the GPS broadcast model
    pub const GPS: f64 = 3.986005E14;
}

/// Earth rotation rate (rad.s⁻¹)
pub struct Omega;

impl Omega {
    /// WGS-84 value, as used by the GPS broadcast model
    pub const GPS: f64 = 7.2921151467E-5;
}

/// Kepler solver defaults
pub(crate) struct Kepler;

impl Kepler {
    /// Convergence threshold on the eccentric anomaly update (rad)
    pub const TOLERANCE: f64 = 1.0E-12;
    /// Maximal number of Newton iterations
    pub const MAX_ITER: u32 = 100;
}
