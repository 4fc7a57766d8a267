//! The seven parameters of a Helmert transformation.

use serde::{Deserialize, Serialize};

/// Arcseconds per degree.
const ARCSEC_PER_DEG: f64 = 3600.0;

/// Seven-parameter set relating a datum to the hub frame.
///
/// Rotations are small angles stored in arcseconds, translations in meters,
/// the scale correction in parts per million. The serde field names
/// (`wx, wy, wz, dX, dY, dZ, m`) match the JSON parameter format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HelmertParams {
    /// Rotation about the X axis, arcseconds.
    #[serde(rename = "wx")]
    pub wx_arcsec: f64,
    /// Rotation about the Y axis, arcseconds.
    #[serde(rename = "wy")]
    pub wy_arcsec: f64,
    /// Rotation about the Z axis, arcseconds.
    #[serde(rename = "wz")]
    pub wz_arcsec: f64,
    /// Translation along X, meters.
    #[serde(rename = "dX")]
    pub dx_m: f64,
    /// Translation along Y, meters.
    #[serde(rename = "dY")]
    pub dy_m: f64,
    /// Translation along Z, meters.
    #[serde(rename = "dZ")]
    pub dz_m: f64,
    /// Scale correction, parts per million.
    #[serde(rename = "m")]
    pub scale_ppm: f64,
}

impl HelmertParams {
    /// The identity parameter set.
    pub const ZERO: HelmertParams = HelmertParams {
        wx_arcsec: 0.0,
        wy_arcsec: 0.0,
        wz_arcsec: 0.0,
        dx_m: 0.0,
        dy_m: 0.0,
        dz_m: 0.0,
        scale_ppm: 0.0,
    };

    /// Rotations converted to radians, as (ωx, ωy, ωz).
    pub fn rotations_rad(&self) -> (f64, f64, f64) {
        (
            arcsec_to_rad(self.wx_arcsec),
            arcsec_to_rad(self.wy_arcsec),
            arcsec_to_rad(self.wz_arcsec),
        )
    }

    /// Scale correction as a dimensionless fraction.
    pub fn scale_fraction(&self) -> f64 {
        self.scale_ppm * 1e-6
    }

    /// Parameter set with every component negated.
    ///
    /// Negation inverts the transform only to first order in the rotation
    /// angles, the same order the linearized rotation matrix is truncated to.
    pub fn negated(&self) -> HelmertParams {
        HelmertParams {
            wx_arcsec: -self.wx_arcsec,
            wy_arcsec: -self.wy_arcsec,
            wz_arcsec: -self.wz_arcsec,
            dx_m: -self.dx_m,
            dy_m: -self.dy_m,
            dz_m: -self.dz_m,
            scale_ppm: -self.scale_ppm,
        }
    }
}

/// Convert an angle in arcseconds to radians.
pub fn arcsec_to_rad(arcsec: f64) -> f64 {
    (arcsec / ARCSEC_PER_DEG).to_radians()
}
