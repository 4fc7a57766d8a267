//! The Helmert transform engine and datum-to-datum routing.
//!
//! One application relates a datum to the hub frame:
//!
//! ```text
//! p' = (1 + m) · R · p + d,    R = | 1    ωz  -ωy |
//!                                  | -ωz  1    ωx |
//!                                  | ωy  -ωx   1  |
//! ```
//!
//! with the rotations in radians and `m` as a fraction. `R` is the
//! first-order truncation of the full rotation matrix, valid for the
//! sub-arcsecond angles that relate these frames. The inverse direction
//! negates all seven parameters, which inverts the transform to the same
//! first order.

use thiserror::Error;
use tracing::debug;

use crate::datum::Datum;
use crate::params::HelmertParams;
use crate::store::ParameterStore;
use crate::{Matrix3, Point, Vector3};

// ── Errors ──────────────────────────────────────────────────────────────────

/// Why a conversion could not be carried out.
///
/// Both variants are caller errors, not transient conditions: the
/// computation is deterministic, so retrying reproduces the same failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The parameter store has no entry for the requested datum.
    #[error("no transformation parameters for datum {0}")]
    UnknownDatum(Datum),

    /// An input coordinate was NaN or infinite.
    #[error("non-finite input coordinate ({x}, {y}, {z})")]
    NonFiniteInput { x: f64, y: f64, z: f64 },
}

// ── Single transform application ────────────────────────────────────────────

/// Which way a parameter set is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From the parameter set's datum into the hub frame.
    ToHub,
    /// From the hub frame out into the parameter set's datum.
    FromHub,
}

/// Apply one seven-parameter Helmert transformation.
///
/// `params` relates a datum to the hub frame; `direction` picks which of the
/// two frames the point is currently in. Pure and deterministic; non-finite
/// inputs propagate through the arithmetic unchecked (validation happens in
/// [`convert`]).
pub fn apply_helmert(point: Point, params: &HelmertParams, direction: Direction) -> Point {
    let p = match direction {
        Direction::ToHub => *params,
        Direction::FromHub => params.negated(),
    };

    let (wx, wy, wz) = p.rotations_rad();
    #[rustfmt::skip]
    let rot = Matrix3::new(
        1.0,  wz, -wy,
        -wz, 1.0,  wx,
        wy, -wx,  1.0,
    );
    let shift = Vector3::new(p.dx_m, p.dy_m, p.dz_m);

    (1.0 + p.scale_fraction()) * rot * point + shift
}

// ── Routing ─────────────────────────────────────────────────────────────────

/// Convert a point between two datums, pivoting through the hub when
/// neither endpoint is the hub.
///
/// Exactly one of three routes applies, checked in this order:
/// 1. destination is the hub → one [`Direction::ToHub`] application;
/// 2. source is the hub → one [`Direction::FromHub`] application;
/// 3. otherwise → into the hub with the source parameters, then out with
///    the destination parameters.
///
/// Hub → hub is an identity and touches no parameters. A non-hub datum
/// converted to itself still takes route 3, so the result is the identity
/// only to first order.
pub fn convert(
    point: Point,
    source: Datum,
    dest: Datum,
    store: &ParameterStore,
) -> Result<Point, ConvertError> {
    ensure_finite(point)?;

    // Both endpoints already in the hub frame: nothing to look up. Route 2
    // would otherwise ask the store for the hub, which never has an entry.
    if source.is_hub() && dest.is_hub() {
        return Ok(point);
    }

    if dest.is_hub() {
        debug!(%source, "one leg into the hub frame");
        return Ok(apply_helmert(point, store.lookup(source)?, Direction::ToHub));
    }

    if source.is_hub() {
        debug!(%dest, "one leg out of the hub frame");
        return Ok(apply_helmert(point, store.lookup(dest)?, Direction::FromHub));
    }

    debug!(%source, %dest, "two legs through the hub frame");
    let hub_point = apply_helmert(point, store.lookup(source)?, Direction::ToHub);
    Ok(apply_helmert(
        hub_point,
        store.lookup(dest)?,
        Direction::FromHub,
    ))
}

/// Convert a batch of points, one result per input point, in input order.
///
/// A failing point does not stop the batch; its error sits at the matching
/// index, so the caller can reject the whole batch or skip rows without the
/// output ever misaligning with the input.
pub fn convert_all(
    points: &[Point],
    source: Datum,
    dest: Datum,
    store: &ParameterStore,
) -> Vec<Result<Point, ConvertError>> {
    points
        .iter()
        .map(|&p| convert(p, source, dest, store))
        .collect()
}

fn ensure_finite(point: Point) -> Result<(), ConvertError> {
    if point.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(ConvertError::NonFiniteInput {
            x: point.x,
            y: point.y,
            z: point.z,
        })
    }
}
