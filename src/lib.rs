//! # gsk2011
//!
//! Seven-parameter **Helmert datum transformations** between the Russian
//! national reference frames and **ГСК-2011** (GSK-2011), the state geodetic
//! coordinate system.
//!
//! All transformation parameters are defined relative to GSK-2011, which acts
//! as the hub frame: a conversion between two non-hub datums first transforms
//! into GSK-2011 and then out again. One application of the transform is the
//! linearized similarity
//!
//! ```text
//! p' = (1 + m) · R(ωx, ωy, ωz) · p + (ΔX, ΔY, ΔZ)
//! ```
//!
//! with small-angle rotations (arcseconds), a scale correction (ppm) and a
//! translation (meters). The inverse direction negates all seven parameters,
//! which is exact to the same first order as the rotation matrix itself.
//!
//! ## Features
//!
//! - **Closed datum set** — СК-42, СК-95, ПЗ-90, ПЗ-90.02, ПЗ-90.11, WGS-84
//!   and ITRF-2008, parsed once from their canonical names into an enum
//! - **Injected parameter store** — compiled-in GOST 32453 values, or your
//!   own table from the JSON parameter format
//! - **Batch conversion** — order-preserving, one `Result` per input point,
//!   so the caller chooses the partial-failure policy
//! - **Report assembly** — the Markdown/LaTeX conversion report with the
//!   applied formulas and substituted parameter values
//! - **CSV ingestion** — strict reader for `X, Y, Z` coordinate tables
//!
//! ## Example
//!
//! ```
//! use gsk2011::{convert, Datum, ParameterStore, Point};
//!
//! let store = ParameterStore::builtin();
//! let p = Point::new(2_850_123.456, 2_195_456.789, 5_245_789.012);
//!
//! // СК-42 → WGS-84 pivots through GSK-2011 automatically.
//! let q = convert(p, Datum::Sk42, Datum::Wgs84, &store)?;
//! println!("{:.3} {:.3} {:.3}", q.x, q.y, q.z);
//! # Ok::<(), gsk2011::ConvertError>(())
//! ```
//!
//! Every operation is a pure function of its inputs: the store is read-only
//! after construction, points are taken by value, and nothing blocks or does
//! I/O except the explicit `*_from_file` loaders. Batches may therefore be
//! mapped in parallel by the caller without any coordination.

pub mod datum;
pub mod params;
pub mod report;
pub mod store;
pub mod table;
pub mod transform;

pub use datum::{Datum, ParseDatumError};
pub use params::HelmertParams;
pub use report::conversion_report;
pub use store::ParameterStore;
pub use table::{read_points_csv, read_points_csv_from_file};
pub use transform::{apply_helmert, convert, convert_all, ConvertError, Direction};

// Commonly used types
// Geodetic Cartesian coordinates are ~6.4e6 m with sub-millimeter targets,
// so all math runs in f64.
pub type Vector3 = nalgebra::Vector3<f64>;
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// A Cartesian coordinate triple (X, Y, Z) in meters.
pub type Point = Vector3;
