//! Markdown report assembly for a finished conversion run.
//!
//! The report shows the general Helmert formula for each leg that was
//! actually applied (into the hub and/or out of it), the same formulas with
//! the numeric parameters substituted — rotations already converted to
//! radians, scale to its fractional form, the out-of-hub leg with the
//! negated set the engine really uses — and tables of the source and
//! transformed coordinates. Pure string assembly; the caller decides where
//! the Markdown goes.

use std::fmt::Write;

use crate::datum::Datum;
use crate::params::HelmertParams;
use crate::store::ParameterStore;
use crate::transform::ConvertError;
use crate::Point;

/// General formula for the leg into the hub frame.
const GENERAL_TO_HUB: &str = r"$$ \begin{bmatrix} X_t \\ Y_t \\ Z_t \end{bmatrix} = (1 + m) \begin{bmatrix} 1 & \omega_z & -\omega_y \\ -\omega_z & 1 & \omega_x \\ \omega_y & -\omega_x & 1 \end{bmatrix} \begin{bmatrix} X_s \\ Y_s \\ Z_s \end{bmatrix} + \begin{bmatrix} \Delta X \\ \Delta Y \\ \Delta Z \end{bmatrix} $$";

/// General formula for the leg out of the hub frame: the same transform
/// with all seven parameters negated.
const GENERAL_FROM_HUB: &str = r"$$ \begin{bmatrix} X_t \\ Y_t \\ Z_t \end{bmatrix} = (1 - m) \begin{bmatrix} 1 & -\omega_z & \omega_y \\ \omega_z & 1 & -\omega_x \\ -\omega_y & \omega_x & 1 \end{bmatrix} \begin{bmatrix} X_s \\ Y_s \\ Z_s \end{bmatrix} - \begin{bmatrix} \Delta X \\ \Delta Y \\ \Delta Z \end{bmatrix} $$";

/// Render the Markdown conversion report.
///
/// `input` and `output` are the source and transformed coordinate tables,
/// row-aligned. Fails with [`ConvertError::UnknownDatum`] when the store is
/// missing a parameter set the formulas need.
pub fn conversion_report(
    source: Datum,
    dest: Datum,
    input: &[Point],
    output: &[Point],
    store: &ParameterStore,
) -> Result<String, ConvertError> {
    // Look both legs up before rendering anything.
    let to_hub = if source.is_hub() {
        None
    } else {
        Some(store.lookup(source)?)
    };
    let from_hub = if dest.is_hub() {
        None
    } else {
        Some(store.lookup(dest)?)
    };

    let mut out = String::new();
    let _ = writeln!(out, "# Coordinate conversion report");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Conversion of {} point(s) from {source} to {dest}.",
        input.len()
    );
    let _ = writeln!(out);

    if to_hub.is_none() && from_hub.is_none() {
        let _ = writeln!(
            out,
            "Source and destination are both {source}; coordinates are unchanged."
        );
        let _ = writeln!(out);
    } else {
        let _ = writeln!(out, "## General transformation formulas");
        let _ = writeln!(out);
        if to_hub.is_some() {
            let _ = writeln!(out, "### Into {}", Datum::Gsk2011);
            let _ = writeln!(out, "{GENERAL_TO_HUB}");
            let _ = writeln!(out);
        }
        if from_hub.is_some() {
            let _ = writeln!(out, "### Out of {}", Datum::Gsk2011);
            let _ = writeln!(out, "{GENERAL_FROM_HUB}");
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "## Formulas with substituted parameters");
        let _ = writeln!(out);
        if let Some(params) = to_hub {
            let _ = writeln!(out, "### {source} → {}", Datum::Gsk2011);
            let _ = writeln!(out, "{}", substituted_formula(params));
            let _ = writeln!(out);
        }
        if let Some(params) = from_hub {
            // The out-of-hub leg applies the negated set; show what runs.
            let _ = writeln!(out, "### {} → {dest}", Datum::Gsk2011);
            let _ = writeln!(out, "{}", substituted_formula(&params.negated()));
            let _ = writeln!(out);
        }
    }

    let _ = writeln!(out, "## Source coordinates");
    points_table(&mut out, input);
    let _ = writeln!(out);
    let _ = writeln!(out, "## Transformed coordinates");
    points_table(&mut out, output);
    let _ = writeln!(out);

    let _ = writeln!(out, "## Summary");
    let _ = writeln!(
        out,
        "All {} point(s) were transformed from {source} to {dest}.",
        output.len()
    );

    Ok(out)
}

/// One leg's formula with the numeric values in place. Rotations are in
/// radians, the scale correction is the dimensionless fraction.
fn substituted_formula(params: &HelmertParams) -> String {
    let (wx, wy, wz) = params.rotations_rad();
    format!(
        r"$$ \begin{{bmatrix}} X_t \\ Y_t \\ Z_t \end{{bmatrix}} = (1 + {m}) \begin{{bmatrix}} 1 & {pwz} & {nwy} \\ {nwz} & 1 & {pwx} \\ {pwy} & {nwx} & 1 \end{{bmatrix}} \begin{{bmatrix}} X_s \\ Y_s \\ Z_s \end{{bmatrix}} + \begin{{bmatrix}} {dx} \\ {dy} \\ {dz} \end{{bmatrix}} $$",
        m = fmt_angle(params.scale_fraction()),
        pwz = fmt_angle(wz),
        nwz = fmt_angle(-wz),
        pwy = fmt_angle(wy),
        nwy = fmt_angle(-wy),
        pwx = fmt_angle(wx),
        nwx = fmt_angle(-wx),
        dx = nz(params.dx_m),
        dy = nz(params.dy_m),
        dz = nz(params.dz_m),
    )
}

/// Collapse negative zero so negated zero parameters don't print as "-0".
fn nz(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// Rotations (radians) and the scale fraction are printed to ten decimal
/// places; anything smaller is below the noise floor of these parameter sets.
fn fmt_angle(v: f64) -> String {
    format!("{:.10}", nz(v))
}

fn points_table(out: &mut String, points: &[Point]) {
    let _ = writeln!(out, "| X | Y | Z |");
    let _ = writeln!(out, "| --- | --- | --- |");
    for p in points {
        let _ = writeln!(out, "| {:.4} | {:.4} | {:.4} |", p.x, p.y, p.z);
    }
}
