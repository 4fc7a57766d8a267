//! CSV ingestion of coordinate tables.
//!
//! Point tables arrive as delimited text with `X`, `Y` and `Z` header
//! columns. Parsing is strict: any row that does not yield three finite
//! numbers fails the whole read, so a parsed table always lines up
//! one-to-one with the source rows.

use std::io::Read;
use std::path::Path;

use anyhow::Context;

use crate::Point;

/// Read points from CSV data with `X`, `Y`, `Z` header columns.
///
/// Column order is free and extra columns are ignored. Row numbers in
/// errors count the header as line 1.
pub fn read_points_csv<R: Read>(reader: R) -> anyhow::Result<Vec<Point>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let x_col = column_index(&headers, "X")?;
    let y_col = column_index(&headers, "Y")?;
    let z_col = column_index(&headers, "Z")?;

    let mut points = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let line = idx + 2;
        let record = record.with_context(|| format!("line {line}: malformed record"))?;
        let point = Point::new(
            parse_coordinate(&record, x_col, "X", line)?,
            parse_coordinate(&record, y_col, "Y", line)?,
            parse_coordinate(&record, z_col, "Z", line)?,
        );
        anyhow::ensure!(
            point.iter().all(|c| c.is_finite()),
            "line {line}: non-finite coordinate ({}, {}, {})",
            point.x,
            point.y,
            point.z
        );
        points.push(point);
    }
    Ok(points)
}

/// Read a coordinate table from a CSV file.
pub fn read_points_csv_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Point>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening coordinate table {}", path.display()))?;
    read_points_csv(file).with_context(|| format!("reading coordinate table {}", path.display()))
}

fn column_index(headers: &csv::StringRecord, name: &str) -> anyhow::Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .with_context(|| format!("missing required column '{name}'"))
}

fn parse_coordinate(
    record: &csv::StringRecord,
    col: usize,
    name: &str,
    line: usize,
) -> anyhow::Result<f64> {
    let field = record.get(col).unwrap_or("");
    field
        .trim()
        .parse()
        .with_context(|| format!("line {line}: bad {name} value '{field}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_simple_table() {
        let data = "X,Y,Z\n2850123.456,2195456.789,5245789.012\n1.0,2.0,3.0\n";
        let points = read_points_csv(data.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Point::new(2_850_123.456, 2_195_456.789, 5_245_789.012));
        assert_eq!(points[1], Point::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn column_order_is_free_and_extras_are_ignored() {
        let data = "name,Z,x,Y\nP-101,3.0,1.0,2.0\n";
        let points = read_points_csv(data.as_bytes()).unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn missing_column_fails() {
        let data = "X,Y\n1.0,2.0\n";
        let err = read_points_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing required column 'Z'"));
    }

    #[test]
    fn bad_value_names_the_line() {
        let data = "X,Y,Z\n1.0,2.0,3.0\n1.0,oops,3.0\n";
        let err = read_points_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 3"));
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let data = "X,Y,Z\n1.0,NaN,3.0\n";
        let err = read_points_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn empty_table_is_fine() {
        let data = "X,Y,Z\n";
        let points = read_points_csv(data.as_bytes()).unwrap();
        assert!(points.is_empty());
    }
}
