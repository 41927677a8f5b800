//! Reading point records and writing per-cluster id lists.
//!
//! Input is one record per line, `id x y`, separated by tabs or other
//! whitespace. Output files hold one point identifier per line.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::DbscanError;
use crate::point::{Point, PointId};
use crate::ranking::RankedCluster;

/// Parse a single `id x y` record. `line` is 1-based and only used for errors.
pub fn parse_record(record: &str, line: usize) -> Result<Point, DbscanError> {
    let fields: Vec<&str> = record.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(DbscanError::MalformedRecord {
            line,
            reason: format!("expected 3 fields (id, x, y), got {}", fields.len()),
        });
    }

    let id: PointId = fields[0].parse().map_err(|_| DbscanError::MalformedRecord {
        line,
        reason: format!("invalid point id {:?}", fields[0]),
    })?;
    let x = parse_coord(fields[1], "x", line)?;
    let y = parse_coord(fields[2], "y", line)?;

    Ok(Point::new(id, x, y))
}

fn parse_coord(field: &str, axis: &str, line: usize) -> Result<f64, DbscanError> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DbscanError::MalformedRecord {
            line,
            reason: format!("invalid {} coordinate {:?}", axis, field),
        }),
    }
}

/// Read all point records from `reader`, in order. Blank lines are skipped.
///
/// # Errors
///
/// Fails on the first malformed record or I/O error.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>, DbscanError> {
    let mut points = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        points.push(parse_record(&line, i + 1)?);
    }
    Ok(points)
}

/// Read all point records from the file at `path`.
pub fn read_points_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, DbscanError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let points = read_points(reader)?;
    info!(path = %path.display(), points = points.len(), "loaded points");
    Ok(points)
}

/// Write one identifier per line.
pub fn write_cluster<W: Write>(mut writer: W, members: &[PointId]) -> Result<(), DbscanError> {
    for id in members {
        writeln!(writer, "{}", id)?;
    }
    writer.flush()?;
    Ok(())
}

/// Path of the `index`-th output file for `input`: the input file name up to
/// its first `.`, suffixed with `_cluster_<index>.txt`, placed in
/// `output_dir` (or next to the input when `None`).
pub fn cluster_output_path(input: &Path, index: usize, output_dir: Option<&Path>) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    let name = format!("{}_cluster_{}.txt", stem, index);

    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Write each cluster to its own file, numbered in the given order.
///
/// Returns the paths written.
pub fn write_top_clusters(
    input: &Path,
    clusters: &[RankedCluster],
    output_dir: Option<&Path>,
) -> Result<Vec<PathBuf>, DbscanError> {
    let mut written = Vec::with_capacity(clusters.len());
    for (i, cluster) in clusters.iter().enumerate() {
        let path = cluster_output_path(input, i, output_dir);
        let writer = BufWriter::new(File::create(&path)?);
        write_cluster(writer, &cluster.members)?;
        debug!(
            path = %path.display(),
            cluster = cluster.cluster_id,
            size = cluster.len(),
            "wrote cluster"
        );
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_tab_separated() {
        let input = "0\t1.5\t2.25\n1\t-3\t4e1\n";
        let points = read_points(Cursor::new(input)).unwrap();
        assert_eq!(
            points,
            vec![Point::new(0, 1.5, 2.25), Point::new(1, -3.0, 40.0)]
        );
    }

    #[test]
    fn test_read_whitespace_and_blank_lines() {
        let input = "  7   0.0 1.0  \n\n8 2.0\t3.0\n   \n";
        let points = read_points(Cursor::new(input)).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], Point::new(8, 2.0, 3.0));
    }

    #[test]
    fn test_wrong_field_count() {
        let result = read_points(Cursor::new("0\t1.0\t2.0\n1\t3.0\n"));
        match result {
            Err(DbscanError::MalformedRecord { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_fields() {
        assert!(matches!(
            parse_record("a 1.0 2.0", 1),
            Err(DbscanError::MalformedRecord { line: 1, .. })
        ));
        assert!(matches!(
            parse_record("1 x 2.0", 3),
            Err(DbscanError::MalformedRecord { line: 3, .. })
        ));
        assert!(matches!(
            parse_record("1 1.0 NaN", 4),
            Err(DbscanError::MalformedRecord { line: 4, .. })
        ));
        assert!(matches!(
            parse_record("1.5 1.0 2.0", 5),
            Err(DbscanError::MalformedRecord { line: 5, .. })
        ));
    }

    #[test]
    fn test_write_cluster() {
        let mut out = Vec::new();
        write_cluster(&mut out, &[3, 1, 2]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3\n1\n2\n");
    }

    #[test]
    fn test_cluster_output_path() {
        let input = Path::new("data/input1.txt");
        assert_eq!(
            cluster_output_path(input, 0, None),
            PathBuf::from("data/input1_cluster_0.txt")
        );
        assert_eq!(
            cluster_output_path(Path::new("points.v2.tsv"), 3, Some(Path::new("out"))),
            PathBuf::from("out/points_cluster_3.txt")
        );
    }

    #[test]
    fn test_write_top_clusters() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let clusters = vec![
            RankedCluster {
                cluster_id: 1,
                members: vec![4, 5, 6],
            },
            RankedCluster {
                cluster_id: 0,
                members: vec![1],
            },
        ];

        let written = write_top_clusters(&input, &clusters, None).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0], dir.path().join("input_cluster_0.txt"));
        assert_eq!(std::fs::read_to_string(&written[0]).unwrap(), "4\n5\n6\n");
        assert_eq!(std::fs::read_to_string(&written[1]).unwrap(), "1\n");
    }
}
