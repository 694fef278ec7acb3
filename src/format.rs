//! Inline-data serialization
//!
//! The backend accepts data inline after a plot command: one whitespace
//! separated line per point, with blank lines marking run boundaries in
//! gridded 3D data. Surfaces are drawn as patches between consecutive runs,
//! so a missing or spurious blank line changes the rendering. Everything in
//! this module is a pure transform; transmission is the session's job.
//!
//! Run boundaries are detected with exact `f64` equality, no tolerance.
//! Switching to an epsilon comparison would change rendering for existing
//! callers, so the fragile behavior stays. Callers must present series
//! pre-sorted so that all points sharing a grouping value are contiguous;
//! a non-contiguously grouped series is not an error, it silently yields
//! a cosmetically wrong plot.

use serde::{Deserialize, Serialize};

/// A 2D data point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D { x, y }
    }
}

/// A 3D data point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point3D { x, y, z }
    }
}

impl From<(f64, f64, f64)> for Point3D {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Point3D { x, y, z }
    }
}

/// Format a 2D series: one `x y` line per point, insertion order.
///
/// Never inserts blank lines. An empty series yields an empty block.
pub fn format_2d(series: &[Point2D]) -> String {
    let mut block = String::new();
    for point in series {
        block.push_str(&format!("{} {}\n", point.x, point.y));
    }
    block
}

/// Format a 3D series for surface (wireframe) rendering.
///
/// Emits one `x y z` line per point. Points are grouped into runs of
/// constant x; after writing a point, a blank line is emitted if the next
/// point starts a new run (exact float inequality between successive x
/// values). Iteration stops at the last point, so a series of length 0 or
/// 1 never produces a blank line.
pub fn format_3d_surface(series: &[Point3D]) -> String {
    let mut block = String::new();
    for (i, point) in series.iter().enumerate() {
        block.push_str(&format!("{} {} {}\n", point.x, point.y, point.z));
        if let Some(next) = series.get(i + 1) {
            if next.x != point.x {
                block.push('\n');
            }
        }
    }
    block
}

/// Format a 3D series for colormap (pm3d) rendering.
///
/// Same line format as [`format_3d_surface`], but runs are keyed on y and
/// the boundary check happens before the current line is written: when the
/// current point's y differs from the previous point's y, the blank line
/// precedes the current line. The tracker starts at the first point's y,
/// so the first line is never preceded by a blank.
pub fn format_3d_colormap(series: &[Point3D]) -> String {
    let mut block = String::new();
    let mut previous_y = match series.first() {
        Some(first) => first.y,
        None => return block,
    };
    for point in series {
        if point.y != previous_y {
            block.push('\n');
        }
        block.push_str(&format!("{} {} {}\n", point.x, point.y, point.z));
        previous_y = point.y;
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points2(data: &[(f64, f64)]) -> Vec<Point2D> {
        data.iter().map(|&p| p.into()).collect()
    }

    fn points3(data: &[(f64, f64, f64)]) -> Vec<Point3D> {
        data.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn test_format_2d_one_line_per_point() {
        let series = points2(&[(1.0, 2.5), (3.0, -4.0), (0.125, 1e-3)]);
        let block = format_2d(&series);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "1 2.5");
        assert_eq!(lines[1], "3 -4");
        assert_eq!(lines[2], "0.125 0.001");
        assert!(!block.contains("\n\n")); // 2D never has run boundaries
    }

    #[test]
    fn test_format_2d_tokens_round_trip() {
        let series = points2(&[(0.1, 0.2), (1234.5678, -9.25)]);
        for (line, point) in format_2d(&series).lines().zip(&series) {
            let mut tokens = line.split_whitespace();
            let x: f64 = tokens.next().unwrap().parse().unwrap();
            let y: f64 = tokens.next().unwrap().parse().unwrap();
            assert_eq!(x, point.x);
            assert_eq!(y, point.y);
            assert_eq!(tokens.next(), None);
        }
    }

    #[test]
    fn test_format_2d_empty() {
        assert_eq!(format_2d(&[]), "");
    }

    #[test]
    fn test_surface_blank_line_between_x_runs() {
        let series = points3(&[(0.0, 0.0, 1.0), (0.0, 1.0, 1.0), (1.0, 0.0, 2.0), (1.0, 1.0, 2.0)]);
        let block = format_3d_surface(&series);
        // Blank line after the 2nd data line, where x changes 0 -> 1
        assert_eq!(block, "0 0 1\n0 1 1\n\n1 0 2\n1 1 2\n");
    }

    #[test]
    fn test_surface_single_point_has_no_blank() {
        let block = format_3d_surface(&points3(&[(2.0, 3.0, 4.0)]));
        assert_eq!(block, "2 3 4\n");
    }

    #[test]
    fn test_surface_empty() {
        assert_eq!(format_3d_surface(&[]), "");
    }

    #[test]
    fn test_surface_trailing_run_of_one() {
        let series = points3(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        let block = format_3d_surface(&series);
        assert_eq!(block, "0 0 0\n\n1 0 0\n");
        // no blank after the final line
        assert!(!block.ends_with("\n\n"));
    }

    #[test]
    fn test_surface_boundary_is_exact_equality() {
        // one ulp-scale step apart: a tolerance-based comparison would merge these runs
        let series = points3(&[(1.0, 0.0, 0.0), (1.0 + 1e-15, 1.0, 0.0)]);
        let block = format_3d_surface(&series);
        assert_eq!(block.matches("\n\n").count(), 1);
    }

    #[test]
    fn test_colormap_blank_line_before_new_y_run() {
        let series = points3(&[(0.0, 0.0, 5.0), (1.0, 0.0, 5.0), (0.0, 1.0, 6.0), (1.0, 1.0, 6.0)]);
        let block = format_3d_colormap(&series);
        // Blank line before the 3rd data line, where y changes 0 -> 1
        assert_eq!(block, "0 0 5\n1 0 5\n\n0 1 6\n1 1 6\n");
    }

    #[test]
    fn test_colormap_first_point_never_leads_with_blank() {
        let block = format_3d_colormap(&points3(&[(0.0, 7.0, 1.0), (1.0, 7.0, 1.0)]));
        assert!(block.starts_with("0 7 1\n"));
        assert!(!block.contains("\n\n"));
    }

    #[test]
    fn test_colormap_empty() {
        assert_eq!(format_3d_colormap(&[]), "");
    }

    #[test]
    fn test_point_serde_round_trip() {
        let point = Point3D::new(1.5, -2.0, 0.25);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(serde_json::from_str::<Point3D>(&json).unwrap(), point);
    }
}
