//! 2D geometry values exchanged with DSE Graph.
//!
//! The three shapes render to Well-Known Text through [`std::fmt::Display`] and
//! parse back through [`std::str::FromStr`] (or the `from_wkt` helpers).
//!
//! # Example
//!
//! ```
//! use graphson_geometry::{LineString, Point};
//!
//! let p = Point::new(1.0, 2.5);
//! assert_eq!(p.to_string(), "POINT (1.0 2.5)");
//! assert_eq!(Point::from_wkt("POINT (1.0 2.5)").unwrap(), p);
//!
//! let line = LineString::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
//! assert_eq!(line.to_string(), "LINESTRING (0.0 0.0, 1.0 1.0)");
//! ```

use std::fmt;
use std::str::FromStr;

pub mod error;
mod wkt;

pub use error::WktError;

use wkt::WktReader;

/// A single position. `POINT EMPTY` is represented with NaN coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The empty point (`POINT EMPTY`).
    pub fn empty() -> Self {
        Self {
            x: f64::NAN,
            y: f64::NAN,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_nan() && self.y.is_nan()
    }

    pub fn from_wkt(s: &str) -> Result<Self, WktError> {
        WktReader::new(s).read_point()
    }
}

/// An ordered sequence of points. No points means `LINESTRING EMPTY`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineString {
    pub points: Vec<Point>,
}

impl LineString {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn from_wkt(s: &str) -> Result<Self, WktError> {
        WktReader::new(s).read_line_string()
    }
}

/// A polygon with an exterior ring and zero or more interior rings (holes).
///
/// Rings are stored as written; closure (first point == last point) is not
/// enforced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub exterior: Vec<Point>,
    pub interiors: Vec<Vec<Point>>,
}

impl Polygon {
    pub fn new(exterior: Vec<Point>, interiors: Vec<Vec<Point>>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    pub fn from_wkt(s: &str) -> Result<Self, WktError> {
        WktReader::new(s).read_polygon()
    }
}

// ----------------------------------------------------------------
// WKT rendering

fn write_position(f: &mut fmt::Formatter<'_>, p: &Point) -> fmt::Result {
    // `{:?}` keeps a trailing `.0` on integral coordinates.
    write!(f, "{:?} {:?}", p.x, p.y)
}

fn write_ring(f: &mut fmt::Formatter<'_>, points: &[Point]) -> fmt::Result {
    f.write_str("(")?;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_position(f, p)?;
    }
    f.write_str(")")
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("POINT EMPTY");
        }
        f.write_str("POINT (")?;
        write_position(f, self)?;
        f.write_str(")")
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("LINESTRING EMPTY");
        }
        f.write_str("LINESTRING ")?;
        write_ring(f, &self.points)
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("POLYGON EMPTY");
        }
        f.write_str("POLYGON (")?;
        write_ring(f, &self.exterior)?;
        for ring in &self.interiors {
            f.write_str(", ")?;
            write_ring(f, ring)?;
        }
        f.write_str(")")
    }
}

impl FromStr for Point {
    type Err = WktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wkt(s)
    }
}

impl FromStr for LineString {
    type Err = WktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wkt(s)
    }
}

impl FromStr for Polygon {
    type Err = WktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wkt(s)
    }
}
