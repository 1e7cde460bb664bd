//! Minimal Well-Known Text reader for the three 2D geometries.
//!
//! Grammar accepted (keywords are case-insensitive):
//!
//! ```text
//! point      = "POINT" ( "EMPTY" | "(" position ")" )
//! linestring = "LINESTRING" ( "EMPTY" | "(" position { "," position } ")" )
//! polygon    = "POLYGON" ( "EMPTY" | "(" ring { "," ring } ")" )
//! ring       = "(" position { "," position } ")"
//! position   = number number
//! ```

use crate::error::WktError;
use crate::{LineString, Point, Polygon};

/// Cursor over WKT text.
pub(crate) struct WktReader<'a> {
    data: &'a str,
    x: usize,
}

impl<'a> WktReader<'a> {
    pub(crate) fn new(data: &'a str) -> Self {
        Self { data, x: 0 }
    }

    // ----------------------------------------------------------------
    // Geometry entry points

    pub(crate) fn read_point(&mut self) -> Result<Point, WktError> {
        self.read_keyword("POINT")?;
        if self.try_empty() {
            self.read_end()?;
            return Ok(Point::empty());
        }
        self.expect(b'(', "`(`")?;
        let point = self.read_position()?;
        self.expect(b')', "`)`")?;
        self.read_end()?;
        Ok(point)
    }

    pub(crate) fn read_line_string(&mut self) -> Result<LineString, WktError> {
        self.read_keyword("LINESTRING")?;
        if self.try_empty() {
            self.read_end()?;
            return Ok(LineString::default());
        }
        let points = self.read_positions()?;
        self.read_end()?;
        Ok(LineString::new(points))
    }

    pub(crate) fn read_polygon(&mut self) -> Result<Polygon, WktError> {
        self.read_keyword("POLYGON")?;
        if self.try_empty() {
            self.read_end()?;
            return Ok(Polygon::default());
        }
        self.expect(b'(', "`(`")?;
        let mut rings = vec![self.read_positions()?];
        while self.try_consume(b',') {
            rings.push(self.read_positions()?);
        }
        self.expect(b')', "`)`")?;
        self.read_end()?;
        let exterior = rings.remove(0);
        Ok(Polygon::new(exterior, rings))
    }

    // ----------------------------------------------------------------
    // Productions

    /// `"(" position { "," position } ")"`
    fn read_positions(&mut self) -> Result<Vec<Point>, WktError> {
        self.expect(b'(', "`(`")?;
        let mut points = vec![self.read_position()?];
        while self.try_consume(b',') {
            points.push(self.read_position()?);
        }
        self.expect(b')', "`)`")?;
        Ok(points)
    }

    fn read_position(&mut self) -> Result<Point, WktError> {
        let mut coords = Vec::with_capacity(2);
        loop {
            self.skip_ws();
            match self.peek() {
                Some(c) if is_number_start(c) => coords.push(self.read_number()?),
                Some(_) => break,
                None => return Err(WktError::UnexpectedEnd),
            }
        }
        if coords.len() != 2 {
            return Err(WktError::Dimension(coords.len()));
        }
        Ok(Point::new(coords[0], coords[1]))
    }

    fn read_number(&mut self) -> Result<f64, WktError> {
        let start = self.x;
        let bytes = self.data.as_bytes();
        while self.x < bytes.len() && is_number_char(bytes[self.x]) {
            self.x += 1;
        }
        let raw = &self.data[start..self.x];
        raw.parse::<f64>()
            .map_err(|_| WktError::InvalidNumber(raw.to_string()))
    }

    fn read_keyword(&mut self, expected: &'static str) -> Result<(), WktError> {
        self.skip_ws();
        let word = self.read_word();
        if word.is_empty() {
            return match self.peek() {
                Some(_) => Err(self.unexpected(expected)),
                None => Err(WktError::UnexpectedEnd),
            };
        }
        if !word.eq_ignore_ascii_case(expected) {
            return Err(WktError::WrongGeometry {
                expected,
                found: word.to_string(),
            });
        }
        Ok(())
    }

    fn try_empty(&mut self) -> bool {
        self.skip_ws();
        let mark = self.x;
        if self.read_word().eq_ignore_ascii_case("EMPTY") {
            return true;
        }
        self.x = mark;
        false
    }

    fn read_word(&mut self) -> &'a str {
        let start = self.x;
        let bytes = self.data.as_bytes();
        while self.x < bytes.len() && bytes[self.x].is_ascii_alphabetic() {
            self.x += 1;
        }
        &self.data[start..self.x]
    }

    fn read_end(&mut self) -> Result<(), WktError> {
        self.skip_ws();
        if self.x < self.data.len() {
            return Err(self.unexpected("end of input"));
        }
        Ok(())
    }

    // ----------------------------------------------------------------
    // Primitives

    fn expect(&mut self, byte: u8, expected: &'static str) -> Result<(), WktError> {
        self.skip_ws();
        match self.peek() {
            Some(c) if c == byte => {
                self.x += 1;
                Ok(())
            }
            Some(_) => Err(self.unexpected(expected)),
            None => Err(WktError::UnexpectedEnd),
        }
    }

    fn try_consume(&mut self, byte: u8) -> bool {
        self.skip_ws();
        if self.peek() == Some(byte) {
            self.x += 1;
            return true;
        }
        false
    }

    fn peek(&self) -> Option<u8> {
        self.data.as_bytes().get(self.x).copied()
    }

    fn skip_ws(&mut self) {
        let bytes = self.data.as_bytes();
        while self.x < bytes.len() && bytes[self.x].is_ascii_whitespace() {
            self.x += 1;
        }
    }

    fn unexpected(&self, expected: &'static str) -> WktError {
        let found = self.data[self.x..]
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_default();
        WktError::UnexpectedToken {
            found,
            offset: self.x,
            expected,
        }
    }
}

/// `i` and `n` open the non-finite spellings `inf`, `infinity` and `NaN`.
fn is_number_start(c: u8) -> bool {
    c.is_ascii_digit() || matches!(c, b'-' | b'+' | b'.' | b'i' | b'I' | b'n' | b'N')
}

fn is_number_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'-' | b'+' | b'.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_point_with_irregular_whitespace() {
        let p = WktReader::new("  point(  1.5   -2 ) ").read_point().unwrap();
        assert_eq!(p, Point::new(1.5, -2.0));
    }

    #[test]
    fn reads_scientific_coordinates() {
        let p = WktReader::new("POINT (1e3 -2.5E-2)").read_point().unwrap();
        assert_eq!(p, Point::new(1000.0, -0.025));
    }

    #[test]
    fn rejects_three_dimensional_position() {
        let err = WktReader::new("POINT (1 2 3)").read_point().unwrap_err();
        assert_eq!(err, WktError::Dimension(3));
    }

    #[test]
    fn rejects_trailing_garbage() {
        let err = WktReader::new("POINT (1 2) x").read_point().unwrap_err();
        assert!(matches!(err, WktError::UnexpectedToken { offset: 12, .. }));
    }

    #[test]
    fn rejects_truncated_input() {
        let err = WktReader::new("LINESTRING (1 2, 3 4")
            .read_line_string()
            .unwrap_err();
        assert_eq!(err, WktError::UnexpectedEnd);
    }

    #[test]
    fn rejects_wrong_keyword() {
        let err = WktReader::new("POLYGON EMPTY").read_point().unwrap_err();
        assert_eq!(
            err,
            WktError::WrongGeometry {
                expected: "POINT",
                found: "POLYGON".to_string()
            }
        );
    }

    #[test]
    fn reads_non_finite_coordinates() {
        let p = WktReader::new("POINT (inf -Infinity)").read_point().unwrap();
        assert_eq!(p, Point::new(f64::INFINITY, f64::NEG_INFINITY));

        let p = WktReader::new("POINT (NaN +inf)").read_point().unwrap();
        assert!(p.x.is_nan());
        assert_eq!(p.y, f64::INFINITY);
        assert!(!p.is_empty());
    }

    #[test]
    fn rejects_unknown_word_coordinate() {
        let err = WktReader::new("POINT (infx 1)").read_point().unwrap_err();
        assert_eq!(err, WktError::InvalidNumber("infx".to_string()));
    }

    #[test]
    fn rejects_bad_number() {
        let err = WktReader::new("POINT (1-2 3)").read_point().unwrap_err();
        assert_eq!(err, WktError::InvalidNumber("1-2".to_string()));
    }
}
