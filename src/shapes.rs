use std::io::{self, Write};

use crate::polygon::Polygon;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Triangle;

impl Triangle {
    pub const SIDES: &'static str = "3";
}

impl Polygon for Triangle {
    fn num_of_sides(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", Self::SIDES)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hexagon;

impl Hexagon {
    pub const SIDES: &'static str = "6";
}

impl Polygon for Hexagon {
    fn num_of_sides(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", Self::SIDES)
    }
}

/// Not a [`Polygon`]. It only happens to have a method of the same shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Arbitrary;

impl Arbitrary {
    pub const SIDES: &'static str = "hehehe";

    pub fn num_of_sides(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", Self::SIDES)
    }
}

crate::quacks_like_polygon!(Arbitrary);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Sides;

    fn capture(shape: &dyn Sides) -> String {
        let mut out = Vec::new();
        let () = shape.report_sides(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_triangle_reports_three() {
        assert_eq!(capture(&Triangle), "3\n");
    }

    #[test]
    fn test_hexagon_reports_six() {
        assert_eq!(capture(&Hexagon), "6\n");
    }

    #[test]
    fn test_arbitrary_reports_hehehe() {
        assert_eq!(capture(&Arbitrary), "hehehe\n");
    }

    #[test]
    fn test_each_shape_writes_one_line() {
        for shape in [&Triangle as &dyn Sides, &Hexagon, &Arbitrary] {
            let text = capture(shape);
            assert_eq!(text.lines().count(), 1, "{} wrote {text:?}", shape.shape_name());
            assert!(text.ends_with('\n'));
        }
    }

    #[test]
    fn test_arbitrary_inherent_call_matches_dispatch() {
        let mut direct = Vec::new();
        Arbitrary.num_of_sides(&mut direct).unwrap();
        assert_eq!(String::from_utf8(direct).unwrap(), capture(&Arbitrary));
    }

    #[test]
    fn test_shape_names() {
        assert_eq!(Triangle.shape_name(), "Triangle");
        assert_eq!(Hexagon.shape_name(), "Hexagon");
        assert_eq!(Arbitrary.shape_name(), "Arbitrary");
    }
}
