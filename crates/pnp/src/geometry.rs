use std::fmt::{Display, Formatter};
use std::ops::Neg;
use rust_decimal::Decimal;

/// A position in board space, in millimeters.
///
/// Positions are exact decimals so that values read from a board survive unchanged into the
/// placement records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: Decimal,
    pub y: Decimal,
}

impl Point {
    pub fn new(x: Decimal, y: Decimal) -> Self {
        Self {
            x,
            y,
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A rotation in degrees, counter-clockwise positive.
///
/// Angles are never normalized, `-(90)` is `-90` and not `270`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Angle(Decimal);

impl Angle {
    pub fn from_deg(degrees: Decimal) -> Self {
        Self(degrees)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Self::Output {
        // avoid a signed zero leaking into the output
        if self.0.is_zero() {
            return self
        }
        Angle(-self.0)
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use super::*;

    #[rstest]
    #[case(dec!(90), dec!(-90))]
    #[case(dec!(-45.5), dec!(45.5))]
    #[case(dec!(270), dec!(-270))]
    #[case(dec!(0), dec!(0))]
    pub fn negate(#[case] degrees: Decimal, #[case] expected_degrees: Decimal) {
        // given
        let angle = Angle::from_deg(degrees);

        // when
        let result = -angle;

        // then
        assert_eq!(result, Angle::from_deg(expected_degrees));
    }

    #[test]
    pub fn negated_zero_displays_without_sign() {
        // expect
        assert_eq!(format!("{}", -Angle::from_deg(dec!(0))), "0");
    }

    #[test]
    pub fn deserialize_point() {
        // given
        let content = r#"{ "x": "10.25", "y": -3 }"#;

        // when
        let point: Point = serde_json::from_str(content).expect("valid point");

        // then
        assert_eq!(point, Point::new(dec!(10.25), dec!(-3)));
    }
}
