//! # Distance evaluator
//!
//! Euclidean distance in 3D between anything that can expose a position:
//! stored [`StarRecord`]s (whose coordinates are parsed on demand) and plain
//! [`Position`] vectors used for ad-hoc query points.
use crate::{constants::Position, stars::StarRecord, starbot_errors::StarbotError};

/// Something located in the 3D star space.
pub trait Located {
    fn position(&self) -> Result<Position, StarbotError>;
}

impl Located for StarRecord {
    fn position(&self) -> Result<Position, StarbotError> {
        StarRecord::position(self)
    }
}

impl Located for Position {
    fn position(&self) -> Result<Position, StarbotError> {
        Ok(*self)
    }
}

/// Euclidean norm of `a - b`.
pub fn euclidean_distance(a: &Position, b: &Position) -> f64 {
    (a - b).norm()
}

/// Distance between two located items.
///
/// Return
/// ------
/// * The non-negative distance, or [`StarbotError::ParseError`] if either side
///   holds a non-numeric coordinate (`a` is checked first)
pub fn distance_between<A, B>(a: &A, b: &B) -> Result<f64, StarbotError>
where
    A: Located + ?Sized,
    B: Located + ?Sized,
{
    let a = a.position()?;
    let b = b.position()?;
    Ok(euclidean_distance(&a, &b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_3_4_5() {
        let a = StarRecord::new("0", "A", 0.0, 0.0, 0.0);
        let b = StarRecord::new("1", "B", 3.0, 4.0, 0.0);
        assert_relative_eq!(distance_between(&a, &b).unwrap(), 5.0);
    }

    #[test]
    fn test_symmetry_and_identity() {
        let a = StarRecord::new("0", "A", 1.5, -2.25, 10.0);
        let b = StarRecord::new("1", "B", -7.0, 0.125, 3.5);
        assert_eq!(
            distance_between(&a, &b).unwrap(),
            distance_between(&b, &a).unwrap()
        );
        assert_eq!(distance_between(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_record_against_raw_position() {
        let star = StarRecord::new("0", "A", 1.0, 2.0, 2.0);
        let origin = Position::zeros();
        assert_relative_eq!(distance_between(&origin, &star).unwrap(), 3.0);
    }

    #[test]
    fn test_non_numeric_coordinate() {
        let good = StarRecord::new("0", "A", 0.0, 0.0, 0.0);
        let bad = StarRecord::from_fields("1,B,1,2,three".split(','));
        assert_eq!(
            distance_between(&good, &bad),
            Err(StarbotError::parse_error("z", "three"))
        );
    }
}
