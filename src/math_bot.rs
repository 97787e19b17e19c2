//! Two-argument arithmetic used by the `add` and `subtract` commands.
use crate::{stars::star_record::parse_number, starbot_errors::StarbotError};

#[derive(Debug, Default, Clone, Copy)]
pub struct MathBot;

impl MathBot {
    pub fn new() -> Self {
        MathBot
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    /// Parse both operands, then apply `op`.
    pub(crate) fn apply(
        &self,
        op: fn(&Self, f64, f64) -> f64,
        a: &str,
        b: &str,
    ) -> Result<f64, StarbotError> {
        let a = parse_number("operand", a)?;
        let b = parse_number("operand", b)?;
        Ok(op(self, a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_addition() {
        let bot = MathBot::new();
        assert_relative_eq!(bot.add(10.5, 3.0), 13.5);
        assert_relative_eq!(bot.add(100000.0, 200303.0), 300303.0);
        assert_relative_eq!(bot.add(999999.0, 1.0), 1000000.0);
        assert_relative_eq!(bot.add(1.5, 2.0), 3.5);
    }

    #[test]
    fn test_subtraction() {
        let bot = MathBot::new();
        assert_relative_eq!(bot.subtract(18.0, 17.0), 1.0);
        assert_relative_eq!(bot.subtract(1.0, 1.0), 0.0);
        assert_relative_eq!(bot.subtract(1.0, 2.0), -1.0);
    }

    #[test]
    fn test_apply_parses_operands() {
        let bot = MathBot::new();
        assert_relative_eq!(bot.apply(MathBot::add, "10.5", "3").unwrap(), 13.5);
        assert_eq!(
            bot.apply(MathBot::subtract, "1", "two"),
            Err(StarbotError::parse_error("operand", "two"))
        );
    }
}
