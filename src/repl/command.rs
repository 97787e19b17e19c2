//! # REPL commands
//!
//! | Command                               | Effect                                   |
//! |---------------------------------------|------------------------------------------|
//! | `add <a> <b>`                         | print `a + b`                            |
//! | `subtract <a> <b>`                    | print `a - b`                            |
//! | `stars <path>`                        | load a star CSV, print the store size    |
//! | `naive_neighbors <k> <name>`          | k nearest stars to a named star          |
//! | `naive_neighbors <k> <x> <y> <z>`     | k nearest stars to a point               |
use camino::Utf8PathBuf;

use super::tokenizer::tokenize;
use crate::{neighbors::NeighborQuery, starbot_errors::StarbotError};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(String, String),
    Subtract(String, String),
    Stars(Utf8PathBuf),
    NaiveNeighbors(NeighborQuery),
}

impl Command {
    /// Parse one input line.
    ///
    /// Return
    /// ------
    /// * `Ok(None)` for a blank line
    /// * `Ok(Some(command))` for a well-formed command
    /// * [`StarbotError::UnknownCommand`] for an unknown verb,
    ///   [`StarbotError::InvalidArgument`] for a wrong number of arguments, or
    ///   [`StarbotError::ParseError`] for non-numeric neighbor arguments
    pub fn parse(line: &str) -> Result<Option<Command>, StarbotError> {
        let tokens = tokenize(line);
        let Some((verb, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match verb.as_str() {
            "add" => {
                let [a, b] = operands(verb, args)?;
                Command::Add(a, b)
            }
            "subtract" => {
                let [a, b] = operands(verb, args)?;
                Command::Subtract(a, b)
            }
            "stars" => match args {
                [path] => Command::Stars(Utf8PathBuf::from(path.trim_matches('"'))),
                _ => {
                    return Err(StarbotError::InvalidArgument(format!(
                        "stars expects a single path, got {} argument(s)",
                        args.len()
                    )))
                }
            },
            "naive_neighbors" => Command::NaiveNeighbors(NeighborQuery::from_args(args)?),
            other => return Err(StarbotError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn operands(verb: &str, args: &[String]) -> Result<[String; 2], StarbotError> {
    match args {
        [a, b] => Ok([a.clone(), b.clone()]),
        _ => Err(StarbotError::InvalidArgument(format!(
            "{verb} expects two operands, got {} argument(s)",
            args.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::QueryPoint;

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(
            Command::parse("add 10.5 3").unwrap(),
            Some(Command::Add("10.5".into(), "3".into()))
        );
        assert!(matches!(
            Command::parse("subtract 1"),
            Err(StarbotError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_stars_path() {
        assert_eq!(
            Command::parse("stars \"data/my stars.csv\"").unwrap(),
            Some(Command::Stars("data/my stars.csv".into()))
        );
        assert!(Command::parse("stars").is_err());
    }

    #[test]
    fn test_naive_neighbors() {
        assert_eq!(
            Command::parse("naive_neighbors 4 \"Lonely Star\"").unwrap(),
            Some(Command::NaiveNeighbors(NeighborQuery::new(
                4,
                QueryPoint::Named("Lonely Star".into())
            )))
        );
        assert!(matches!(
            Command::parse("naive_neighbors 4 Lonely Star"),
            Err(StarbotError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_unknown_verb() {
        assert_eq!(
            Command::parse("multiply 2 3"),
            Err(StarbotError::UnknownCommand("multiply".into()))
        );
    }
}
