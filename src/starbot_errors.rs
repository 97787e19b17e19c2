use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarbotError {
    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV reader error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unable to parse {field} as a number: {value:?}")]
    ParseError { field: String, value: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No star named {0:?} in the loaded dataset")]
    StarNotFound(String),

    #[error("Incorrect command: {0}")]
    UnknownCommand(String),
}

impl StarbotError {
    pub(crate) fn parse_error(field: impl Into<String>, value: impl Into<String>) -> Self {
        StarbotError::ParseError {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl PartialEq for StarbotError {
    fn eq(&self, other: &Self) -> bool {
        use StarbotError::*;
        match (self, other) {
            // io and csv errors are not comparable: equal if same variant
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            (
                ParseError {
                    field: fa,
                    value: va,
                },
                ParseError {
                    field: fb,
                    value: vb,
                },
            ) => fa == fb && va == vb,
            (InvalidArgument(a), InvalidArgument(b)) => a == b,
            (StarNotFound(a), StarNotFound(b)) => a == b,
            (UnknownCommand(a), UnknownCommand(b)) => a == b,

            _ => false,
        }
    }
}
