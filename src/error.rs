use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeatlyError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Total cannot be zero")]
    ZeroTotal,

    #[error("Cannot represent {0} as a decimal")]
    InvalidDecimal(f64),

    #[error("Quotient does not fit in a decimal")]
    Overflow,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, NeatlyError>;
