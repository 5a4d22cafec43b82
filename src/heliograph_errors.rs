use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeliographError {
    #[error("Percent {0} out of range [0, 1]")]
    PercentOutOfRange(f64),

    #[error("Spherical percent {axis} = {value} out of range [0, 1]")]
    SphericalOutOfRange { axis: char, value: f64 },

    #[error("Invalid interpolation fraction: {0}")]
    InvalidInterpolation(f64),

    #[error("Hue fraction {0} out of range [0, 1]")]
    HueOutOfRange(f64),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),
}

impl PartialEq for HeliographError {
    fn eq(&self, other: &Self) -> bool {
        use HeliographError::*;
        match (self, other) {
            (PercentOutOfRange(a), PercentOutOfRange(b)) => a == b,
            (
                SphericalOutOfRange { axis: a, value: v },
                SphericalOutOfRange { axis: b, value: w },
            ) => a == b && v == w,
            (InvalidInterpolation(a), InvalidInterpolation(b)) => a == b,
            (HueOutOfRange(a), HueOutOfRange(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,

            // Not comparable by payload: equal if same variant
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            _ => false,
        }
    }
}
