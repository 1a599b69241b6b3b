use std::error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The axis label is not one of `x`, `y` or `z`.
    InvalidAxisLabel(String),

    /// A joint angle is NaN or infinite.
    ///
    /// The joint is identified by its position in the chain, starting at zero.
    NonFiniteAngle { joint: usize, value: f32 },

    /// Rotation or translation input has the wrong shape.
    ///
    /// Shapes are given as `(rows, columns)` for the rotation, the translation
    /// must be a 3 element column.
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// The number of joint angles does not match the number of joints.
    JointCountMismatch { expected: usize, found: usize },

    /// An arm dimension (base offset, link length or radius) is NaN or infinite.
    NonFiniteGeometry { parameter: &'static str, value: f32 },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidAxisLabel(label) => {
                write!(f, "invalid axis label '{}', expected x, y or z", label)
            }
            Error::NonFiniteAngle { joint, value } => {
                write!(f, "joint {} has a non-finite angle: {}", joint, value)
            }
            Error::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {}x{}, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            Error::JointCountMismatch { expected, found } => write!(
                f,
                "expected {} joint angles, found {}",
                expected, found
            ),
            Error::NonFiniteGeometry { parameter, value } => {
                write!(f, "arm {} is not finite: {}", parameter, value)
            }
        }
    }
}

impl error::Error for Error {}
