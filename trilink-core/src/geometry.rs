use nalgebra::Matrix3;

use crate::{Error, Result};

/// Principal axis of a coordinate frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Rotation of `angle` degrees about this axis.
    #[inline]
    pub fn rotation(self, angle: f32) -> Matrix3<f32> {
        rotation(angle, self)
    }
}

impl TryFrom<char> for Axis {
    type Error = Error;

    fn try_from(value: char) -> Result<Self> {
        match value.to_ascii_lowercase() {
            'x' => Ok(Self::X),
            'y' => Ok(Self::Y),
            'z' => Ok(Self::Z),
            _ => Err(Error::InvalidAxisLabel(value.to_string())),
        }
    }
}

impl std::str::FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Axis::try_from(c),
            _ => Err(Error::InvalidAxisLabel(s.to_string())),
        }
    }
}

impl TryFrom<String> for Axis {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Build the rotation matrix for a single rotation about a principal axis.
///
/// The angle is given in degrees and may be any finite value, it is not
/// wrapped. The returned matrix is orthonormal with determinant +1.
pub fn rotation(angle: f32, axis: Axis) -> Matrix3<f32> {
    let (s, c) = angle.to_radians().sin_cos();

    match axis {
        #[rustfmt::skip]
        Axis::X => Matrix3::new(
            1.0, 0.0, 0.0,
            0.0,   c,  -s,
            0.0,   s,   c,
        ),
        #[rustfmt::skip]
        Axis::Y => Matrix3::new(
              c, 0.0,   s,
            0.0, 1.0, 0.0,
             -s, 0.0,   c,
        ),
        #[rustfmt::skip]
        Axis::Z => Matrix3::new(
              c,  -s, 0.0,
              s,   c, 0.0,
            0.0, 0.0, 1.0,
        ),
    }
}

/// Build a rotation matrix from a textual axis label.
pub fn rotation_by_label(angle: f32, label: &str) -> Result<Matrix3<f32>> {
    Ok(rotation(angle, label.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    use nalgebra::Vector3;

    const TOLERANCE: f32 = 1e-5;

    fn assert_matrix_eq(lhs: &Matrix3<f32>, rhs: &Matrix3<f32>) {
        for (a, b) in lhs.iter().zip(rhs.iter()) {
            assert!((a - b).abs() < TOLERANCE, "{} != {}", lhs, rhs);
        }
    }

    #[test]
    fn test_rotation_orthonormal() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            for step in -36..=72 {
                let theta = step as f32 * 10.0 + 0.25;
                let r = rotation(theta, axis);

                assert_matrix_eq(&(r.transpose() * r), &Matrix3::identity());
                assert!((r.determinant() - 1.0).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_rotation_zero_is_identity() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            assert_eq!(rotation(0.0, axis), Matrix3::identity());
        }
    }

    #[test]
    fn test_rotation_inverse() {
        for theta in [1.0, 33.3, 90.0, 179.9, 270.0, 725.0] {
            let r = rotation(theta, Axis::Z) * rotation(-theta, Axis::Z);
            assert_matrix_eq(&r, &Matrix3::identity());
        }
    }

    #[test]
    fn test_rotation_conventions() {
        let x = rotation(90.0, Axis::Z) * Vector3::x();
        assert!((x - Vector3::y()).norm() < TOLERANCE);

        let y = rotation(90.0, Axis::X) * Vector3::y();
        assert!((y - Vector3::z()).norm() < TOLERANCE);

        let z = rotation(90.0, Axis::Y) * Vector3::z();
        assert!((z - Vector3::x()).norm() < TOLERANCE);
    }

    #[test]
    fn test_axis_parse() {
        assert_eq!("x".parse::<Axis>(), Ok(Axis::X));
        assert_eq!("Y".parse::<Axis>(), Ok(Axis::Y));
        assert_eq!(Axis::try_from('z'), Ok(Axis::Z));

        assert_eq!(
            "w".parse::<Axis>(),
            Err(Error::InvalidAxisLabel("w".to_string()))
        );
        assert!("".parse::<Axis>().is_err());
        assert!("xy".parse::<Axis>().is_err());
    }

    #[test]
    fn test_rotation_by_label() {
        assert_eq!(
            rotation_by_label(30.0, "z").unwrap(),
            rotation(30.0, Axis::Z)
        );
        assert!(matches!(
            rotation_by_label(30.0, "q"),
            Err(Error::InvalidAxisLabel(_))
        ));
    }
}
