use nalgebra::{DMatrix, DVector, Matrix3, Matrix4, Point3, Rotation3, Vector3};

use crate::{Error, Result};

/// Compose a rotation and a translation into a homogeneous transform.
///
/// The result expresses the pose of a child frame in the coordinates of its
/// parent: `[R t; 0 0 0 1]`.
pub fn compose(rotation: &Matrix3<f32>, translation: &Vector3<f32>) -> Matrix4<f32> {
    let mut transform = Matrix4::identity();

    transform.fixed_view_mut::<3, 3>(0, 0).copy_from(rotation);
    transform.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);

    transform
}

/// Compose a rotation and a translation of runtime size.
///
/// Fails unless the rotation is 3x3 and the translation holds exactly 3
/// elements.
pub fn compose_dynamic(
    rotation: &DMatrix<f32>,
    translation: &DVector<f32>,
) -> Result<Matrix4<f32>> {
    if rotation.shape() != (3, 3) {
        return Err(Error::DimensionMismatch {
            expected: (3, 3),
            found: rotation.shape(),
        });
    }
    if translation.len() != 3 {
        return Err(Error::DimensionMismatch {
            expected: (3, 1),
            found: translation.shape(),
        });
    }

    let rotation = Matrix3::from_iterator(rotation.iter().copied());
    let translation = Vector3::from_iterator(translation.iter().copied());

    Ok(compose(&rotation, &translation))
}

/// Origin of the frame described by the transform.
#[inline]
pub fn origin(transform: &Matrix4<f32>) -> Point3<f32> {
    transform.transform_point(&Point3::origin())
}

/// Roll, pitch and yaw of the transform in degrees.
pub fn euler_angles(transform: &Matrix4<f32>) -> (f32, f32, f32) {
    let rotation =
        Rotation3::from_matrix_unchecked(transform.fixed_view::<3, 3>(0, 0).into_owned());
    let (roll, pitch, yaw) = rotation.euler_angles();

    (roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees())
}
