use nalgebra::{Matrix4, Vector3};

use crate::{geometry::Axis, transform::compose, Error, Result};

/// Offset of the first joint relative to the world frame.
pub const BASE_OFFSET: [f32; 3] = [3.0, 2.0, 0.0];
/// Length of the first link.
pub const LINK1_LENGTH: f32 = 5.0;
/// Length of the second link.
pub const LINK2_LENGTH: f32 = 8.0;

/// A revolute joint.
///
/// The joint frame is located at `origin` in the frame of the previous joint
/// and rotates about `axis`.
#[derive(Clone, Debug, PartialEq)]
pub struct Joint {
    name: String,
    axis: Axis,
    origin: Vector3<f32>,
}

impl Joint {
    /// Construct a new joint at the parent origin.
    pub fn new(name: impl ToString, axis: Axis) -> Self {
        Self {
            name: name.to_string(),
            axis,
            origin: Vector3::zeros(),
        }
    }

    /// Place the joint at the end of a link of the given length along the
    /// parent x-axis.
    pub fn set_length(mut self, length: f32) -> Self {
        self.origin = Vector3::new(length, 0.0, 0.0);
        self
    }

    pub fn set_origin_translation(mut self, origin_x: f32, origin_y: f32, origin_z: f32) -> Self {
        self.origin = Vector3::new(origin_x, origin_y, origin_z);
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    pub fn origin(&self) -> &Vector3<f32> {
        &self.origin
    }

    /// Local transform of this joint for the given angle in degrees.
    #[inline]
    pub fn transformation(&self, angle: f32) -> Matrix4<f32> {
        compose(&self.axis.rotation(angle), &self.origin)
    }
}

/// Ordered sequence of joints from the base outward.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chain {
    joints: Vec<Joint>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three joint planar arm.
    ///
    /// All joints rotate about z. The first joint sits at `base`, the second at
    /// the end of the first link and the third at the end of the second link.
    pub fn planar_arm(base: [f32; 3], link1_length: f32, link2_length: f32) -> Self {
        let [base_x, base_y, base_z] = base;

        Self::new()
            .add_joint(Joint::new("frame1", Axis::Z).set_origin_translation(base_x, base_y, base_z))
            .add_joint(Joint::new("frame2", Axis::Z).set_length(link1_length))
            .add_joint(Joint::new("frame3", Axis::Z).set_length(link2_length))
    }

    pub fn add_joint(mut self, joint: Joint) -> Self {
        self.joints.push(joint);
        self
    }

    pub fn joint_by_name(&self, name: impl AsRef<str>) -> Option<&Joint> {
        self.joints.iter().find(|joint| joint.name == name.as_ref())
    }

    #[inline]
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    fn validate(&self, angles: &[f32]) -> Result<()> {
        if angles.len() != self.joints.len() {
            return Err(Error::JointCountMismatch {
                expected: self.joints.len(),
                found: angles.len(),
            });
        }

        if let Some((joint, value)) = angles.iter().enumerate().find(|(_, a)| !a.is_finite()) {
            return Err(Error::NonFiniteAngle {
                joint,
                value: *value,
            });
        }

        Ok(())
    }

    /// Local transform of every joint relative to its parent.
    pub fn local_transformations(&self, angles: &[f32]) -> Result<Vec<Matrix4<f32>>> {
        self.validate(angles)?;

        Ok(self
            .joints
            .iter()
            .zip(angles)
            .map(|(joint, angle)| joint.transformation(*angle))
            .collect())
    }

    /// Pose of every joint frame in the world frame.
    ///
    /// Element `k` is the product of the local transforms of joints `0..=k`.
    pub fn world_transformations(&self, angles: &[f32]) -> Result<Vec<Matrix4<f32>>> {
        Ok(self
            .local_transformations(angles)?
            .into_iter()
            .scan(Matrix4::identity(), |pose, local| {
                *pose = *pose * local;
                Some(*pose)
            })
            .collect())
    }

    /// Pose of the last joint frame in the world frame.
    pub fn world_transformation(&self, angles: &[f32]) -> Result<Matrix4<f32>> {
        Ok(self
            .local_transformations(angles)?
            .into_iter()
            .fold(Matrix4::identity(), |pose, local| pose * local))
    }
}

/// Evaluate the planar arm for one set of joint angles in degrees.
///
/// Returns the world pose of each of the three joint frames.
pub fn evaluate(phi1: f32, phi2: f32, phi3: f32) -> Result<[Matrix4<f32>; 3]> {
    let chain = Chain::planar_arm(BASE_OFFSET, LINK1_LENGTH, LINK2_LENGTH);

    chain
        .world_transformations(&[phi1, phi2, phi3])?
        .try_into()
        .map_err(|poses: Vec<_>| Error::JointCountMismatch {
            expected: 3,
            found: poses.len(),
        })
}
