use crate::{
    chain::{Chain, BASE_OFFSET, LINK1_LENGTH, LINK2_LENGTH},
    frame::{Color, FrameObject},
    trajectory::JointAngles,
    Error, Result,
};

/// Radius of the link cylinders and the base sphere.
pub const LINK_RADIUS: f32 = 0.4;

/// Geometry drawn in a joint frame.
#[derive(Clone, Debug, Default, PartialEq)]
struct FrameGeometry {
    link: Option<(f32, f32, Color)>,
    base_sphere: Option<f32>,
}

impl FrameGeometry {
    fn build(&self, name: &str) -> FrameObject {
        let mut frame = FrameObject::coordinate_frame(name);

        if let Some((length, radius, color)) = self.link {
            frame = frame.with_link(length, radius, color);
        }
        if let Some(radius) = self.base_sphere {
            frame = frame.with_base_sphere(radius);
        }

        frame
    }
}

/// Planar three link manipulator.
///
/// Couples the kinematic chain with the geometry drawn in each joint frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Arm {
    chain: Chain,
    geometry: Vec<FrameGeometry>,
}

impl Arm {
    /// Construct the arm.
    ///
    /// Fails if any base coordinate, link length or the link radius is NaN or
    /// infinite.
    pub fn new(base: [f32; 3], link_lengths: [f32; 2], link_radius: f32) -> Result<Self> {
        let dimensions = base
            .iter()
            .map(|value| ("base", *value))
            .chain(link_lengths.iter().map(|value| ("link length", *value)))
            .chain(std::iter::once(("link radius", link_radius)));

        for (parameter, value) in dimensions {
            if !value.is_finite() {
                return Err(Error::NonFiniteGeometry { parameter, value });
            }
        }

        Ok(Self::build(base, link_lengths, link_radius))
    }

    fn build(base: [f32; 3], link_lengths: [f32; 2], link_radius: f32) -> Self {
        let [link1_length, link2_length] = link_lengths;

        Self {
            chain: Chain::planar_arm(base, link1_length, link2_length),
            geometry: vec![
                FrameGeometry {
                    link: Some((link1_length, link_radius, Color::Yellow)),
                    base_sphere: Some(link_radius),
                },
                FrameGeometry {
                    link: Some((link2_length, link_radius, Color::Red)),
                    base_sphere: None,
                },
                FrameGeometry::default(),
            ],
        }
    }

    /// Position the joint frames for one instant.
    ///
    /// Every call builds new frame objects, nothing is shared between calls.
    pub fn evaluate(&self, angles: &JointAngles) -> Result<Vec<FrameObject>> {
        let poses = self.chain.world_transformations(&angles.as_array())?;

        Ok(self
            .chain
            .joints()
            .iter()
            .zip(&self.geometry)
            .zip(&poses)
            .map(|((joint, geometry), pose)| geometry.build(joint.name()).apply_transform(pose))
            .collect())
    }
}

impl Default for Arm {
    fn default() -> Self {
        Self::build(BASE_OFFSET, [LINK1_LENGTH, LINK2_LENGTH], LINK_RADIUS)
    }
}
