use trilink_core::{frame::FrameObject, Axis, JointAngles};

/// Visible range of the coordinate axes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxesRange {
    pub x: (f32, f32),
    pub y: (f32, f32),
    pub z: (f32, f32),
}

impl From<&crate::SceneConfig> for AxesRange {
    fn from(config: &crate::SceneConfig) -> Self {
        Self {
            x: (config.x_range[0], config.x_range[1]),
            y: (config.y_range[0], config.y_range[1]),
            z: (config.z_range[0], config.z_range[1]),
        }
    }
}

impl std::fmt::Display for AxesRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X [{:.1}, {:.1}] Y [{:.1}, {:.1}] Z [{:.1}, {:.1}]",
            self.x.0, self.x.1, self.y.0, self.y.1, self.z.0, self.z.1
        )
    }
}

/// Everything a renderer needs to draw one animation instant.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Index of the instant in the animation.
    pub instant: usize,
    /// Joint angles the frames were evaluated at.
    pub angles: JointAngles,
    /// Positioned joint frames, base first.
    pub frames: Vec<FrameObject>,
    /// Visible axes range.
    pub axes: AxesRange,
    /// Camera up direction.
    pub view_up: Axis,
}
