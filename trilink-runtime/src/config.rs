use std::path::Path;

use trilink_core::{
    arm::LINK_RADIUS,
    chain::{BASE_OFFSET, LINK1_LENGTH, LINK2_LENGTH},
    trajectory::DEFAULT_FRAMES,
    Axis,
};

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Number of animation instants.
    pub frames: usize,
    /// Joint angle of the first instant in degrees.
    pub start: f32,
    /// Joint angle the sweep moves towards in degrees, excluded.
    pub end: f32,
    /// Delay after each instant in milliseconds.
    pub interval: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            start: 0.0,
            end: 360.0,
            interval: crate::consts::DEFAULT_INTERVAL,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ArmConfig {
    /// Position of the first joint in the world frame.
    pub base: [f32; 3],
    /// Length of the first and second link.
    pub link_lengths: [f32; 2],
    /// Radius of the link cylinders.
    pub link_radius: f32,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            base: BASE_OFFSET,
            link_lengths: [LINK1_LENGTH, LINK2_LENGTH],
            link_radius: LINK_RADIUS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub x_range: [f32; 2],
    pub y_range: [f32; 2],
    pub z_range: [f32; 2],
    /// Camera up direction.
    pub view_up: Axis,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            x_range: [0.0, 20.0],
            y_range: [-2.0, 10.0],
            z_range: [0.0, 6.0],
            view_up: Axis::Z,
        }
    }
}

/// Trilink configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Animation configuration.
    pub animation: AnimationConfig,
    /// Arm geometry.
    pub arm: ArmConfig,
    /// Scene configuration.
    pub scene: SceneConfig,
}

impl std::str::FromStr for Config {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Read a configuration from a TOML file.
pub fn from_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> crate::Result<T> {
    let contents = std::fs::read_to_string(path)?;

    Ok(toml::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config: Config = "".parse().unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.animation.frames, 100);
        assert_eq!(config.animation.interval, 300);
        assert_eq!(config.arm.base, [3.0, 2.0, 0.0]);
        assert_eq!(config.arm.link_lengths, [5.0, 8.0]);
        assert_eq!(config.scene.view_up, Axis::Z);
    }

    #[test]
    fn test_partial_config() {
        let config: Config = r#"
            [animation]
            frames = 12
            interval = 0

            [scene]
            view_up = "Y"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.animation.frames, 12);
        assert_eq!(config.animation.interval, 0);
        assert_eq!(config.animation.end, 360.0);
        assert_eq!(config.arm, ArmConfig::default());
        assert_eq!(config.scene.view_up, Axis::Y);
        assert_eq!(config.scene.x_range, [0.0, 20.0]);
    }

    #[test]
    fn test_invalid_view_up() {
        let result = r#"
            [scene]
            view_up = "w"
        "#
        .parse::<Config>();

        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("trilink_config_{}.toml", std::process::id()));
        std::fs::write(&path, "[arm]\nlink_lengths = [2.0, 3.0]\n").unwrap();

        let config: Config = from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.arm.link_lengths, [2.0, 3.0]);
        assert_eq!(config.arm.link_radius, 0.4);
    }

    #[test]
    fn test_from_file_missing() {
        let result: crate::Result<Config> = from_file("/nonexistent/trilink.toml");

        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
