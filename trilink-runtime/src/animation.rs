use std::time::Duration;

use trilink_core::{Arm, Axis, JointAngles, Sweep};

use crate::{
    scene::{AxesRange, Scene},
    sink::RenderSink,
    Config,
};

/// Fixed, non-interactive animation of the arm.
///
/// The animator sweeps all joints synchronously, evaluates the arm for each
/// instant and passes the scene to a render sink. Instants do not depend on
/// each other, every scene is built from scratch.
pub struct Animator {
    arm: Arm,
    frames: usize,
    start: f32,
    end: f32,
    interval: Duration,
    axes: AxesRange,
    view_up: Axis,
}

impl Animator {
    /// Construct a new animator from the configuration.
    ///
    /// Fails if the configured arm geometry is not finite.
    pub fn new(config: &Config) -> crate::Result<Self> {
        Ok(Self {
            arm: Arm::new(
                config.arm.base,
                config.arm.link_lengths,
                config.arm.link_radius,
            )?,
            frames: config.animation.frames,
            start: config.animation.start,
            end: config.animation.end,
            interval: Duration::from_millis(config.animation.interval),
            axes: AxesRange::from(&config.scene),
            view_up: config.scene.view_up,
        })
    }

    /// Joint angles for every instant of the animation.
    #[inline]
    pub fn sweep(&self) -> Sweep {
        Sweep::new(self.frames, self.start, self.end)
    }

    /// Build the scene for a single instant.
    pub fn scene(&self, instant: usize, angles: JointAngles) -> crate::Result<Scene> {
        Ok(Scene {
            instant,
            angles,
            frames: self.arm.evaluate(&angles)?,
            axes: self.axes,
            view_up: self.view_up,
        })
    }

    /// Evaluate all instants up front.
    pub fn precompute(&self) -> crate::Result<Vec<Scene>> {
        self.sweep()
            .enumerate()
            .map(|(instant, angles)| self.scene(instant, angles))
            .collect()
    }

    /// Run the animation to completion.
    ///
    /// Each scene is shown on the sink, after which the animator waits for the
    /// configured interval. The first error aborts the run. Returns the number
    /// of instants shown.
    pub async fn run<S: RenderSink + ?Sized>(&self, sink: &mut S) -> crate::Result<usize> {
        log::debug!(
            "Animating {} instants every {}ms",
            self.frames,
            self.interval.as_millis()
        );

        let mut shown = 0;

        for (instant, angles) in self.sweep().enumerate() {
            let scene = self.scene(instant, angles)?;

            sink.show(&scene)?;
            shown += 1;

            if !self.interval.is_zero() {
                tokio::time::sleep(self.interval).await;
            }
        }

        sink.finish()?;

        Ok(shown)
    }
}
