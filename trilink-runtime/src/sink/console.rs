use crate::scene::Scene;

use super::RenderSink;

/// Render sink writing every scene to the log.
#[derive(Default)]
pub struct LogSink;

impl RenderSink for LogSink {
    fn show(&mut self, scene: &Scene) -> crate::Result {
        log::info!("Instant {:>3}: {}", scene.instant, scene.angles);

        for frame in &scene.frames {
            log::info!("  {}", frame);
            log::trace!("  {} primitives: {}", frame.name(), frame.primitives().len());
        }

        log::debug!("Axes {} view up {}", scene.axes, scene.view_up);

        Ok(())
    }

    fn finish(&mut self) -> crate::Result {
        log::debug!("Animation finished");

        Ok(())
    }
}
