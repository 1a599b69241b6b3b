//! Render sinks.
//!
//! A sink receives every scene of the animation in order. Drawing the frames
//! is up to the sink, the runtime only guarantees the call order.

pub use self::console::LogSink;
pub use self::trace::CsvSink;

mod console;
mod trace;

use crate::scene::Scene;

pub trait RenderSink {
    /// Display a single scene.
    ///
    /// This method is called once per animation instant and should return
    /// once the scene is handed off.
    fn show(&mut self, scene: &Scene) -> crate::Result;

    /// Called once after the last scene.
    fn finish(&mut self) -> crate::Result {
        Ok(())
    }
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn show(&mut self, scene: &Scene) -> crate::Result {
        (**self).show(scene)
    }

    fn finish(&mut self) -> crate::Result {
        (**self).finish()
    }
}

/// Forward every scene to each sink in order.
impl RenderSink for Vec<Box<dyn RenderSink>> {
    fn show(&mut self, scene: &Scene) -> crate::Result {
        for sink in self.iter_mut() {
            sink.show(scene)?;
        }

        Ok(())
    }

    fn finish(&mut self) -> crate::Result {
        for sink in self.iter_mut() {
            sink.finish()?;
        }

        Ok(())
    }
}
