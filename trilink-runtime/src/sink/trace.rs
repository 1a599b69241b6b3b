use std::{fs::File, io::Write, path::Path};

use trilink_core::transform::euler_angles;

use crate::scene::Scene;

use super::RenderSink;

#[derive(serde::Serialize)]
struct TraceRecord<'a> {
    instant: usize,
    frame: &'a str,
    phi1: f32,
    phi2: f32,
    phi3: f32,
    x: f32,
    y: f32,
    z: f32,
    yaw: f32,
}

/// Render sink recording the frame poses to CSV.
///
/// One row is written for every frame of every scene.
pub struct CsvSink<W: Write = File> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        Ok(Self::from_writer(File::create(path)?))
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(writer: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::NonNumeric)
            .has_headers(true)
            .from_writer(writer);

        Self { writer }
    }
}

impl<W: Write> RenderSink for CsvSink<W> {
    fn show(&mut self, scene: &Scene) -> crate::Result {
        for frame in &scene.frames {
            let origin = frame.origin();
            let (_, _, yaw) = euler_angles(frame.pose());

            self.writer.serialize(TraceRecord {
                instant: scene.instant,
                frame: frame.name(),
                phi1: scene.angles.phi1,
                phi2: scene.angles.phi2,
                phi3: scene.angles.phi3,
                x: origin.x,
                y: origin.y,
                z: origin.z,
                yaw,
            })?;
        }

        Ok(())
    }

    fn finish(&mut self) -> crate::Result {
        Ok(self.writer.flush()?)
    }
}
