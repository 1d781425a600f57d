//! Seam between the engine's value objects and whatever draws them.

use folio_protocol::{CardFrame, FaceUpdate, MarqueeUpdate};

use crate::timeline::FrameOutput;

/// Presentation adapter for the flip card. Front and back faces are two
/// independent render targets; the engine never sees them.
pub trait RenderSink {
    /// Transforms and opacities, every frame.
    fn apply_frame(&mut self, frame: &CardFrame);

    /// Title, tags, and images for one face. Only called on change.
    fn apply_face(&mut self, _update: &FaceUpdate) {}

    fn apply_marquee(&mut self, _update: &MarqueeUpdate) {}
}

impl FrameOutput {
    /// Hand content first so a face is filled before it is transformed.
    pub fn dispatch(&self, sink: &mut impl RenderSink) {
        for face in &self.faces {
            sink.apply_face(face);
        }
        if let Some(marquee) = &self.marquee {
            sink.apply_marquee(marquee);
        }
        sink.apply_frame(&self.frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::TimelineConfig;
    use crate::timeline::TimelineEngine;

    #[derive(Default)]
    struct Log(Vec<String>);

    impl RenderSink for Log {
        fn apply_frame(&mut self, frame: &CardFrame) {
            self.0.push(format!("frame {}", frame.front_index));
        }

        fn apply_face(&mut self, update: &FaceUpdate) {
            self.0.push(format!("face {}", update.id));
        }

        fn apply_marquee(&mut self, update: &MarqueeUpdate) {
            self.0.push(format!("marquee {}", update.key));
        }
    }

    #[test]
    fn content_precedes_frame() {
        let mut engine = TimelineEngine::new(TimelineConfig::default(), Catalog::select_works())
            .expect("default config is valid");
        let mut log = Log::default();
        engine.tick().dispatch(&mut log);
        assert_eq!(
            log.0,
            ["face sonix", "face imessage", "marquee SONIX", "frame 0"]
        );
    }
}
