use folio_protocol::{CardFrame, FaceSide, FaceUpdate, MarqueeUpdate, Phase, SharedStr, Vec2};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::phase::{PhaseLayout, PhaseSample};
use super::tilt::Tilt;
use crate::capability::{CapabilitySource, motion_scale};
use crate::catalog::{Catalog, ProjectRecord};
use crate::config::{ConfigError, MarqueeSwitch, TimelineConfig};
use crate::motion::smoothstep;

/// Scale lost over the full exit.
const EXIT_SHRINK: f64 = 0.18;
/// Marquee travel, in percent of its height, at a quarter flip.
const MARQUEE_TRAVEL_PERCENT: f64 = 150.0;

/// Layout measurements used to turn a scroll offset into timeline steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollGeometry {
    pub scroll_y: f64,
    /// Document offset of the section top.
    pub section_top: f64,
    /// Static distance from the section top to the point where the card
    /// pins. Must come from a static anchor (the header height), never from
    /// the sticky element's offset, which moves with the scroll once pinned
    /// and would cancel the conversion out.
    pub pin_offset: f64,
    pub viewport_height: f64,
}

impl ScrollGeometry {
    /// Viewport-heights scrolled past the pin point. Negative before it.
    pub fn raw_steps(&self) -> f64 {
        (self.scroll_y - self.section_top - self.pin_offset) / self.viewport_height.max(1.0)
    }
}

/// One tick's worth of output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutput {
    pub frame: CardFrame,
    /// Faces whose project changed since the last tick.
    pub faces: Vec<FaceUpdate>,
    pub marquee: Option<MarqueeUpdate>,
}

#[derive(Debug, Clone, Default)]
struct AppliedKeys {
    front: Option<SharedStr>,
    back: Option<SharedStr>,
    marquee: Option<SharedStr>,
}

/// Select-works flip card: maps scroll and pointer input to a
/// [`CardFrame`] per animation frame.
///
/// One instance per mounted card. The only history carried between ticks
/// is the smoothed tilt and the keys of the content last handed out.
#[derive(Debug, Clone)]
pub struct TimelineEngine {
    config: TimelineConfig,
    catalog: Catalog,
    marquee_keys: Vec<SharedStr>,
    layout: PhaseLayout,
    motion_scale: f64,
    reduced_motion: bool,
    raw_steps: f64,
    tilt: Tilt,
    last_phase: Option<Phase>,
    applied: AppliedKeys,
}

impl TimelineEngine {
    pub fn new(config: TimelineConfig, catalog: Catalog) -> Result<Self, ConfigError> {
        config.validate()?;
        if catalog.is_empty() {
            warn!("timeline catalog is empty, card stays idle");
        }
        let layout = PhaseLayout::new(&config, catalog.len());
        let marquee_keys = catalog
            .projects()
            .iter()
            .map(ProjectRecord::display_marquee_key)
            .collect();
        Ok(Self {
            config,
            catalog,
            marquee_keys,
            layout,
            motion_scale: 1.0,
            reduced_motion: false,
            raw_steps: 0.0,
            tilt: Tilt::default(),
            last_phase: None,
            applied: AppliedKeys::default(),
        })
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn layout(&self) -> &PhaseLayout {
        &self.layout
    }

    pub fn motion_scale(&self) -> f64 {
        self.motion_scale
    }

    /// Re-read capability signals. Call at mount and on viewport resize.
    pub fn set_capabilities(&mut self, source: &impl CapabilitySource) {
        self.reduced_motion = source.prefers_reduced_motion();
        self.motion_scale = motion_scale(source, self.config.touch_motion_scale);
        self.tilt.retarget(self.config.tilt_range, self.motion_scale);
        debug!(
            reduced_motion = self.reduced_motion,
            motion_scale = self.motion_scale,
            "capabilities updated"
        );
    }

    /// Record the latest scroll position as raw steps. Applied on the next tick.
    pub fn scroll_to(&mut self, raw_steps: f64) {
        self.raw_steps = raw_steps;
    }

    pub fn scroll(&mut self, geometry: &ScrollGeometry) {
        self.scroll_to(geometry.raw_steps());
    }

    pub fn raw_steps(&self) -> f64 {
        self.raw_steps
    }

    /// Pointer over the card, normalised to the card's bounds.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.tilt.set_pointer(
            Some(Vec2::new(x, y)),
            self.config.tilt_range,
            self.motion_scale,
        );
    }

    pub fn pointer_leave(&mut self) {
        self.tilt.set_pointer(None, self.config.tilt_range, self.motion_scale);
    }

    /// Advance the tilt one frame, build the frame, and collect content that
    /// changed since the previous tick.
    pub fn tick(&mut self) -> FrameOutput {
        self.tilt.step(self.config.spring_factor);
        let sample = self.layout.sample(self.raw_steps);
        if self.last_phase != Some(sample.phase) {
            debug!(from = ?self.last_phase, to = ?sample.phase, progress = sample.progress, "phase change");
            self.last_phase = Some(sample.phase);
        }

        let frame = self.build_frame(&sample);
        trace!(
            progress = frame.progress,
            angle = frame.angle,
            front = frame.front_index,
            "tick"
        );

        let mut faces = Vec::new();
        let mut marquee = None;
        if !self.catalog.is_empty() {
            faces.extend(self.face_update(FaceSide::Front, frame.front_index));
            faces.extend(self.face_update(FaceSide::Back, frame.back_index));
            marquee = self.marquee_update(frame.visible_index);
        }

        FrameOutput {
            frame,
            faces,
            marquee,
        }
    }

    /// Frame for the current input without advancing the tilt or touching
    /// the applied-content cache.
    pub fn peek(&self) -> CardFrame {
        self.build_frame(&self.layout.sample(self.raw_steps))
    }

    /// Forget which content was handed out, so the next tick re-sends both
    /// faces and the marquee (after the render targets were rebuilt).
    pub fn invalidate_content(&mut self) {
        self.applied = AppliedKeys::default();
    }

    fn build_frame(&self, sample: &PhaseSample) -> CardFrame {
        let count = self.catalog.len();
        if count == 0 {
            return CardFrame::idle();
        }

        let angle = if sample.phase == Phase::Rotation {
            sample.local * 180.0
        } else {
            0.0
        };
        let effective_angle = if self.reduced_motion { 0.0 } else { angle };

        let front_index = sample.segment % count;
        let back_index = (front_index + 1) % count;
        let flipped = sample.phase == Phase::Rotation
            && self.config.marquee_switch == MarqueeSwitch::Midpoint
            && sample.local >= 0.5;
        let visible_index = if flipped { back_index } else { front_index };

        let (opacity, scale) = if sample.phase == Phase::Exit {
            let eased = smoothstep(0.0, 1.0, sample.exit);
            (1.0 - eased, 1.0 - eased * EXIT_SHRINK)
        } else {
            (1.0, 1.0)
        };

        CardFrame {
            phase: sample.phase,
            progress: sample.progress,
            angle,
            effective_angle,
            tilt: self.tilt.current(),
            drift: self.tilt.drift(self.config.drift_range, self.config.tilt_range),
            glare: self.tilt.glare(),
            opacity,
            scale,
            header_opacity: 1.0 - sample.lead,
            card_offset: 1.0 - sample.lead,
            marquee_opacity: opacity,
            marquee_offset_percent: marquee_offset(effective_angle),
            front_index,
            back_index,
            visible_index,
            marquee_key: self.marquee_keys[visible_index].clone(),
        }
    }

    fn face_update(&mut self, side: FaceSide, index: usize) -> Option<FaceUpdate> {
        let project = self.catalog.get_clamped(index as i64)?;
        let slot = match side {
            FaceSide::Front => &mut self.applied.front,
            FaceSide::Back => &mut self.applied.back,
        };
        if slot.as_ref() == Some(&project.id) {
            return None;
        }
        *slot = Some(project.id.clone());
        debug!(?side, index, id = %project.id, "face content");
        Some(FaceUpdate {
            side,
            index,
            id: project.id.clone(),
            title: project.title.clone(),
            tags: project.tags.clone(),
            images: project.images.clone(),
        })
    }

    fn marquee_update(&mut self, index: usize) -> Option<MarqueeUpdate> {
        let key = self.marquee_keys.get(index)?;
        if self.applied.marquee.as_ref() == Some(key) {
            return None;
        }
        self.applied.marquee = Some(key.clone());
        debug!(index, key = %key, "marquee key");
        Some(MarqueeUpdate {
            index,
            key: key.clone(),
        })
    }
}

/// Marquee slides up and out over the first quarter flip, then back in
/// from below.
fn marquee_offset(angle: f64) -> f64 {
    if angle <= 90.0 {
        -(angle / 90.0) * MARQUEE_TRAVEL_PERCENT
    } else {
        (1.0 - (angle - 90.0) / 90.0) * MARQUEE_TRAVEL_PERCENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capabilities;
    use crate::motion::approx_eq;

    fn engine() -> TimelineEngine {
        let config = TimelineConfig {
            lead_segments: 2,
            hold_segments: 1,
            exit_segments: 1,
            ..TimelineConfig::default()
        };
        TimelineEngine::new(config, Catalog::select_works()).expect("test config is valid")
    }

    #[test]
    fn geometry_guards_zero_viewport() {
        let g = ScrollGeometry {
            scroll_y: 500.0,
            section_top: 200.0,
            pin_offset: 100.0,
            viewport_height: 0.0,
        };
        assert_eq!(g.raw_steps(), 200.0);
        let g = ScrollGeometry {
            viewport_height: 100.0,
            ..g
        };
        assert_eq!(g.raw_steps(), 2.0);
    }

    #[test]
    fn first_tick_sends_both_faces_and_marquee() {
        let mut e = engine();
        let out = e.tick();
        assert_eq!(out.faces.len(), 2);
        assert_eq!(out.faces[0].side, FaceSide::Front);
        assert_eq!(out.faces[0].id, "sonix");
        assert_eq!(out.faces[1].id, "imessage");
        assert_eq!(out.marquee.map(|m| m.key), Some(SharedStr::from("SONIX")));

        let again = e.tick();
        assert!(again.faces.is_empty());
        assert!(again.marquee.is_none());
    }

    #[test]
    fn only_changed_face_is_resent() {
        let mut e = engine();
        e.tick();
        e.scroll_to(4.2);
        let out = e.tick();
        // front 1 (imessage), back 2 (sealove): both changed
        assert_eq!(out.faces.len(), 2);
        e.scroll_to(4.8);
        let out = e.tick();
        assert!(out.faces.is_empty());
        assert_eq!(out.marquee.map(|m| m.index), Some(2));
    }

    #[test]
    fn invalidate_resends_content() {
        let mut e = engine();
        e.tick();
        e.invalidate_content();
        assert_eq!(e.tick().faces.len(), 2);
    }

    #[test]
    fn marquee_offset_curve() {
        assert_eq!(marquee_offset(0.0), 0.0);
        assert!(approx_eq(marquee_offset(45.0), -75.0));
        assert!(approx_eq(marquee_offset(90.0), -150.0));
        assert!(approx_eq(marquee_offset(135.0), 75.0));
        assert!(approx_eq(marquee_offset(180.0), 0.0));
    }

    #[test]
    fn lead_in_fades_header() {
        let mut e = engine();
        e.scroll_to(0.0);
        assert_eq!(e.peek().header_opacity, 1.0);
        e.scroll_to(1.0);
        assert!(approx_eq(e.peek().header_opacity, 0.5));
        e.scroll_to(2.5);
        let frame = e.peek();
        assert_eq!(frame.phase, Phase::Hold);
        assert_eq!(frame.header_opacity, 0.0);
        assert_eq!(frame.angle, 0.0);
        assert_eq!(frame.front_index, 0);
    }

    #[test]
    fn flip_complete_policy_keeps_front_dominant() {
        let config = TimelineConfig {
            lead_segments: 2,
            hold_segments: 1,
            exit_segments: 1,
            marquee_switch: MarqueeSwitch::FlipComplete,
            ..TimelineConfig::default()
        };
        let mut e =
            TimelineEngine::new(config, Catalog::select_works()).expect("test config is valid");
        e.scroll_to(3.9);
        let frame = e.peek();
        assert_eq!(frame.visible_index, 0);
        assert_eq!(frame.marquee_key, "SONIX");
        e.scroll_to(4.0);
        assert_eq!(e.peek().visible_index, 1);
    }

    #[test]
    fn touch_devices_get_scaled_tilt() {
        let mut e = engine();
        e.set_capabilities(&Capabilities {
            reduced_motion: false,
            touch_only: true,
        });
        e.pointer_move(1.0, 0.5);
        let mut frame = e.tick().frame;
        for _ in 0..400 {
            frame = e.tick().frame;
        }
        assert!((frame.tilt.y - 15.0 * 0.45).abs() < 1e-6);
        assert!(frame.glare.opacity > 0.9);
    }

    #[test]
    fn empty_catalog_is_idle() {
        let mut e = TimelineEngine::new(TimelineConfig::default(), Catalog::default())
            .expect("default config is valid");
        e.scroll_to(2.0);
        e.pointer_move(0.2, 0.2);
        let out = e.tick();
        assert_eq!(out.frame, CardFrame::idle());
        assert!(out.faces.is_empty());
        assert!(out.marquee.is_none());
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let config = TimelineConfig {
            spring_factor: -0.1,
            ..TimelineConfig::default()
        };
        assert!(TimelineEngine::new(config, Catalog::select_works()).is_err());
    }
}
