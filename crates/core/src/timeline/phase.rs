use folio_protocol::Phase;

use crate::config::{ClampPolicy, TimelineConfig};
use crate::motion::{clamp, smoothstep};

/// Segment boundaries of the pinned scroll range, in viewport-heights.
///
/// ```text
///  0      lead      lead+hold                 rotation_end        +exit
///  ├─ LeadIn ─┼── Hold ──┼─ p0 ─┼─ p1 ─┼ … ┼─ pN-1 ─┼──── Exit ────┤
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseLayout {
    lead: f64,
    hold: f64,
    exit: f64,
    projects: usize,
    policy: ClampPolicy,
}

/// Where a scroll position falls within a [`PhaseLayout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSample {
    pub phase: Phase,
    /// Clamped progress in viewport-heights.
    pub progress: f64,
    /// Rotation segment, which is also the front-face project.
    pub segment: usize,
    /// Progress within the rotation segment, `0..1`.
    pub local: f64,
    /// Eased lead-in completion, `0..=1`.
    pub lead: f64,
    /// Linear exit completion, `0..=1`, measured from unclamped raw steps.
    pub exit: f64,
}

impl PhaseLayout {
    pub fn new(config: &TimelineConfig, projects: usize) -> Self {
        Self {
            lead: f64::from(config.lead_segments),
            hold: f64::from(config.hold_segments),
            exit: f64::from(config.exit_segments),
            projects,
            policy: config.clamp_policy,
        }
    }

    pub fn projects(&self) -> usize {
        self.projects
    }

    pub fn rotation_start(&self) -> f64 {
        self.lead + self.hold
    }

    pub fn rotation_end(&self) -> f64 {
        self.rotation_start() + self.projects as f64
    }

    /// Upper bound of clamped progress.
    pub fn total(&self) -> f64 {
        match self.policy {
            ClampPolicy::IncludeExit => self.rotation_end() + self.exit,
            ClampPolicy::ExcludeExit => self.rotation_end(),
        }
    }

    /// Scroll distance over which the exit fade runs. Never shorter than one
    /// viewport-height, so a layout without exit segments still fades out as
    /// the section scrolls away.
    pub fn exit_span(&self) -> f64 {
        self.exit.max(1.0)
    }

    /// Locate `raw_steps`. Negative (and NaN) input is treated as zero.
    pub fn sample(&self, raw_steps: f64) -> PhaseSample {
        let raw = raw_steps.max(0.0);
        let progress = clamp(raw, 0.0, self.total());

        if self.projects == 0 {
            return PhaseSample {
                phase: Phase::Idle,
                progress,
                segment: 0,
                local: 0.0,
                lead: 0.0,
                exit: 0.0,
            };
        }

        let lead = if self.lead > 0.0 {
            smoothstep(0.0, self.lead, progress)
        } else {
            1.0
        };
        let exit = clamp((raw - self.rotation_end()) / self.exit_span(), 0.0, 1.0);

        let (phase, segment, local) = if progress < self.lead {
            (Phase::LeadIn, 0, 0.0)
        } else if progress < self.rotation_start() {
            (Phase::Hold, 0, 0.0)
        } else if progress < self.rotation_end() {
            let rotation = progress - self.rotation_start();
            let segment = (rotation.floor() as usize).min(self.projects - 1);
            (Phase::Rotation, segment, rotation - segment as f64)
        } else {
            // Last project stays flat. A local value of 1 here would read as
            // "flipped onto the next project" and wrap back to the first.
            (Phase::Exit, self.projects - 1, 0.0)
        };

        PhaseSample {
            phase,
            progress,
            segment,
            local,
            lead,
            exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::approx_eq;

    fn layout(lead: u32, hold: u32, exit: u32, projects: usize) -> PhaseLayout {
        let config = TimelineConfig {
            lead_segments: lead,
            hold_segments: hold,
            exit_segments: exit,
            ..TimelineConfig::default()
        };
        PhaseLayout::new(&config, projects)
    }

    #[test]
    fn boundaries() {
        let l = layout(2, 1, 1, 4);
        assert_eq!(l.rotation_start(), 3.0);
        assert_eq!(l.rotation_end(), 7.0);
        assert_eq!(l.total(), 8.0);
    }

    #[test]
    fn exclude_exit_policy_shortens_range() {
        let config = TimelineConfig {
            lead_segments: 2,
            hold_segments: 1,
            exit_segments: 1,
            clamp_policy: ClampPolicy::ExcludeExit,
            ..TimelineConfig::default()
        };
        let l = PhaseLayout::new(&config, 4);
        assert_eq!(l.total(), 7.0);
        let s = l.sample(7.5);
        assert_eq!(s.progress, 7.0);
        assert_eq!(s.phase, Phase::Exit);
        assert!(approx_eq(s.exit, 0.5));
    }

    #[test]
    fn phases_in_order() {
        let l = layout(2, 1, 1, 4);
        assert_eq!(l.sample(0.5).phase, Phase::LeadIn);
        assert_eq!(l.sample(2.5).phase, Phase::Hold);
        assert_eq!(l.sample(3.0).phase, Phase::Rotation);
        assert_eq!(l.sample(6.99).phase, Phase::Rotation);
        assert_eq!(l.sample(7.0).phase, Phase::Exit);
        assert_eq!(l.sample(100.0).phase, Phase::Exit);
    }

    #[test]
    fn rotation_segments() {
        let l = layout(2, 1, 1, 4);
        let s = l.sample(4.25);
        assert_eq!(s.segment, 1);
        assert!(approx_eq(s.local, 0.25));
        let s = l.sample(6.5);
        assert_eq!(s.segment, 3);
        assert!(approx_eq(s.local, 0.5));
    }

    #[test]
    fn negative_and_nan_clamp_to_start() {
        let l = layout(2, 1, 1, 4);
        assert_eq!(l.sample(-5.0), l.sample(0.0));
        assert_eq!(l.sample(f64::NAN), l.sample(0.0));
    }

    #[test]
    fn exit_tracks_raw_past_clamp() {
        let l = layout(1, 1, 0, 4);
        // total == rotation_end == 6, but the fade keeps going.
        let s = l.sample(6.5);
        assert_eq!(s.progress, 6.0);
        assert!(approx_eq(s.exit, 0.5));
        assert_eq!(l.sample(9.0).exit, 1.0);
    }

    #[test]
    fn lead_easing_without_lead_segments() {
        let l = layout(0, 1, 0, 2);
        assert_eq!(l.sample(0.0).lead, 1.0);
        assert_eq!(l.sample(0.0).phase, Phase::Hold);
        let l = layout(2, 1, 0, 2);
        assert!(approx_eq(l.sample(1.0).lead, 0.5));
    }

    #[test]
    fn empty_layout_is_idle() {
        let l = layout(1, 1, 1, 0);
        assert_eq!(l.sample(3.0).phase, Phase::Idle);
    }
}
