//! Authoring configuration for every animated component.
//!
//! All configs deserialize from camelCase JSON with every field optional;
//! missing fields take the defaults the site ships with.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version of the [`TimelineConfig`] schema this build understands.
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported timeline config version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Whether the exit segments count toward the clamped progress range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClampPolicy {
    /// `total = lead + hold + projects + exit`.
    #[default]
    IncludeExit,
    /// `total = lead + hold + projects`. Exit is driven purely by raw steps.
    ExcludeExit,
}

/// When the marquee label follows the incoming project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarqueeSwitch {
    /// At half a flip, when the back face turns toward the viewer.
    #[default]
    Midpoint,
    /// Only once a flip segment has completed.
    FlipComplete,
}

/// Select-works flip card timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineConfig {
    pub version: u32,
    /// Maximum pointer tilt in degrees.
    pub tilt_range: f64,
    /// Per-frame approach rate of the tilt toward the pointer target.
    pub spring_factor: f64,
    pub touch_motion_scale: f64,
    /// Pixels of translation at full tilt.
    pub drift_range: f64,
    pub lead_segments: u32,
    pub hold_segments: u32,
    pub exit_segments: u32,
    pub clamp_policy: ClampPolicy,
    pub marquee_switch: MarqueeSwitch,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        TimelineConfig {
            version: CONFIG_VERSION,
            tilt_range: 15.0,
            spring_factor: 0.08,
            touch_motion_scale: 0.45,
            drift_range: 8.0,
            lead_segments: 1,
            hold_segments: 1,
            exit_segments: 0,
            clamp_policy: ClampPolicy::IncludeExit,
            marquee_switch: MarqueeSwitch::Midpoint,
        }
    }
}

impl TimelineConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: TimelineConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: CONFIG_VERSION,
            });
        }
        unit_range("springFactor", self.spring_factor)?;
        unit_range("touchMotionScale", self.touch_motion_scale)?;
        if !(self.tilt_range.is_finite() && self.tilt_range > 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "tiltRange",
                value: self.tilt_range,
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
            });
        }
        if !self.drift_range.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "driftRange",
                value: self.drift_range,
                min: f64::MIN,
                max: f64::MAX,
            });
        }
        Ok(())
    }
}

/// Hero pointer/scroll parallax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroConfig {
    /// Pixels of travel at the viewport edge.
    pub pointer_strength: f64,
    /// Fraction of the viewport height travelled over the hero's scroll range.
    pub scroll_strength: f64,
    pub smoothing: f64,
    pub touch_scale: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        HeroConfig {
            pointer_strength: 26.0,
            scroll_strength: 0.06,
            smoothing: 0.08,
            touch_scale: 0.45,
        }
    }
}

impl HeroConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_range("smoothing", self.smoothing)?;
        unit_range("touchScale", self.touch_scale)
    }
}

/// Works-page pinned card stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StackConfig {
    /// Viewport-heights of scroll per project.
    pub scroll_per_item: f64,
    /// Leading share of each item's scroll where nothing moves.
    pub hold_fraction: f64,
    /// Velocity (px/s) at which the boost saturates.
    pub max_velocity: f64,
    /// Largest progress boost from scroll velocity.
    pub max_boost: f64,
    pub fast_lerp: f64,
    pub slow_lerp: f64,
    /// Share of the start offset in which a landing slide floats in slowly.
    pub settle_fraction: f64,
    /// Extra hide depth below the viewport, in percent of the stack height.
    pub hide_margin_percent: f64,
    /// Weight kept from the previous velocity sample.
    pub velocity_smoothing: f64,
}

impl Default for StackConfig {
    fn default() -> Self {
        StackConfig {
            scroll_per_item: 1.5,
            hold_fraction: 0.40,
            max_velocity: 3000.0,
            max_boost: 0.40,
            fast_lerp: 0.085,
            slow_lerp: 0.025,
            settle_fraction: 0.25,
            hide_margin_percent: 15.0,
            velocity_smoothing: 0.8,
        }
    }
}

impl StackConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_range("holdFraction", self.hold_fraction)?;
        unit_range("fastLerp", self.fast_lerp)?;
        unit_range("slowLerp", self.slow_lerp)?;
        unit_range("settleFraction", self.settle_fraction)?;
        unit_range("velocitySmoothing", self.velocity_smoothing)?;
        if !(self.scroll_per_item.is_finite() && self.scroll_per_item > 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "scrollPerItem",
                value: self.scroll_per_item,
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
            });
        }
        Ok(())
    }
}

/// Lerp-smoothed custom cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CursorConfig {
    pub lerp: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        CursorConfig { lerp: 0.14 }
    }
}

impl CursorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_range("lerp", self.lerp)
    }
}

/// Works-page info panel that floats with the pointer over the image stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HoverParallaxConfig {
    /// Pixels of travel either side of the base position.
    pub range: f64,
    /// Pixels below the base where the panel rests while not hovered.
    pub rest_offset: f64,
    pub lerp: f64,
}

impl Default for HoverParallaxConfig {
    fn default() -> Self {
        HoverParallaxConfig {
            range: 80.0,
            rest_offset: 30.0,
            lerp: 0.08,
        }
    }
}

impl HoverParallaxConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_range("lerp", self.lerp)?;
        for (field, value) in [("range", self.range), ("restOffset", self.rest_offset)] {
            if !value.is_finite() {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    min: f64::MIN,
                    max: f64::MAX,
                });
            }
        }
        Ok(())
    }
}

/// Navigation pill thresholds, in pixels of page scroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavConfig {
    pub scrolled_threshold: f64,
    pub collapse_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            scrolled_threshold: 20.0,
            collapse_threshold: 100.0,
        }
    }
}

fn unit_range(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}
