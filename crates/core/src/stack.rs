//! Works-page gallery: a pinned stack where each next slide rises over
//! the previous one.
//!
//! Every project gets `scroll_per_item` viewport-heights of scroll. The
//! first `hold_fraction` of that is solo screen time; in the rest, the next
//! slide travels up from below the viewport. Scroll velocity pulls only the
//! slide that is mid-transition, and a landing slide floats into place at a
//! slower rate.

use folio_protocol::StackFrame;

use crate::config::{HoverParallaxConfig, StackConfig};
use crate::motion::{approach, clamp, lerp};

#[derive(Debug, Clone)]
pub struct CardStack {
    config: StackConfig,
    slides: usize,
    viewport_height: f64,
    start_offset: f64,
    current: Vec<f64>,
    velocity: f64,
    last_scroll: Option<f64>,
    scroll: f64,
    hovered: Option<usize>,
}

impl CardStack {
    /// `bottom_percent` is the distance from the stack's top to the viewport
    /// bottom, in percent of the stack height. Incoming slides start
    /// `hide_margin_percent` below that.
    pub fn new(config: StackConfig, slides: usize, viewport_height: f64, bottom_percent: f64) -> Self {
        let start_offset = bottom_percent + config.hide_margin_percent;
        let current = (0..slides)
            .map(|i| if i == 0 { 0.0 } else { start_offset })
            .collect();
        Self {
            config,
            slides,
            viewport_height: viewport_height.max(1.0),
            start_offset,
            current,
            velocity: 0.0,
            last_scroll: None,
            scroll: 0.0,
            hovered: None,
        }
    }

    pub fn transitions(&self) -> usize {
        self.slides.saturating_sub(1)
    }

    fn item_distance(&self) -> f64 {
        self.viewport_height * self.config.scroll_per_item
    }

    fn hold_distance(&self) -> f64 {
        self.item_distance() * self.config.hold_fraction
    }

    /// Pixels of scroll over which the stack is pinned.
    pub fn pinned_distance(&self) -> f64 {
        self.transitions() as f64 * self.item_distance()
    }

    /// Record a scroll position and `dt_ms` since the previous event.
    pub fn on_scroll(&mut self, scroll: f64, dt_ms: f64) {
        if let Some(last) = self.last_scroll
            && dt_ms > 0.0
        {
            let raw = (scroll - last) * (1000.0 / dt_ms);
            let keep = self.config.velocity_smoothing;
            self.velocity = self.velocity * keep + raw * (1.0 - keep);
        }
        self.last_scroll = Some(scroll);
        self.scroll = scroll.max(0.0);
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// A slide under the pointer overrides the scroll-derived info panel.
    pub fn set_hovered(&mut self, slide: Option<usize>) {
        self.hovered = slide.filter(|&s| s < self.slides);
    }

    /// Un-boosted transition progress of slide `i` (slide 0 never moves).
    pub fn slide_progress(&self, i: usize) -> f64 {
        if i == 0 || i >= self.slides {
            return 0.0;
        }
        let start = (i - 1) as f64 * self.item_distance() + self.hold_distance();
        let span = (self.item_distance() - self.hold_distance()).max(1.0);
        clamp((self.scroll - start) / span, 0.0, 1.0)
    }

    /// Info panel selected by scroll alone.
    pub fn scroll_info_index(&self) -> usize {
        let transitions = self.transitions();
        if transitions == 0 {
            return 0;
        }
        let progress = clamp(self.scroll / self.pinned_distance().max(1.0), 0.0, 1.0);
        let raw = (progress * transitions as f64).round();
        (raw.max(0.0) as usize).min(transitions)
    }

    pub fn tick(&mut self) -> StackFrame {
        let vel_norm = (self.velocity.abs() / self.config.max_velocity.max(1.0)).min(1.0);
        let boost_amount = vel_norm * self.config.max_boost;
        let settle_zone = self.start_offset * self.config.settle_fraction;

        for i in 1..self.slides {
            let raw = self.slide_progress(i);
            let transitioning = raw > 0.0 && raw < 1.0;
            let boost = if self.velocity > 0.0 && transitioning {
                boost_amount
            } else {
                0.0
            };
            let progress = (raw + boost).min(1.0);
            let target = self.start_offset * (1.0 - progress);

            let current = self.current[i];
            let remaining = current - target;
            let rate = if remaining > 0.0 && current < settle_zone {
                self.config.slow_lerp
            } else {
                self.config.fast_lerp
            };
            self.current[i] = approach(current, target, rate);
        }

        StackFrame {
            slide_offsets: self.current.clone(),
            active_info: self.hovered.unwrap_or_else(|| self.scroll_info_index()),
        }
    }
}

/// Info panel offset that follows the pointer over the image stack.
///
/// While hovered the panel floats around a base line derived from the
/// stack and text heights. Off hover it drifts to `rest_offset` below the
/// base; [`HoverParallax::settle`] pins it there once the drift is done.
#[derive(Debug, Clone, Default)]
pub struct HoverParallax {
    config: HoverParallaxConfig,
    base: f64,
    target: f64,
    current: f64,
    hovered: bool,
}

impl HoverParallax {
    pub fn new(config: HoverParallaxConfig) -> Self {
        let rest = config.rest_offset;
        Self {
            config,
            base: 0.0,
            target: rest,
            current: rest,
            hovered: false,
        }
    }

    /// Base line: the panel's centre sits at 35% of the stack height.
    pub fn base_for(stack_height: f64, text_height: f64) -> f64 {
        stack_height * 0.35 - text_height * 0.5
    }

    /// Entering starts the panel `rest_offset` low so it rises into place.
    pub fn enter(&mut self, stack_height: f64, text_height: f64) {
        self.hovered = true;
        self.base = Self::base_for(stack_height, text_height);
        self.current = self.base + self.config.rest_offset;
        self.target = self.base;
    }

    /// `normalized_y` is the pointer's height over the stack in `[0,1]`.
    pub fn pointer_move(&mut self, normalized_y: f64) {
        if !normalized_y.is_finite() {
            return;
        }
        self.target = self.base + (normalized_y - 0.5) * self.config.range * 2.0;
    }

    pub fn leave(&mut self) {
        self.hovered = false;
        self.target = self.base + self.config.rest_offset;
    }

    /// Snap to the rest position if the pointer is still away. Returns the
    /// pinned offset, or `None` when a new hover started in the meantime.
    pub fn settle(&mut self) -> Option<f64> {
        if self.hovered {
            return None;
        }
        self.current = self.base + self.config.rest_offset;
        self.target = self.current;
        Some(self.current)
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Advance one frame; returns the panel's vertical offset in pixels.
    pub fn tick(&mut self) -> f64 {
        self.current = lerp(self.current, self.target, self.config.lerp);
        self.current
    }
}
