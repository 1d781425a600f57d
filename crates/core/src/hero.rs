//! Hero card cluster: pointer parallax plus a slow scroll drift, scaled
//! by each card's depth.

use folio_protocol::{HeroFrame, Vec2};

use crate::capability::{CapabilitySource, motion_scale};
use crate::config::HeroConfig;
use crate::motion::{approach, clamp};

#[derive(Debug, Clone)]
pub struct HeroParallax {
    config: HeroConfig,
    depths: Vec<f64>,
    target: Vec2,
    current: Vec2,
    scroll_offset: f64,
    motion_scale: f64,
}

impl HeroParallax {
    /// `depths` are the per-card multipliers (0.5 when a card has none).
    pub fn new(config: HeroConfig, depths: Vec<f64>) -> Self {
        Self {
            config,
            depths,
            target: Vec2::ZERO,
            current: Vec2::ZERO,
            scroll_offset: 0.0,
            motion_scale: 1.0,
        }
    }

    pub fn set_capabilities(&mut self, source: &impl CapabilitySource) {
        self.motion_scale = motion_scale(source, self.config.touch_scale);
    }

    /// Pointer in client coordinates.
    pub fn pointer_move(&mut self, client: Vec2, viewport: Vec2) {
        let cx = (viewport.x / 2.0).max(1.0);
        let cy = (viewport.y / 2.0).max(1.0);
        self.target = Vec2::new(
            (client.x - cx) / cx * self.config.pointer_strength,
            (client.y - cy) / cy * self.config.pointer_strength,
        );
    }

    pub fn pointer_leave(&mut self) {
        self.target = Vec2::ZERO;
    }

    /// `hero_top` is the hero's top edge relative to the viewport.
    pub fn scroll(&mut self, hero_top: f64, hero_height: f64, viewport_height: f64) {
        let progress = clamp(-hero_top / hero_height.max(1.0), 0.0, 1.0);
        self.scroll_offset = progress * viewport_height * self.config.scroll_strength;
    }

    pub fn tick(&mut self) -> HeroFrame {
        let s = self.config.smoothing;
        self.current = Vec2::new(
            approach(self.current.x, self.target.x, s),
            approach(self.current.y, self.target.y, s),
        );
        let scale = self.motion_scale;
        let offsets = self
            .depths
            .iter()
            .map(|&d| {
                Vec2::new(
                    self.current.x * d * scale,
                    (self.current.y * d + self.scroll_offset * d) * scale,
                )
            })
            .collect();
        HeroFrame { offsets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capabilities;
    use crate::motion::approx_eq;

    #[test]
    fn pointer_at_edge_reaches_strength() {
        let config = HeroConfig {
            smoothing: 1.0,
            ..HeroConfig::default()
        };
        let mut hero = HeroParallax::new(config, vec![1.0, 0.5]);
        hero.pointer_move(Vec2::new(1000.0, 400.0), Vec2::new(1000.0, 800.0));
        let frame = hero.tick();
        assert!(approx_eq(frame.offsets[0].x, 26.0));
        assert!(approx_eq(frame.offsets[1].x, 13.0));
        assert!(approx_eq(frame.offsets[0].y, 0.0));
    }

    #[test]
    fn scroll_adds_depth_scaled_drift() {
        let mut hero = HeroParallax::new(HeroConfig::default(), vec![2.0]);
        hero.scroll(-400.0, 800.0, 1000.0);
        let frame = hero.tick();
        // progress 0.5 → offset 30px, doubled by depth
        assert!(approx_eq(frame.offsets[0].y, 60.0));
    }

    #[test]
    fn reduced_motion_freezes_cards() {
        let mut hero = HeroParallax::new(HeroConfig::default(), vec![1.0]);
        hero.set_capabilities(&Capabilities {
            reduced_motion: true,
            touch_only: false,
        });
        hero.scroll(-800.0, 800.0, 1000.0);
        hero.pointer_move(Vec2::ZERO, Vec2::new(1000.0, 800.0));
        assert_eq!(hero.tick().offsets[0], Vec2::ZERO);
    }
}
