use folio_protocol::NavState;

use crate::config::NavConfig;

/// Nav pill state for a scroll position, given the previous one.
pub fn nav_state(scroll_y: f64, last_scroll_y: f64, config: &NavConfig) -> NavState {
    NavState {
        scrolled: scroll_y > config.scrolled_threshold,
        collapsed: scroll_y > last_scroll_y && scroll_y > config.collapse_threshold,
    }
}

/// Tracks the previous scroll position between updates.
#[derive(Debug, Clone, Default)]
pub struct NavController {
    config: NavConfig,
    last_scroll_y: f64,
}

impl NavController {
    pub fn new(config: NavConfig, initial_scroll_y: f64) -> Self {
        Self {
            config,
            last_scroll_y: initial_scroll_y,
        }
    }

    pub fn update(&mut self, scroll_y: f64) -> NavState {
        let state = nav_state(scroll_y, self.last_scroll_y, &self.config);
        self.last_scroll_y = scroll_y;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        let config = NavConfig::default();
        assert_eq!(nav_state(10.0, 0.0, &config), NavState::default());
        assert!(nav_state(21.0, 0.0, &config).scrolled);
        assert!(!nav_state(90.0, 50.0, &config).collapsed);
        assert!(nav_state(150.0, 120.0, &config).collapsed);
    }

    #[test]
    fn scrolling_up_expands() {
        let mut nav = NavController::new(NavConfig::default(), 0.0);
        assert!(nav.update(300.0).collapsed);
        let up = nav.update(250.0);
        assert!(!up.collapsed);
        assert!(up.scrolled);
    }
}
