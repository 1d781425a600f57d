use folio_protocol::Vec2;

use crate::config::CursorConfig;
use crate::motion::lerp;

/// How the follower treats entering and leaving a hover target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorMode {
    /// Quote cursor: snaps to the pointer on enter and only animates while
    /// over a target.
    #[default]
    Snap,
    /// /VIEW cursor: trails every pointer move on the page from the first
    /// one on. Targets only toggle visibility.
    Trail,
}

/// Custom cursor that eases toward the pointer.
#[derive(Debug, Clone, Default)]
pub struct CursorFollower {
    config: CursorConfig,
    mode: CursorMode,
    pointer: Vec2,
    position: Vec2,
    tracking: bool,
    visible: bool,
}

impl CursorFollower {
    pub fn new(config: CursorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn trailing(config: CursorConfig) -> Self {
        Self {
            config,
            mode: CursorMode::Trail,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> CursorMode {
        self.mode
    }

    /// Pointer entered a hover target.
    pub fn enter(&mut self, pointer: Vec2) {
        self.visible = true;
        self.pointer = pointer;
        if self.mode == CursorMode::Snap {
            self.tracking = true;
            self.position = pointer;
        }
    }

    pub fn pointer_move(&mut self, pointer: Vec2) {
        self.pointer = pointer;
        if self.mode == CursorMode::Trail {
            self.tracking = true;
        }
    }

    pub fn leave(&mut self) {
        self.visible = false;
        if self.mode == CursorMode::Snap {
            self.tracking = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Advance one frame. `None` while there is nothing to animate, so the
    /// caller can stop its loop.
    pub fn tick(&mut self) -> Option<Vec2> {
        if !self.tracking {
            return None;
        }
        let t = self.config.lerp;
        self.position = Vec2::new(
            lerp(self.position.x, self.pointer.x, t),
            lerp(self.position.y, self.pointer.y, t),
        );
        Some(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::approx_eq;

    #[test]
    fn trails_pointer_after_snap() {
        let mut cursor = CursorFollower::new(CursorConfig::default());
        assert_eq!(cursor.tick(), None);
        cursor.enter(Vec2::new(10.0, 10.0));
        assert_eq!(cursor.tick(), Some(Vec2::new(10.0, 10.0)));
        cursor.pointer_move(Vec2::new(110.0, 10.0));
        let p = cursor.tick().expect("cursor is active");
        assert!(approx_eq(p.x, 24.0));
        cursor.leave();
        assert!(!cursor.is_visible());
        assert!(cursor.tick().is_none());
    }

    #[test]
    fn trailing_cursor_tracks_without_snapping() {
        let mut cursor = CursorFollower::trailing(CursorConfig::default());
        assert_eq!(cursor.mode(), CursorMode::Trail);
        assert_eq!(cursor.tick(), None);

        cursor.pointer_move(Vec2::new(100.0, 0.0));
        assert!(!cursor.is_visible());
        let p = cursor.tick().expect("moves start tracking");
        assert!(approx_eq(p.x, 14.0));

        cursor.enter(Vec2::new(200.0, 0.0));
        assert!(cursor.is_visible());
        let p = cursor.tick().expect("still tracking");
        assert!(p.x < 200.0);

        cursor.leave();
        assert!(!cursor.is_visible());
        assert!(cursor.tick().is_some());
    }
}
