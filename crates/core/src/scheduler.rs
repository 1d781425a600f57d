//! Refresh-synchronised frame loop with explicit ownership of the
//! running flag.
//!
//! Input handlers only record the latest scroll/pointer values; the work
//! happens once per frame inside [`FrameLoop::tick`]. The loop can be
//! paused while its component is off-screen and resumed without losing
//! engine state, and cancelled on unmount.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Opaque id of a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameHandle(pub u64);

/// The display's animation-frame mechanism.
pub trait FrameHost {
    /// Schedule one callback for the next frame. `None` if the host could
    /// not schedule one.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoopState {
    Stopped,
    Running,
    /// Unmounted. Terminal.
    Cancelled,
}

#[derive(Debug)]
pub struct FrameLoop<H: FrameHost> {
    host: H,
    state: LoopState,
    visible: bool,
    pending: Option<FrameHandle>,
}

impl<H: FrameHost> FrameLoop<H> {
    /// A stopped loop. Components start visible; an intersection observer
    /// may call [`FrameLoop::set_visible`] before or after [`FrameLoop::start`].
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: LoopState::Stopped,
            visible: true,
            pending: None,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a frame callback is outstanding.
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn start(&mut self) {
        if self.state != LoopState::Stopped {
            return;
        }
        self.state = LoopState::Running;
        info!(visible = self.visible, "frame loop started");
        self.schedule();
    }

    pub fn stop(&mut self) {
        if self.state != LoopState::Running {
            return;
        }
        self.state = LoopState::Stopped;
        self.unschedule();
        info!("frame loop stopped");
    }

    /// Gate the loop on on-screen visibility. Hidden loops keep their
    /// running flag but request no frames.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        debug!(visible, "frame loop visibility");
        if visible {
            self.schedule();
        } else {
            self.unschedule();
        }
    }

    /// Frame callback entry point. Returns `true` when the caller should
    /// run one animation step; the next frame is requested before
    /// returning.
    pub fn tick(&mut self) -> bool {
        self.pending = None;
        if !(self.is_running() && self.visible) {
            return false;
        }
        self.schedule();
        true
    }

    /// Unmount: drop any pending frame and refuse to run again.
    pub fn cancel(&mut self) {
        if self.state == LoopState::Cancelled {
            return;
        }
        self.unschedule();
        self.state = LoopState::Cancelled;
        info!("frame loop cancelled");
    }

    fn schedule(&mut self) {
        if self.pending.is_none() && self.is_running() && self.visible {
            self.pending = self.host.request_frame();
        }
    }

    fn unschedule(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.host.cancel_frame(handle);
        }
    }
}

impl<H: FrameHost> Drop for FrameLoop<H> {
    fn drop(&mut self) {
        self.unschedule();
    }
}
