use std::cell::Cell;

/// Book-keeping for one `requestAnimationFrame` loop: whether it may keep
/// rescheduling and which request is outstanding.
#[derive(Debug, Default)]
pub struct FrameSchedule {
    stopped: Cell<bool>,
    pending: Cell<Option<i32>>,
}

impl FrameSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        !self.stopped.get()
    }

    /// Top of every frame callback. The request that fired is no longer
    /// pending; `false` means the loop was stopped and the frame must not run.
    pub fn begin_frame(&self) -> bool {
        self.pending.set(None);
        self.is_running()
    }

    /// Remember the next request. After `stop` the id is handed back so the
    /// caller can cancel it instead.
    pub fn scheduled(&self, id: i32) -> Option<i32> {
        if self.is_running() {
            self.pending.set(Some(id));
            None
        } else {
            Some(id)
        }
    }

    /// Stop the loop. Returns the outstanding request to cancel, once.
    pub fn stop(&self) -> Option<i32> {
        self.stopped.set(true);
        self.pending.take()
    }
}
