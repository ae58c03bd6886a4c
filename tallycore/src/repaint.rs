//! Input-driven repaint scheduling
//!
//! The calculator only changes in response to a key or button press, so
//! there is no reason for egui to redraw while the user is idle.
//! `RepaintController` records why a frame is running and asks for one
//! more frame only when the app marks its state dirty outside of input
//! handling (for example a keyboard shortcut that changes the display
//! after the keypad has already been drawn).

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame.
    Init,
    /// Pointer or keyboard activity.
    Input,
    /// The app requested a follow-up frame.
    StateChange,
}

/// Drop this into the app struct; call [`RepaintController::begin_frame`]
/// at the top of `update()` and [`RepaintController::end_frame`] at the
/// bottom.
#[derive(Debug)]
pub struct RepaintController {
    needs_repaint: bool,
    frame: u64,
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            needs_repaint: false,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Request a single extra frame once the current one finishes.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.is_moving()
        });
        self.observe(had_input);
    }

    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if self.finish() {
            ctx.request_repaint();
        }
    }

    /// Classify the frame that is starting and consume any pending request.
    fn observe(&mut self, had_input: bool) {
        self.reason = if self.frame == 0 {
            RepaintReason::Init
        } else if !had_input && self.needs_repaint {
            RepaintReason::StateChange
        } else {
            // Window events (resize, focus) also wake egui; count them as input.
            RepaintReason::Input
        };
        self.needs_repaint = false;
    }

    /// Advance the frame counter; returns whether another frame is wanted.
    fn finish(&mut self) -> bool {
        self.frame += 1;
        self.needs_repaint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_init() {
        let mut rc = RepaintController::new();
        rc.observe(false);
        assert_eq!(rc.reason(), RepaintReason::Init);
        assert!(!rc.finish());
        assert_eq!(rc.frame(), 1);
    }

    #[test]
    fn marked_state_requests_one_follow_up() {
        let mut rc = RepaintController::new();
        rc.observe(true);
        rc.mark_needs_repaint();
        assert!(rc.finish());

        rc.observe(false);
        assert_eq!(rc.reason(), RepaintReason::StateChange);
        assert!(!rc.finish());
    }

    #[test]
    fn idle_frames_do_not_reschedule() {
        let mut rc = RepaintController::new();
        rc.observe(false);
        rc.finish();
        rc.observe(true);
        assert_eq!(rc.reason(), RepaintReason::Input);
        assert!(!rc.finish());
    }
}
