// Ugkey Swipe Recognizer
// Horizontal-swipe detection used as an alternate keyboard-mode toggle

/// Minimum horizontal travel for a completed swipe.
const X_THRESHOLD: f32 = 50.0;

/// Vertical drift beyond this cancels the gesture.
const Y_THRESHOLD: f32 = 15.0;

/// Direction of a completed horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
struct Tracking {
    start_x: f32,
    start_y: f32,
    /// Last accepted horizontal delta. Doubles as the committed direction:
    /// zero means no direction yet.
    dx: f32,
}

/// Recognizes a single-finger horizontal swipe from a stream of touch
/// points.
///
/// The gesture is cancelled by a second touch, by reversing horizontal
/// direction mid-swipe, or by drifting vertically past the threshold.
#[derive(Debug)]
pub struct SwipeDetector {
    tracking: Option<Tracking>,
    x_threshold: f32,
    y_threshold: f32,
}

impl SwipeDetector {
    /// Create a detector with the standard touch-pixel thresholds.
    pub fn new() -> Self {
        Self::with_thresholds(X_THRESHOLD, Y_THRESHOLD)
    }

    /// Create a detector with custom thresholds, for hosts whose coordinate
    /// unit is coarser than touch pixels.
    pub fn with_thresholds(x_threshold: f32, y_threshold: f32) -> Self {
        Self {
            tracking: None,
            x_threshold,
            y_threshold,
        }
    }

    /// Begin tracking a gesture. `touches` is the number of active touch
    /// points; anything but exactly one ignores the gesture.
    pub fn touch_start(&mut self, x: f32, y: f32, touches: usize) {
        if touches == 1 {
            self.tracking = Some(Tracking {
                start_x: x,
                start_y: y,
                dx: 0.0,
            });
        } else {
            self.tracking = None;
        }
    }

    /// Track movement. Returns true while the gesture is alive and
    /// horizontal, in which case the host should cancel the move's default
    /// (scroll) behavior.
    pub fn touch_move(&mut self, x: f32, y: f32, touches: usize) -> bool {
        let Some(tracking) = self.tracking.as_mut() else {
            return false;
        };

        if touches > 1 {
            self.tracking = None;
            return false;
        }

        let dx = x - tracking.start_x;
        let dy = y - tracking.start_y;

        let reversed = (tracking.dx < 0.0 && dx > 0.0) || (tracking.dx > 0.0 && dx < 0.0);
        if reversed || dy.abs() > self.y_threshold {
            self.tracking = None;
            return false;
        }

        tracking.dx = dx;
        true
    }

    /// Finish the gesture, yielding a swipe when it traveled far enough.
    pub fn touch_end(&mut self) -> Option<Swipe> {
        let tracking = self.tracking.take()?;
        if tracking.dx.abs() > self.x_threshold {
            Some(if tracking.dx < 0.0 {
                Swipe::Left
            } else {
                Swipe::Right
            })
        } else {
            None
        }
    }

    /// Whether a gesture is currently being tracked.
    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    /// Drop any in-progress gesture.
    pub fn cancel(&mut self) {
        self.tracking = None;
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new()
    }
}
