/// Where a [`Flash`] is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    /// Fully opaque.
    Hold,
    /// Fading out.
    Fading,
    /// Gone; the overlay can be removed.
    Done,
}

/// A full-screen white flash: held briefly, then faded out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flash {
    started_ms: f64,
    hold_ms: f64,
    fade_ms: f64,
}

impl Flash {
    pub fn new(started_ms: f64, hold_ms: f64, fade_ms: f64) -> Flash {
        Flash {
            started_ms,
            hold_ms,
            fade_ms,
        }
    }

    pub fn phase(&self, now_ms: f64) -> FlashPhase {
        let elapsed = now_ms - self.started_ms;

        if elapsed < self.hold_ms {
            FlashPhase::Hold
        } else if elapsed < self.hold_ms + self.fade_ms {
            FlashPhase::Fading
        } else {
            FlashPhase::Done
        }
    }

    pub fn fade_ms(&self) -> f64 {
        self.fade_ms
    }
}
