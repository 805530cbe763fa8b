/// What a released swipe decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Commit,
    Cancel,
}

/// Downward-only drag tracking for the poem card.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeGesture {
    origin_y: f64,
    offset_px: f64,
    dragging: bool,
    commit_px: f64,
}

impl SwipeGesture {
    pub fn new(commit_px: f64) -> Self {
        Self {
            origin_y: 0.0,
            offset_px: 0.0,
            dragging: false,
            commit_px,
        }
    }

    pub fn start(&mut self, origin_y: f64) {
        if !origin_y.is_finite() {
            return;
        }
        self.origin_y = origin_y;
        self.dragging = true;
    }

    /// Upward movement leaves the offset at its last downward value.
    pub fn track(&mut self, current_y: f64) {
        if !self.dragging || !current_y.is_finite() {
            return;
        }
        let delta = current_y - self.origin_y;
        if delta > 0.0 {
            self.offset_px = delta;
        }
    }

    pub fn release(&mut self) -> SwipeOutcome {
        self.dragging = false;
        if self.offset_px > self.commit_px {
            SwipeOutcome::Commit
        } else {
            self.offset_px = 0.0;
            SwipeOutcome::Cancel
        }
    }

    pub fn reset(&mut self) {
        self.offset_px = 0.0;
        self.dragging = false;
    }

    #[cfg(test)]
    pub fn offset_px(&self) -> f64 {
        self.offset_px
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn overlay_opacity(&self) -> f64 {
        (1.0 - self.offset_px / 300.0).max(0.3)
    }

    pub fn card_transform(&self) -> String {
        format!(
            "translateY({}px) scale({})",
            self.offset_px,
            1.0 - self.offset_px / 1000.0
        )
    }
}
