/// Visibility state of the poem overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayLifecycle {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl OverlayLifecycle {
    /// Whether the overlay is in the DOM at all.
    pub fn is_mounted(self) -> bool {
        !matches!(self, OverlayLifecycle::Closed)
    }

    /// Drives the enter-transition classes.
    pub fn is_shown(self) -> bool {
        matches!(self, OverlayLifecycle::Open)
    }

    pub fn is_dismissable(self) -> bool {
        matches!(self, OverlayLifecycle::Opening | OverlayLifecycle::Open)
    }
}
