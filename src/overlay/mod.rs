//! Overlay coordination.
//!
//! The navigation drawer and the three dialogs share the screen: at most one
//! of them is open at a time. A request to open another overlay while one is
//! showing is dropped, not queued. Closing always returns to [`OverlayState::Closed`],
//! whichever overlay was showing.

pub mod routes;

use std::fmt;
use std::str::FromStr;

pub use routes::router;

/// Something that takes exclusive visual focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    NavigationDrawer,
    Calculator,
    Contact,
    Social,
}

impl Overlay {
    pub const ALL: [Overlay; 4] = [
        Overlay::NavigationDrawer,
        Overlay::Calculator,
        Overlay::Contact,
        Overlay::Social,
    ];

    /// Path segment used by the overlay endpoints
    pub fn slug(self) -> &'static str {
        match self {
            Overlay::NavigationDrawer => "menu",
            Overlay::Calculator => "calculator",
            Overlay::Contact => "whatsapp",
            Overlay::Social => "instagram",
        }
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown overlay: {0}")]
pub struct UnknownOverlay(pub String);

impl FromStr for Overlay {
    type Err = UnknownOverlay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Overlay::ALL
            .into_iter()
            .find(|o| o.slug() == s)
            .ok_or_else(|| UnknownOverlay(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(Overlay),
}

/// Outcome of a coordinator call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened(Overlay),
    /// Open request dropped because another overlay is showing
    Ignored { requested: Overlay, open: Overlay },
    Closed(Overlay),
    /// Nothing was open
    Unchanged,
}

impl Transition {
    pub fn name(self) -> &'static str {
        match self {
            Transition::Opened(_) => "opened",
            Transition::Ignored { .. } => "ignored",
            Transition::Closed(_) => "closed",
            Transition::Unchanged => "unchanged",
        }
    }
}

/// Single-owner overlay state machine
#[derive(Debug, Clone, Default)]
pub struct OverlayCoordinator {
    state: OverlayState,
}

impl OverlayCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn current(&self) -> Option<Overlay> {
        match self.state {
            OverlayState::Closed => None,
            OverlayState::Open(overlay) => Some(overlay),
        }
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.current() == Some(overlay)
    }

    /// Background scrolling is suppressed while anything is open
    pub fn scroll_locked(&self) -> bool {
        self.current().is_some()
    }

    /// Show `target` unless another overlay is already showing.
    pub fn open(&mut self, target: Overlay) -> Transition {
        match self.state {
            OverlayState::Closed => {
                self.state = OverlayState::Open(target);
                Transition::Opened(target)
            }
            OverlayState::Open(open) => Transition::Ignored {
                requested: target,
                open,
            },
        }
    }

    /// Close whatever is open. `target` only names the control that asked.
    pub fn close(&mut self, target: Overlay) -> Transition {
        let previous = self.current();
        self.state = OverlayState::Closed;
        match previous {
            Some(open) => {
                if open != target {
                    tracing::debug!("Close of {} cleared open overlay {}", target, open);
                }
                Transition::Closed(open)
            }
            None => Transition::Unchanged,
        }
    }

    /// Click outside the content area of `target`
    pub fn backdrop_click(&mut self, target: Overlay) -> Transition {
        self.close(target)
    }

    /// Escape key: closes every open overlay, no-op when nothing is open.
    pub fn escape(&mut self) -> Transition {
        match self.current() {
            Some(open) => self.close(open),
            None => Transition::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_closed() {
        let coordinator = OverlayCoordinator::new();
        assert_eq!(coordinator.state(), OverlayState::Closed);
        assert!(!coordinator.scroll_locked());
    }

    #[test]
    fn test_open_then_close() {
        let mut coordinator = OverlayCoordinator::new();

        assert_eq!(coordinator.open(Overlay::Calculator), Transition::Opened(Overlay::Calculator));
        assert!(coordinator.is_open(Overlay::Calculator));
        assert!(coordinator.scroll_locked());

        assert_eq!(coordinator.close(Overlay::Calculator), Transition::Closed(Overlay::Calculator));
        assert_eq!(coordinator.state(), OverlayState::Closed);
        assert!(!coordinator.scroll_locked());
    }

    #[test]
    fn test_first_opened_overlay_wins_for_every_pair() {
        for first in Overlay::ALL {
            for second in Overlay::ALL {
                if first == second {
                    continue;
                }
                let mut coordinator = OverlayCoordinator::new();
                coordinator.open(first);

                let transition = coordinator.open(second);

                assert_eq!(
                    transition,
                    Transition::Ignored {
                        requested: second,
                        open: first
                    }
                );
                assert!(coordinator.is_open(first), "{} should stay open", first);
                assert!(!coordinator.is_open(second), "{} should stay closed", second);
            }
        }
    }

    #[test]
    fn test_reopening_same_overlay_is_ignored() {
        let mut coordinator = OverlayCoordinator::new();
        coordinator.open(Overlay::Social);
        assert_eq!(
            coordinator.open(Overlay::Social),
            Transition::Ignored {
                requested: Overlay::Social,
                open: Overlay::Social
            }
        );
        assert!(coordinator.is_open(Overlay::Social));
    }

    #[test]
    fn test_close_clears_regardless_of_target() {
        for open in Overlay::ALL {
            for target in Overlay::ALL {
                let mut coordinator = OverlayCoordinator::new();
                coordinator.open(open);

                assert_eq!(coordinator.close(target), Transition::Closed(open));
                assert_eq!(coordinator.state(), OverlayState::Closed);
                assert!(!coordinator.scroll_locked());
            }
        }
    }

    #[test]
    fn test_close_when_closed() {
        let mut coordinator = OverlayCoordinator::new();
        assert_eq!(coordinator.close(Overlay::Contact), Transition::Unchanged);
        assert_eq!(coordinator.state(), OverlayState::Closed);
    }

    #[test]
    fn test_backdrop_click_closes() {
        let mut coordinator = OverlayCoordinator::new();
        coordinator.open(Overlay::Contact);
        assert_eq!(
            coordinator.backdrop_click(Overlay::Contact),
            Transition::Closed(Overlay::Contact)
        );
        assert_eq!(coordinator.current(), None);
    }

    #[test]
    fn test_escape_closes_any_overlay() {
        for open in Overlay::ALL {
            let mut coordinator = OverlayCoordinator::new();
            coordinator.open(open);
            assert_eq!(coordinator.escape(), Transition::Closed(open));
            assert_eq!(coordinator.state(), OverlayState::Closed);
        }
    }

    #[test]
    fn test_escape_with_nothing_open_is_noop() {
        let mut coordinator = OverlayCoordinator::new();
        assert_eq!(coordinator.escape(), Transition::Unchanged);
        assert_eq!(coordinator.state(), OverlayState::Closed);
    }

    #[test]
    fn test_can_open_after_close() {
        let mut coordinator = OverlayCoordinator::new();
        coordinator.open(Overlay::NavigationDrawer);
        coordinator.close(Overlay::NavigationDrawer);
        assert_eq!(coordinator.open(Overlay::Social), Transition::Opened(Overlay::Social));
    }

    #[test]
    fn test_slugs_round_trip() {
        for overlay in Overlay::ALL {
            assert_eq!(overlay.slug().parse::<Overlay>(), Ok(overlay));
        }
        assert!("modal".parse::<Overlay>().is_err());
    }
}
