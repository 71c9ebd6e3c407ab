use std::time::Duration;
use strum::{AsRefStr, Display};

/// Icon shown on a chrome control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    ChevronLeft,
    ChevronRight,
    Expand,
    Compress,
}

/// One-shot request to re-measure the map once the layout has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredResize {
    pub delay: Duration,
}

/// Visibility of the sidebar and the labels of the layout toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeState {
    sidebar_hidden: bool,
    toggle_hidden: bool,
    fullscreen: bool,
}

impl ChromeState {
    pub fn sidebar_visible(&self) -> bool {
        !self.sidebar_hidden
    }

    pub fn sidebar_toggle_visible(&self) -> bool {
        !self.toggle_hidden
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn sidebar_icon(&self) -> Icon {
        if self.sidebar_hidden {
            Icon::ChevronRight
        } else {
            Icon::ChevronLeft
        }
    }

    pub fn fullscreen_icon(&self) -> Icon {
        if self.fullscreen {
            Icon::Compress
        } else {
            Icon::Expand
        }
    }

    pub fn fullscreen_label(&self) -> &'static str {
        if self.fullscreen {
            "Exit Full Screen"
        } else {
            "Full Screen"
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_hidden = !self.sidebar_hidden;
    }

    /// Entering full screen hides the sidebar and its toggle; leaving
    /// restores both.
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        self.sidebar_hidden = self.fullscreen;
        self.toggle_hidden = self.fullscreen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_toggle_flips_icon() {
        let mut chrome = ChromeState::default();
        assert_eq!(chrome.sidebar_icon().as_ref(), "chevron-left");
        chrome.toggle_sidebar();
        assert!(!chrome.sidebar_visible());
        assert_eq!(chrome.sidebar_icon(), Icon::ChevronRight);
        chrome.toggle_sidebar();
        assert!(chrome.sidebar_visible());
    }

    #[test]
    fn fullscreen_hides_and_restores_sidebar() {
        let mut chrome = ChromeState::default();
        chrome.toggle_fullscreen();
        assert!(!chrome.sidebar_visible());
        assert!(!chrome.sidebar_toggle_visible());
        assert_eq!(chrome.fullscreen_label(), "Exit Full Screen");
        assert_eq!(chrome.fullscreen_icon(), Icon::Compress);

        chrome.toggle_fullscreen();
        assert!(chrome.sidebar_visible());
        assert!(chrome.sidebar_toggle_visible());
        assert_eq!(chrome.fullscreen_label(), "Full Screen");
    }

    #[test]
    fn leaving_fullscreen_reopens_a_hidden_sidebar() {
        let mut chrome = ChromeState::default();
        chrome.toggle_sidebar();
        chrome.toggle_fullscreen();
        chrome.toggle_fullscreen();
        assert!(chrome.sidebar_visible());
    }
}
