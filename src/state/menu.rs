//! Header menu state.

use crate::constants::HEADER_FALLBACK_HEIGHT_PX;

/// Open/closed state of the header menu plus the panel's top offset.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    pub open: bool,
    /// Distance from the viewport top to the panel, in whole pixels.
    pub panel_top_px: f64,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            open: false,
            panel_top_px: HEADER_FALLBACK_HEIGHT_PX,
        }
    }
}

impl MenuState {
    /// Open the panel below a header of the given measured height.
    pub fn open(&mut self, header_height: Option<f64>) {
        self.sync_top(header_height);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self, header_height: Option<f64>) {
        if self.open {
            self.close();
        } else {
            self.open(header_height);
        }
    }

    /// Value for the `aria-expanded` attribute of the menu button.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Follow a header whose height changed. Closed menus ignore it and
    /// pick the height up on the next open.
    pub fn resync(&mut self, header_height: Option<f64>) {
        if self.open {
            self.sync_top(header_height);
        }
    }

    pub fn sync_top(&mut self, header_height: Option<f64>) {
        self.panel_top_px = header_height
            .filter(|height| *height > 0.0)
            .map(f64::round)
            .unwrap_or(HEADER_FALLBACK_HEIGHT_PX);
    }
}
