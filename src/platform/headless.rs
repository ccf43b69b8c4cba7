//! Headless host pieces
//!
//! A `Hud` that remembers what it was told and logs every change. Paired with
//! `FrameRecorder` it lets a match run without a browser.

use std::collections::{HashMap, HashSet};

use crate::ui::{Hud, Label, Panel};

#[derive(Debug, Clone, Default)]
pub struct HeadlessHud {
    visible: HashSet<Panel>,
    texts: HashMap<Label, String>,
    /// Number of `set_text` calls per label
    writes: HashMap<Label, u32>,
}

impl HeadlessHud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible.contains(&panel)
    }

    pub fn text(&self, label: Label) -> Option<&str> {
        self.texts.get(&label).map(String::as_str)
    }

    pub fn writes(&self, label: Label) -> u32 {
        self.writes.get(&label).copied().unwrap_or(0)
    }
}

impl Hud for HeadlessHud {
    fn set_visible(&mut self, panel: Panel, visible: bool) {
        let changed = if visible {
            self.visible.insert(panel)
        } else {
            self.visible.remove(&panel)
        };
        if changed {
            log::debug!("{:?} panel {}", panel, if visible { "shown" } else { "hidden" });
        }
    }

    fn set_text(&mut self, label: Label, text: &str) {
        log::debug!("{:?} = {:?}", label, text);
        *self.writes.entry(label).or_default() += 1;
        self.texts.insert(label, text.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_panels_and_text() {
        let mut hud = HeadlessHud::new();
        assert!(!hud.is_visible(Panel::Menu));
        hud.set_visible(Panel::Menu, true);
        assert!(hud.is_visible(Panel::Menu));
        hud.set_visible(Panel::Menu, false);
        assert!(!hud.is_visible(Panel::Menu));

        assert_eq!(hud.text(Label::LeftScore), None);
        hud.set_text(Label::LeftScore, "1");
        hud.set_text(Label::LeftScore, "2");
        assert_eq!(hud.text(Label::LeftScore), Some("2"));
        assert_eq!(hud.writes(Label::LeftScore), 2);
        assert_eq!(hud.writes(Label::RightScore), 0);
    }
}
