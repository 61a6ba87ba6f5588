//! Section navigation.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Intro,
    Neural,
    Process,
    Performance,
    Technical,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Intro,
        Section::Neural,
        Section::Process,
        Section::Performance,
        Section::Technical,
    ];

    /// Stable identifier used in element ids and `data-section` attributes.
    pub fn id(self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::Neural => "neural",
            Section::Process => "process",
            Section::Performance => "performance",
            Section::Technical => "technical",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Intro => "Introduction",
            Section::Neural => "Neural Hidden State",
            Section::Process => "TTT Process",
            Section::Performance => "Performance",
            Section::Technical => "Technical Details",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Active section plus the mobile overlay flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    active: Section,
    menu_open: bool,
}

impl Navigator {
    pub fn new(initial: Section) -> Self {
        Self { active: initial, menu_open: false }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Make `section` active and close the overlay. Returns whether the
    /// active section changed.
    pub fn select(&mut self, section: Section) -> bool {
        self.menu_open = false;
        if self.active == section {
            return false;
        }
        log::debug!("section {} -> {}", self.active.id(), section.id());
        self.active = section;
        true
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_introduction_with_menu_closed() {
        let nav = Navigator::default();
        assert_eq!(nav.active(), Section::Intro);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn selecting_sets_exactly_that_section_and_closes_menu() {
        for target in Section::ALL {
            let mut nav = Navigator::default();
            nav.toggle_menu();
            nav.select(target);
            assert_eq!(nav.active(), target);
            assert!(!nav.is_menu_open());
        }
    }

    #[test]
    fn reselecting_active_section_is_a_no_op() {
        let mut nav = Navigator::new(Section::Process);
        let before = nav.clone();
        assert!(!nav.select(Section::Process));
        assert_eq!(nav, before);
    }

    #[test]
    fn ids_round_trip() {
        for s in Section::ALL {
            assert_eq!(Section::from_id(s.id()), Some(s));
        }
        assert_eq!(Section::from_id("nope"), None);
    }
}
