use crate::icons;

/// Identity of one sidebar panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PanelId {
    Files,
    Search,
    Source,
    Aichat,
    Profile,
    Settings,
}

impl PanelId {
    /// Stable route segment used in navigation paths.
    pub(crate) fn route_key(self) -> &'static str {
        match self {
            PanelId::Files => "files",
            PanelId::Search => "search",
            PanelId::Source => "source",
            PanelId::Aichat => "aichat",
            PanelId::Profile => "profile",
            PanelId::Settings => "settings",
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            PanelId::Files => "Files",
            PanelId::Search => "Search",
            PanelId::Source => "Source Control",
            PanelId::Aichat => "AI Chat",
            PanelId::Profile => "Profile",
            PanelId::Settings => "Settings",
        }
    }
}

/// Static description of a panel entry shown on the icon rail.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PanelDescriptor {
    id: PanelId,
    glyph: &'static [u8],
    description: &'static str,
}

impl PanelDescriptor {
    pub(crate) fn id(&self) -> PanelId {
        self.id
    }

    pub(crate) fn glyph(&self) -> &'static [u8] {
        self.glyph
    }

    pub(crate) fn description(&self) -> &'static str {
        self.description
    }
}

/// Rail entries anchored to the top edge, in display order.
pub(crate) const TOP_PANELS: [PanelDescriptor; 4] = [
    PanelDescriptor {
        id: PanelId::Files,
        glyph: icons::PANEL_FILES,
        description: "Browse project files",
    },
    PanelDescriptor {
        id: PanelId::Search,
        glyph: icons::PANEL_SEARCH,
        description: "Search across the project",
    },
    PanelDescriptor {
        id: PanelId::Source,
        glyph: icons::PANEL_SOURCE,
        description: "Review source control changes",
    },
    PanelDescriptor {
        id: PanelId::Aichat,
        glyph: icons::PANEL_AICHAT,
        description: "Chat with the AI sidekick",
    },
];

/// Rail entries anchored to the bottom edge, in display order.
pub(crate) const BOTTOM_PANELS: [PanelDescriptor; 2] = [
    PanelDescriptor {
        id: PanelId::Profile,
        glyph: icons::PANEL_PROFILE,
        description: "Manage your profile",
    },
    PanelDescriptor {
        id: PanelId::Settings,
        glyph: icons::PANEL_SETTINGS,
        description: "Open application settings",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_descriptors() -> Vec<PanelDescriptor> {
        TOP_PANELS.iter().chain(BOTTOM_PANELS.iter()).copied().collect()
    }

    #[test]
    fn given_rail_entries_when_collected_then_panel_ids_are_unique() {
        let descriptors = all_descriptors();

        for (index, descriptor) in descriptors.iter().enumerate() {
            let duplicates = descriptors[index + 1..]
                .iter()
                .filter(|other| other.id() == descriptor.id())
                .count();

            assert_eq!(duplicates, 0, "duplicate rail entry {:?}", descriptor.id());
        }
    }

    #[test]
    fn given_rail_entries_when_inspected_then_each_has_glyph_and_description() {
        for descriptor in all_descriptors() {
            assert!(!descriptor.glyph().is_empty());
            assert!(!descriptor.description().is_empty());
        }
    }

    #[test]
    fn given_panel_ids_when_route_keys_derived_then_keys_are_distinct() {
        let descriptors = all_descriptors();

        for (index, descriptor) in descriptors.iter().enumerate() {
            for other in &descriptors[index + 1..] {
                assert_ne!(descriptor.id().route_key(), other.id().route_key());
            }
        }
    }
}
