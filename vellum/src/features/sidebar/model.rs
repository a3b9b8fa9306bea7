use iced::keyboard::{Key, Modifiers};

use crate::panels::PanelId;
use crate::ui::components::resize_handle::HANDLE_WIDTH;

/// Fixed width of the icon rail on the window's right edge.
pub(crate) const SIDEBAR_RAIL_WIDTH: f32 = 52.0;

/// Panel width before the user ever drags the handle.
pub(crate) const DEFAULT_PANEL_WIDTH: f32 = 260.0;

/// Narrowest panel width that still renders its content usably.
pub(crate) const MIN_PANEL_WIDTH: f32 = 180.0;

/// Width the workspace always keeps next to the sidebar.
pub(crate) const MIN_WORKSPACE_WIDTH: f32 = 320.0;

/// Keyboard chords mapping the command+shift layer to panels.
pub(crate) const PANEL_SHORTCUTS: [(&str, PanelId); 4] = [
    ("e", PanelId::Files),
    ("s", PanelId::Search),
    ("g", PanelId::Source),
    ("a", PanelId::Aichat),
];

/// Clamp a requested panel width against the current window width.
///
/// The upper bound leaves room for the rail, the resize handle and the
/// minimum workspace. On windows too narrow for all of that the lower
/// bound wins and the workspace gives way instead of the panel.
pub(crate) fn clamp_panel_width(width: f32, window_width: f32) -> f32 {
    let max = (window_width
        - SIDEBAR_RAIL_WIDTH
        - HANDLE_WIDTH
        - MIN_WORKSPACE_WIDTH)
        .max(MIN_PANEL_WIDTH);

    width.clamp(MIN_PANEL_WIDTH, max)
}

/// X position of the panel's fixed right edge, where the rail begins.
///
/// Captured once per drag so pointer deltas resolve against the edge
/// as it was at press time.
pub(crate) fn drag_reference_edge(window_width: f32) -> f32 {
    window_width - SIDEBAR_RAIL_WIDTH
}

/// Resolve a pressed key against the panel chord table.
pub(crate) fn shortcut_panel(
    key: &Key,
    modifiers: Modifiers,
) -> Option<PanelId> {
    if !modifiers.command() || !modifiers.shift() {
        return None;
    }

    let Key::Character(pressed) = key else {
        return None;
    };

    PANEL_SHORTCUTS
        .into_iter()
        .find(|(chord, _)| pressed.eq_ignore_ascii_case(chord))
        .map(|(_, panel)| panel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_wide_window_when_clamping_then_requested_width_survives() {
        assert_eq!(clamp_panel_width(420.0, 1600.0), 420.0);
    }

    #[test]
    fn given_oversized_request_when_clamping_then_workspace_keeps_room() {
        let window_width = 1000.0;
        let max = window_width
            - SIDEBAR_RAIL_WIDTH
            - HANDLE_WIDTH
            - MIN_WORKSPACE_WIDTH;

        assert_eq!(clamp_panel_width(900.0, window_width), max);
    }

    #[test]
    fn given_tiny_request_when_clamping_then_minimum_width_holds() {
        assert_eq!(clamp_panel_width(10.0, 1600.0), MIN_PANEL_WIDTH);
        assert_eq!(clamp_panel_width(-50.0, 1600.0), MIN_PANEL_WIDTH);
    }

    #[test]
    fn given_narrow_window_when_clamping_then_minimum_beats_workspace() {
        assert_eq!(clamp_panel_width(400.0, 500.0), MIN_PANEL_WIDTH);
    }

    #[test]
    fn given_chord_keys_when_resolving_then_each_panel_matches() {
        let modifiers = Modifiers::COMMAND | Modifiers::SHIFT;

        for (chord, panel) in PANEL_SHORTCUTS {
            let key = Key::Character(chord.into());

            assert_eq!(shortcut_panel(&key, modifiers), Some(panel));
        }
    }

    #[test]
    fn given_uppercase_character_when_resolving_then_chord_still_matches() {
        let modifiers = Modifiers::COMMAND | Modifiers::SHIFT;
        let key = Key::Character("E".into());

        assert_eq!(shortcut_panel(&key, modifiers), Some(PanelId::Files));
    }

    #[test]
    fn given_missing_modifier_when_resolving_then_no_panel() {
        let key = Key::Character("e".into());

        assert_eq!(shortcut_panel(&key, Modifiers::COMMAND), None);
        assert_eq!(shortcut_panel(&key, Modifiers::SHIFT), None);
        assert_eq!(shortcut_panel(&key, Modifiers::empty()), None);
    }

    #[test]
    fn given_unmapped_key_when_resolving_then_no_panel() {
        let modifiers = Modifiers::COMMAND | Modifiers::SHIFT;
        let key = Key::Character("x".into());

        assert_eq!(shortcut_panel(&key, modifiers), None);
    }
}
