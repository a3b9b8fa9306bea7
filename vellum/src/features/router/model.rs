use crate::panels::PanelId;

/// Route prefix of every main window path.
pub(crate) const MAIN_WINDOW: &str = "/main_window";

/// Match order for deriving the active panel from a path.
///
/// Earlier entries win when a path mentions several panel keys, so the
/// list is ordered by how prominent each panel is in the app.
pub(crate) const PANEL_PRIORITY: [PanelId; 6] = [
    PanelId::Files,
    PanelId::Search,
    PanelId::Source,
    PanelId::Aichat,
    PanelId::Profile,
    PanelId::Settings,
];

/// Canonical path for one panel.
pub(crate) fn panel_route(panel: PanelId) -> String {
    format!("{MAIN_WINDOW}/{}", panel.route_key())
}

/// Derive which panel a path refers to.
///
/// The first priority entry whose route key occurs anywhere in the
/// path wins; paths naming no panel fall back to the files panel, so
/// every path resolves to something renderable.
pub(crate) fn active_panel_from_path(path: &str) -> PanelId {
    PANEL_PRIORITY
        .into_iter()
        .find(|panel| path.contains(panel.route_key()))
        .unwrap_or(PanelId::Files)
}
