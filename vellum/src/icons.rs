pub(crate) const PANEL_FILES: &[u8] =
    include_bytes!("../assets/svg/files.svg");
pub(crate) const PANEL_SEARCH: &[u8] =
    include_bytes!("../assets/svg/search.svg");
pub(crate) const PANEL_SOURCE: &[u8] =
    include_bytes!("../assets/svg/source.svg");
pub(crate) const PANEL_AICHAT: &[u8] =
    include_bytes!("../assets/svg/aichat.svg");
pub(crate) const PANEL_PROFILE: &[u8] =
    include_bytes!("../assets/svg/profile.svg");
pub(crate) const PANEL_SETTINGS: &[u8] =
    include_bytes!("../assets/svg/settings.svg");
