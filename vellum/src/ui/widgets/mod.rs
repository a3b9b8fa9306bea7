pub(crate) mod aichat_panel;
pub(crate) mod icon_rail;
pub(crate) mod panel_host;
pub(crate) mod settings_panel;
