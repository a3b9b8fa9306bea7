use crate::panels::PanelId;

/// Navigation requests accepted by the router feature.
#[derive(Debug, Clone)]
pub(crate) enum RouterEvent {
    Navigate(PanelId),
}
