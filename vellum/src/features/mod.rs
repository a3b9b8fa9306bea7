use iced::Task;

use crate::app::Event as AppEvent;

pub(crate) mod aichat;
pub(crate) mod router;
pub(crate) mod settings;
pub(crate) mod sidebar;

/// Shared feature contract for stateful domain modules.
pub(crate) trait Feature {
    type Event;
    type Ctx<'a>
    where
        Self: 'a;

    /// Reduce a typed feature event into state mutations and routed app tasks.
    fn reduce<'a>(
        &mut self,
        event: Self::Event,
        ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent>;
}

/// Root container for struct-based features.
pub(crate) struct Features {
    aichat: aichat::AichatFeature,
    router: router::RouterFeature,
    settings: settings::SettingsFeature,
    sidebar: sidebar::SidebarFeature,
}

impl Features {
    pub(crate) fn new() -> Self {
        Self {
            aichat: aichat::AichatFeature::new(),
            router: router::RouterFeature::new(),
            settings: settings::SettingsFeature::new(),
            sidebar: sidebar::SidebarFeature::new(),
        }
    }

    /// Return read-only access to AI chat feature state and queries.
    pub(crate) fn aichat(&self) -> &aichat::AichatFeature {
        &self.aichat
    }

    /// Return mutable access for routing AI chat events.
    pub(crate) fn aichat_mut(&mut self) -> &mut aichat::AichatFeature {
        &mut self.aichat
    }

    /// Return read-only access to router feature state and queries.
    pub(crate) fn router(&self) -> &router::RouterFeature {
        &self.router
    }

    /// Return mutable access for routing navigation events.
    pub(crate) fn router_mut(&mut self) -> &mut router::RouterFeature {
        &mut self.router
    }

    /// Return read-only access to settings feature state and queries.
    pub(crate) fn settings(&self) -> &settings::SettingsFeature {
        &self.settings
    }

    /// Return mutable access for routing settings events.
    pub(crate) fn settings_mut(&mut self) -> &mut settings::SettingsFeature {
        &mut self.settings
    }

    /// Return read-only access to sidebar feature state and queries.
    pub(crate) fn sidebar(&self) -> &sidebar::SidebarFeature {
        &self.sidebar
    }

    /// Return mutable access for routing sidebar events.
    pub(crate) fn sidebar_mut(&mut self) -> &mut sidebar::SidebarFeature {
        &mut self.sidebar
    }
}
