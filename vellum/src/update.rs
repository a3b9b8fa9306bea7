use iced::{Task, window};

use super::{App, Event};
use crate::features::Feature;
use crate::features::aichat::AichatCtx;
use crate::features::router::RouterEvent;
use crate::features::settings::{SettingsCtx, SettingsEvent};
use crate::features::sidebar::{SidebarCtx, SidebarEvent, shortcut_panel};
use crate::services::ServiceRegistry;
use crate::services::host::{HostFocusUpdate, subscribe_focus_channels};

pub(super) fn update(app: &mut App, event: Event) -> Task<Event> {
    use Event::*;

    match event {
        IcedReady => {
            let ctx = settings_ctx(&app.services);
            app.features
                .settings_mut()
                .reduce(SettingsEvent::Reload, &ctx)
        },
        IconRail(event) => reduce_sidebar(app, SidebarEvent::Rail(event)),
        ResizeHandle(event) => reduce_sidebar(app, SidebarEvent::Handle(event)),
        DragOverlay(event) => reduce_sidebar(app, SidebarEvent::Overlay(event)),
        Router(event) => app.features.router_mut().reduce(event, &()),
        Aichat(event) => {
            let ctx = aichat_ctx(&app.services);
            app.features.aichat_mut().reduce(event, &ctx)
        },
        Settings(event) => {
            let ctx = settings_ctx(&app.services);
            app.features.settings_mut().reduce(event, &ctx)
        },
        SettingsApplied(settings) => {
            app.theme_manager.apply_preset(settings.theme());
            Task::none()
        },
        HostFocus(event) => handle_host_focus(app, event),
        Keyboard(event) => handle_keyboard(event),
        Window(window::Event::Opened { size, .. })
        | Window(window::Event::Resized(size)) => {
            app.state.window_size = size;
            reduce_sidebar(app, SidebarEvent::WindowResized)
        },
        Window(window::Event::Unfocused) => {
            // A release outside the window never reaches the overlay.
            reduce_sidebar(app, SidebarEvent::AbortDrag)
        },
        Window(_) => Task::none(),
    }
}

fn handle_keyboard(event: iced::keyboard::Event) -> Task<Event> {
    if let iced::keyboard::Event::KeyPressed { key, modifiers, .. } = event {
        if let Some(panel) = shortcut_panel(&key, modifiers) {
            return Task::done(Event::Router(RouterEvent::Navigate(panel)));
        }
    }

    Task::none()
}

fn handle_host_focus(app: &mut App, event: HostFocusUpdate) -> Task<Event> {
    match event {
        HostFocusUpdate::Connected(sender) => {
            // Replacing the guards releases any previous subscriptions.
            app.host_guards =
                subscribe_focus_channels(app.services.host(), &sender);
            Task::none()
        },
        HostFocusUpdate::Focused(panel) => {
            Task::done(Event::Router(RouterEvent::Navigate(panel)))
        },
    }
}

fn reduce_sidebar(app: &mut App, event: SidebarEvent) -> Task<Event> {
    let ctx = SidebarCtx {
        window_width: app.state.window_size.width,
    };
    app.features.sidebar_mut().reduce(event, &ctx)
}

fn aichat_ctx(services: &ServiceRegistry) -> AichatCtx<'_> {
    AichatCtx {
        config: services.config(),
    }
}

fn settings_ctx(services: &ServiceRegistry) -> SettingsCtx<'_> {
    SettingsCtx {
        config: services.config(),
    }
}
