#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Size, Subscription, Task, Theme};

use crate::features::router::RouterEvent;
use crate::features::{Features, aichat, settings};
use crate::services::ServiceRegistry;
use crate::services::host::{FocusGuard, HostFocusUpdate};
use crate::state::State;
use crate::theme::ThemeManager;
use crate::ui::components::{drag_overlay, resize_handle};
use crate::ui::widgets::icon_rail;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Clone)]
pub(crate) enum Event {
    IcedReady,
    IconRail(icon_rail::IconRailEvent),
    ResizeHandle(resize_handle::ResizeHandleEvent),
    DragOverlay(drag_overlay::DragOverlayEvent),
    Router(RouterEvent),
    Aichat(aichat::AichatEvent),
    Settings(settings::SettingsEvent),
    SettingsApplied(settings::SettingsData),
    HostFocus(HostFocusUpdate),
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

pub(crate) struct App {
    theme_manager: ThemeManager,
    state: State,
    features: Features,
    services: ServiceRegistry,
    host_guards: Vec<FocusGuard>,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Event>) {
        let window_size = Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        };

        let app = App {
            theme_manager: ThemeManager::new(),
            state: State::new(window_size),
            features: Features::new(),
            services: ServiceRegistry::new(),
            host_guards: Vec::new(),
        };

        (app, Task::done(()).map(|_: ()| Event::IcedReady))
    }

    pub(crate) fn title(&self) -> String {
        String::from("Vellum")
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    pub(crate) fn subscription(&self) -> Subscription<Event> {
        subscription::subscription()
    }

    pub(crate) fn update(&mut self, event: Event) -> Task<Event> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, Event, Theme, iced::Renderer> {
        view::view(self)
    }
}
