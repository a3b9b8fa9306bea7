use iced::{Subscription, window};

use crate::app::Event;
use crate::services::host::host_focus_worker;

pub(super) fn subscription() -> Subscription<Event> {
    let win_subs = window::events().map(|(_id, event)| Event::Window(event));
    let key_subs = iced::keyboard::listen().map(Event::Keyboard);
    let host_subs = Subscription::run(host_focus_worker).map(Event::HostFocus);

    Subscription::batch(vec![win_subs, key_subs, host_subs])
}
