use iced::futures::{SinkExt, Stream};
use tokio::sync::mpsc;

use crate::panels::PanelId;

/// Buffered focus updates per connection; bursts beyond this are dropped.
const FOCUS_CHANNEL_CAPACITY: usize = 16;

/// Callback handed to the host for one focus channel.
pub(crate) type FocusNotify = Box<dyn Fn() + Send + Sync>;

/// Cancels one host subscription. Must be called at most once.
pub(crate) type Unsubscribe = Box<dyn FnOnce() + Send>;

/// Capability surface of the embedding host.
///
/// Each method wires a menu or global entry point of the host to one
/// sidebar panel. A host that does not expose a given entry point
/// returns `None` and the renderer simply never hears about it.
pub(crate) trait HostBridge: Send + Sync {
    fn on_focus_files(&self, notify: FocusNotify) -> Option<Unsubscribe>;

    fn on_focus_search(&self, notify: FocusNotify) -> Option<Unsubscribe>;

    fn on_focus_source(&self, notify: FocusNotify) -> Option<Unsubscribe>;

    fn on_focus_aichat(&self, notify: FocusNotify) -> Option<Unsubscribe>;
}

/// Bridge used when the renderer runs without an embedding host.
pub(crate) struct NullHostBridge;

impl HostBridge for NullHostBridge {
    fn on_focus_files(&self, _notify: FocusNotify) -> Option<Unsubscribe> {
        None
    }

    fn on_focus_search(&self, _notify: FocusNotify) -> Option<Unsubscribe> {
        None
    }

    fn on_focus_source(&self, _notify: FocusNotify) -> Option<Unsubscribe> {
        None
    }

    fn on_focus_aichat(&self, _notify: FocusNotify) -> Option<Unsubscribe> {
        None
    }
}

/// Owns one host subscription and releases it exactly once on drop.
pub(crate) struct FocusGuard {
    unsubscribe: Option<Unsubscribe>,
}

impl FocusGuard {
    fn new(unsubscribe: Unsubscribe) -> Self {
        Self {
            unsubscribe: Some(unsubscribe),
        }
    }
}

impl Drop for FocusGuard {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

/// Subscribe every focus channel the host exposes.
///
/// Returns one guard per accepted channel; dropping the guards is the
/// only way the subscriptions end.
pub(crate) fn subscribe_focus_channels(
    bridge: &dyn HostBridge,
    sender: &mpsc::Sender<PanelId>,
) -> Vec<FocusGuard> {
    let subscriptions = [
        bridge.on_focus_files(focus_notify(sender, PanelId::Files)),
        bridge.on_focus_search(focus_notify(sender, PanelId::Search)),
        bridge.on_focus_source(focus_notify(sender, PanelId::Source)),
        bridge.on_focus_aichat(focus_notify(sender, PanelId::Aichat)),
    ];

    subscriptions
        .into_iter()
        .flatten()
        .map(FocusGuard::new)
        .collect()
}

fn focus_notify(sender: &mpsc::Sender<PanelId>, panel: PanelId) -> FocusNotify {
    let sender = sender.clone();

    Box::new(move || {
        if let Err(err) = sender.try_send(panel) {
            log::warn!(
                "host focus notification for {} dropped: {err}",
                panel.route_key()
            );
        }
    })
}

/// Updates emitted by the host focus worker.
#[derive(Debug, Clone)]
pub(crate) enum HostFocusUpdate {
    /// Worker is live; the app wires this sender into the bridge.
    Connected(mpsc::Sender<PanelId>),
    /// The host asked to bring one panel to the front.
    Focused(PanelId),
}

/// Long-lived worker bridging host callbacks into the event loop.
///
/// Host callbacks fire on arbitrary host threads, so they only push
/// into an async channel; this worker forwards the updates from the
/// async side into app events.
pub(crate) fn host_focus_worker() -> impl Stream<Item = HostFocusUpdate> {
    iced::stream::channel(
        FOCUS_CHANNEL_CAPACITY,
        |mut output: iced::futures::channel::mpsc::Sender<HostFocusUpdate>| async move {
            let (sender, mut receiver) = mpsc::channel(FOCUS_CHANNEL_CAPACITY);

            if output.send(HostFocusUpdate::Connected(sender)).await.is_err() {
                return;
            }

            while let Some(panel) = receiver.recv().await {
                if output.send(HostFocusUpdate::Focused(panel)).await.is_err() {
                    break;
                }
            }
        },
    )
}
