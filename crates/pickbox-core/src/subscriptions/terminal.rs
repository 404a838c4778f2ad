use crate::event::TerminalEvent;
use crate::subscription::{Subscription, SubscriptionId};
use crossterm::event::EventStream;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Marker type identifying the terminal event subscription.
///
/// crossterm hands each event to exactly one reader, so an application should
/// hold a single terminal subscription and route events to its widgets from
/// `update` rather than giving every widget its own listener.
pub struct TerminalEvents;

/// Create a terminal events subscription that maps each event through a
/// user-provided function.
///
/// The `map` closure receives every [`TerminalEvent`] and returns `Some(Msg)`
/// to forward it to the runtime or `None` to discard it.
///
/// # Example
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| match event {
///         TerminalEvent::Key(key) => Some(Msg::Key(key)),
///         TerminalEvent::Mouse(mouse) => Some(Msg::Mouse(mouse)),
///         _ => None,
///     })]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    let map = Arc::new(map);

    // The EventStream is created inside the task: building it eagerly on every
    // subscriptions() call would poke crossterm's global reader while the live
    // stream is polling it.
    Subscription {
        id: SubscriptionId::of::<TerminalEvents>(),
        spawn: Box::new(move |tx: mpsc::UnboundedSender<Msg>| -> AbortHandle {
            let handle = tokio::spawn(async move {
                let stream = EventStream::new().filter_map(move |result| {
                    let map = map.clone();
                    async move {
                        result
                            .ok()
                            .and_then(TerminalEvent::from_crossterm)
                            .and_then(|event| map(event))
                    }
                });
                futures::pin_mut!(stream);
                while let Some(msg) = stream.next().await {
                    if tx.send(msg).is_err() {
                        break;
                    }
                }
            });
            handle.abort_handle()
        }),
    }
}
