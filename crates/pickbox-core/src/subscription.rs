use futures::stream::BoxStream;
use futures::StreamExt;
use std::any::TypeId;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// A long-lived event source managed by the runtime.
///
/// Subscriptions are declared in [`Model::subscriptions`](crate::Model::subscriptions)
/// after every update. The runtime starts the ones it has not seen before and
/// aborts the ones that disappeared, so a listener lives exactly as long as
/// the model keeps asking for it and is always torn down on shutdown.
pub struct Subscription<Msg: Send + 'static> {
    pub(crate) id: SubscriptionId,
    pub(crate) spawn: Box<dyn FnOnce(mpsc::UnboundedSender<Msg>) -> AbortHandle + Send>,
}

/// Identity for diffing subscriptions between update cycles: a [`TypeId`]
/// plus a numeric discriminant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    type_id: TypeId,
    discriminant: u64,
}

impl SubscriptionId {
    /// Create an ID from a type and a numeric discriminant.
    pub fn new<T: 'static>(discriminant: u64) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            discriminant,
        }
    }

    /// Create an ID from a type alone (for singletons).
    pub fn of<T: 'static>() -> Self {
        Self::new::<T>(0)
    }
}

impl<Msg: Send + 'static> Subscription<Msg> {
    /// Create from a raw stream and id.
    pub fn from_stream(id: SubscriptionId, stream: BoxStream<'static, Msg>) -> Self {
        Subscription {
            id,
            spawn: Box::new(move |tx| {
                let handle = tokio::spawn(async move {
                    let mut stream = stream;
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
}

/// Manages active subscriptions, performing diffing between cycles.
pub(crate) struct SubscriptionManager<Msg: Send + 'static> {
    active: HashMap<SubscriptionId, AbortHandle>,
    msg_tx: mpsc::UnboundedSender<Msg>,
}

impl<Msg: Send + 'static> SubscriptionManager<Msg> {
    pub fn new(msg_tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            active: HashMap::new(),
            msg_tx,
        }
    }

    /// Start new subscriptions, abort removed ones, keep unchanged ones.
    pub fn reconcile(&mut self, subs: Vec<Subscription<Msg>>) {
        let mut wanted: HashMap<SubscriptionId, Subscription<Msg>> =
            subs.into_iter().map(|sub| (sub.id.clone(), sub)).collect();

        self.active.retain(|id, handle| {
            let keep = wanted.contains_key(id);
            if !keep {
                handle.abort();
            }
            keep
        });

        for (id, sub) in wanted.drain() {
            if !self.active.contains_key(&id) {
                let handle = (sub.spawn)(self.msg_tx.clone());
                self.active.insert(id, handle);
            }
        }
    }

    /// Abort all active subscriptions.
    pub fn shutdown(&mut self) {
        for (_, handle) in self.active.drain() {
            handle.abort();
        }
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(id: SubscriptionId) -> Subscription<i32> {
        let stream: BoxStream<'static, i32> = Box::pin(futures::stream::pending());
        Subscription::from_stream(id, stream)
    }

    #[test]
    fn subscription_id_equality() {
        assert_eq!(SubscriptionId::of::<String>(), SubscriptionId::of::<String>());
        assert_ne!(SubscriptionId::of::<String>(), SubscriptionId::of::<i32>());
        assert_ne!(
            SubscriptionId::new::<String>(1),
            SubscriptionId::new::<String>(2)
        );
    }

    #[tokio::test]
    async fn manager_starts_and_stops() {
        let (tx, _rx) = mpsc::unbounded_channel::<i32>();
        let mut manager = SubscriptionManager::new(tx);

        manager.reconcile(vec![pending(SubscriptionId::of::<String>())]);
        assert_eq!(manager.active_count(), 1);

        manager.reconcile(vec![]);
        assert_eq!(manager.active_count(), 0);
    }

    #[tokio::test]
    async fn manager_keeps_existing() {
        let (tx, _rx) = mpsc::unbounded_channel::<i32>();
        let mut manager = SubscriptionManager::new(tx);
        let id = SubscriptionId::of::<String>();

        manager.reconcile(vec![pending(id.clone())]);
        manager.reconcile(vec![pending(id)]);
        assert_eq!(manager.active_count(), 1);
    }

    #[tokio::test]
    async fn manager_forwards_stream_items() {
        let (tx, mut rx) = mpsc::unbounded_channel::<i32>();
        let mut manager = SubscriptionManager::new(tx);
        let stream: BoxStream<'static, i32> = Box::pin(futures::stream::iter(vec![1, 2]));

        manager.reconcile(vec![Subscription::from_stream(
            SubscriptionId::of::<u8>(),
            stream,
        )]);

        assert_eq!(rx.recv().await, Some(1));
        assert_eq!(rx.recv().await, Some(2));
    }

    #[tokio::test]
    async fn manager_shutdown() {
        let (tx, _rx) = mpsc::unbounded_channel::<i32>();
        let mut manager = SubscriptionManager::new(tx);

        manager.reconcile(vec![
            pending(SubscriptionId::new::<String>(1)),
            pending(SubscriptionId::new::<String>(2)),
        ]);
        assert_eq!(manager.active_count(), 2);

        manager.shutdown();
        assert_eq!(manager.active_count(), 0);
    }
}
