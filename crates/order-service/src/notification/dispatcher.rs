//! Detached, bounded delivery queue.

use super::{order_confirmations, Notification, NotificationSink, Recipient, RecipientDirectory};
use crate::model::PlacedOrder;
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// One unit of work for the worker.
#[derive(Debug)]
enum Job {
    Deliver(Notification),
    /// Resolve the customer's contact details, then send every confirmation.
    ConfirmOrder {
        placed: PlacedOrder,
        fallback_email: Option<String>,
    },
}

impl Job {
    fn kind(&self) -> &'static str {
        match self {
            Job::Deliver(notification) => notification.channel(),
            Job::ConfirmOrder { .. } => "order confirmation",
        }
    }
}

/// Cloneable handle that queues notifications without waiting.
#[derive(Clone)]
pub struct NotificationDispatcher {
    sender: mpsc::Sender<Job>,
}

impl NotificationDispatcher {
    /// Queues `notification`. Returns `false` when it was dropped because the queue is
    /// full or the worker has stopped.
    pub fn dispatch(&self, notification: Notification) -> bool {
        self.enqueue(Job::Deliver(notification))
    }

    /// Queues the confirmations for `placed`. The worker looks the customer up and
    /// falls back to `fallback_email` when no contact details are found.
    pub fn confirm_order(&self, placed: PlacedOrder, fallback_email: Option<String>) -> bool {
        self.enqueue(Job::ConfirmOrder {
            placed,
            fallback_email,
        })
    }

    fn enqueue(&self, job: Job) -> bool {
        match self.sender.try_send(job) {
            Ok(()) => true,
            Err(TrySendError::Full(dropped)) => {
                warn!(job = dropped.kind(), "Notification queue full, dropping");
                false
            }
            Err(TrySendError::Closed(dropped)) => {
                warn!(job = dropped.kind(), "Notification worker stopped, dropping");
                false
            }
        }
    }
}

/// Drains the queue into a [`NotificationSink`], one delivery at a time.
pub struct NotificationWorker {
    receiver: mpsc::Receiver<Job>,
    sink: Arc<dyn NotificationSink>,
    directory: Option<Arc<dyn RecipientDirectory>>,
}

impl NotificationWorker {
    /// Creates the worker and its dispatcher. `capacity` bounds the queue.
    pub fn new(capacity: usize, sink: Arc<dyn NotificationSink>) -> (Self, NotificationDispatcher) {
        let (sender, receiver) = mpsc::channel(capacity);
        (
            Self {
                receiver,
                sink,
                directory: None,
            },
            NotificationDispatcher { sender },
        )
    }

    /// Looks order confirmation recipients up in `directory`. Without one, only the
    /// fallback email is used.
    pub fn with_directory(mut self, directory: Arc<dyn RecipientDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Runs until every dispatcher is dropped and the queue is empty.
    pub async fn run(mut self) {
        info!("Notification worker started");
        let mut delivered = 0usize;
        let mut failed = 0usize;

        while let Some(job) = self.receiver.recv().await {
            let notifications = match job {
                Job::Deliver(notification) => vec![notification],
                Job::ConfirmOrder {
                    placed,
                    fallback_email,
                } => {
                    let recipient = self.recipient_for(&placed, fallback_email).await;
                    let confirmations = order_confirmations(&placed, &recipient);
                    if confirmations.is_empty() {
                        debug!(order_id = %placed.order.id, "No contact details, nothing to send");
                    }
                    confirmations
                }
            };

            for notification in notifications {
                match self.sink.send(&notification).await {
                    Ok(()) => {
                        delivered += 1;
                        debug!(channel = notification.channel(), "Notification delivered");
                    }
                    Err(e) => {
                        failed += 1;
                        warn!(channel = notification.channel(), error = %e, "Notification failed");
                    }
                }
            }
        }

        info!(delivered, failed, "Notification worker stopped");
    }

    async fn recipient_for(&self, placed: &PlacedOrder, fallback_email: Option<String>) -> Recipient {
        let found = match &self.directory {
            Some(directory) => match directory.recipient(placed.order.customer_id).await {
                Ok(found) => found,
                Err(e) => {
                    warn!(error = %e, "Customer lookup failed, using principal contact");
                    None
                }
            },
            None => None,
        };
        found.unwrap_or(Recipient {
            email: fallback_email,
            ..Default::default()
        })
    }

    /// Spawns [`NotificationWorker::run`] on the runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerId, Order, OrderId, OrderStatus};
    use crate::notification::NotificationError;
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    #[derive(Default)]
    struct Recording {
        sent: Mutex<Vec<Notification>>,
    }

    #[async_trait]
    impl NotificationSink for Recording {
        async fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
            self.sent.lock().unwrap().push(notification.clone());
            Ok(())
        }
    }

    /// Blocks every send until released.
    struct Gate(Arc<Notify>);

    #[async_trait]
    impl NotificationSink for Gate {
        async fn send(&self, _: &Notification) -> Result<(), NotificationError> {
            self.0.notified().await;
            Ok(())
        }
    }

    fn sms(n: usize) -> Notification {
        Notification::Sms {
            to: "+15550100".into(),
            body: format!("message {n}"),
        }
    }

    #[tokio::test]
    async fn test_worker_drains_queue_before_stopping() {
        let sink = Arc::new(Recording::default());
        let (worker, dispatcher) = NotificationWorker::new(8, sink.clone());

        for n in 0..3 {
            assert!(dispatcher.dispatch(sms(n)));
        }
        let handle = worker.spawn();
        drop(dispatcher);
        handle.await.unwrap();

        assert_eq!(*sink.sent.lock().unwrap(), vec![sms(0), sms(1), sms(2)]);
    }

    #[tokio::test]
    async fn test_full_queue_drops_instead_of_waiting() {
        let release = Arc::new(Notify::new());
        let (worker, dispatcher) = NotificationWorker::new(1, Arc::new(Gate(release.clone())));

        // Worker not running yet: first fills the queue, second is dropped.
        assert!(dispatcher.dispatch(sms(0)));
        assert!(!dispatcher.dispatch(sms(1)));

        let handle = worker.spawn();
        release.notify_one();
        drop(dispatcher);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_stopped_worker_drops() {
        let (worker, dispatcher) = NotificationWorker::new(4, Arc::new(Recording::default()));
        drop(worker);
        assert!(!dispatcher.dispatch(sms(0)));
    }

    /// Answers after `release` is notified, or fails when `contact` is `None`.
    struct SlowDirectory {
        release: Arc<Notify>,
        contact: Option<Recipient>,
    }

    #[async_trait]
    impl RecipientDirectory for SlowDirectory {
        async fn recipient(
            &self,
            _customer_id: CustomerId,
        ) -> Result<Option<Recipient>, NotificationError> {
            self.release.notified().await;
            match &self.contact {
                Some(contact) => Ok(Some(contact.clone())),
                None => Err(NotificationError::ContactLookup("customer store closed".into())),
            }
        }
    }

    fn placed() -> PlacedOrder {
        let now = Utc::now();
        PlacedOrder {
            order: Order {
                id: OrderId::generate(),
                customer_id: CustomerId::generate(),
                total: Decimal::from(40),
                status: OrderStatus::Pending,
                created_at: now,
                updated_at: now,
            },
            items: vec![],
        }
    }

    #[tokio::test]
    async fn test_confirmation_lookup_runs_on_the_worker() {
        let sink = Arc::new(Recording::default());
        let release = Arc::new(Notify::new());
        let directory = SlowDirectory {
            release: release.clone(),
            contact: Some(Recipient {
                name: Some("Ada".into()),
                email: Some("ada@example.com".into()),
                phone: Some("+15550100".into()),
            }),
        };
        let (worker, dispatcher) = NotificationWorker::new(4, sink.clone());
        let handle = worker.with_directory(Arc::new(directory)).spawn();

        // Queued while the directory has not answered yet
        assert!(dispatcher.confirm_order(placed(), Some("fallback@example.com".into())));
        assert!(sink.sent.lock().unwrap().is_empty());

        release.notify_one();
        drop(dispatcher);
        handle.await.unwrap();

        let sent = sink.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert!(matches!(&sent[0], Notification::Sms { to, .. } if to == "+15550100"));
        assert!(matches!(&sent[1], Notification::Email { to, .. } if to == "ada@example.com"));
    }

    #[tokio::test]
    async fn test_failed_lookup_falls_back_to_email() {
        let sink = Arc::new(Recording::default());
        let release = Arc::new(Notify::new());
        release.notify_one();
        let directory = SlowDirectory {
            release,
            contact: None,
        };
        let (worker, dispatcher) = NotificationWorker::new(4, sink.clone());
        let handle = worker.with_directory(Arc::new(directory)).spawn();

        assert!(dispatcher.confirm_order(placed(), Some("ada@example.com".into())));
        drop(dispatcher);
        handle.await.unwrap();

        let sent = sink.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(matches!(&sent[0], Notification::Email { to, body, .. }
            if to == "ada@example.com" && body.starts_with("Dear customer,")));
    }
}
