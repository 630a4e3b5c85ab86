use super::{Notification, NotificationError, NotificationSink};
use async_trait::async_trait;
use tracing::info;

/// Accepts everything and does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

#[async_trait]
impl NotificationSink for NoopSink {
    async fn send(&self, _notification: &Notification) -> Result<(), NotificationError> {
        Ok(())
    }
}

/// Logs each notification at `info` instead of delivering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
        match notification {
            Notification::Sms { to, body } => info!(channel = "sms", %to, %body, "Notification sent"),
            Notification::Email { to, subject, .. } => {
                info!(channel = "email", %to, %subject, "Notification sent")
            }
        }
        Ok(())
    }
}
