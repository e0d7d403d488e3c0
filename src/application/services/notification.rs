//! Notification senders
//!
//! `SendNotification` depends only on the `Notifier` abstraction; concrete
//! channels are injected at construction.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::Channel;
use crate::infrastructure::traits::Console;

pub trait Notifier: Send + Sync {
    fn send_notification(&self, message: &str);
}

pub struct EmailService {
    console: Arc<dyn Console>,
}

impl EmailService {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl Notifier for EmailService {
    fn send_notification(&self, message: &str) {
        self.console
            .write_line(&format!("Sending email with message: {}", message));
    }
}

pub struct SmsService {
    console: Arc<dyn Console>,
}

impl SmsService {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl Notifier for SmsService {
    fn send_notification(&self, message: &str) {
        self.console
            .write_line(&format!("Sending SMS with message: {}", message));
    }
}

pub struct PushNotificationService {
    console: Arc<dyn Console>,
}

impl PushNotificationService {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl Notifier for PushNotificationService {
    fn send_notification(&self, message: &str) {
        self.console
            .write_line(&format!("Sending push notification with message: {}", message));
    }
}

/// Fans one message out to several notifiers, in order.
pub struct BroadcastNotifier {
    notifiers: Vec<Arc<dyn Notifier>>,
}

impl BroadcastNotifier {
    pub fn new(notifiers: Vec<Arc<dyn Notifier>>) -> Self {
        Self { notifiers }
    }

    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Notifier for BroadcastNotifier {
    fn send_notification(&self, message: &str) {
        for notifier in &self.notifiers {
            notifier.send_notification(message);
        }
    }
}

/// High-level sender. Knows nothing about how messages are delivered.
pub struct SendNotification {
    notifier: Arc<dyn Notifier>,
}

impl SendNotification {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    #[instrument(skip_all, fields(message_len = message.len()))]
    pub fn send_notification(&self, message: &str) {
        debug!("delegating to injected notifier");
        self.notifier.send_notification(message);
    }
}

/// Build the notifier for `channel`.
pub fn notifier_for(channel: Channel, console: Arc<dyn Console>) -> Arc<dyn Notifier> {
    match channel {
        Channel::Email => Arc::new(EmailService::new(console)),
        Channel::Sms => Arc::new(SmsService::new(console)),
        Channel::Push => Arc::new(PushNotificationService::new(console)),
    }
}
