//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::practices::{sample_books, PracticeRunner};
use crate::application::services::{notifier_for, Library, Office, SendNotification};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::Channel;
use crate::infrastructure::repository::InMemoryBookRepository;
use crate::infrastructure::traits::{BookStore, Console, StdoutConsole};

/// Container holding the shared dependencies of all practices.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Console abstraction
    pub console: Arc<dyn Console>,

    /// Book storage, pre-filled with the sample catalog
    pub books: Arc<dyn BookStore>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(StdoutConsole),
            Arc::new(InMemoryBookRepository::with_books(sample_books())),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        console: Arc<dyn Console>,
        books: Arc<dyn BookStore>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            console,
            books,
        }
    }

    pub fn practices(&self) -> PracticeRunner {
        PracticeRunner::new(self.console.clone(), self.settings.clone())
    }

    pub fn library(&self) -> Library {
        Library::new(self.books.clone())
    }

    pub fn office(&self) -> Office {
        Office::new(self.console.clone())
    }

    /// Sender for `channel`, or for the configured channel when `None`.
    pub fn sender(&self, channel: Option<Channel>) -> ApplicationResult<SendNotification> {
        let channel = match channel {
            Some(channel) => channel,
            None => self.settings.notification.channel()?,
        };
        Ok(SendNotification::new(notifier_for(
            channel,
            self.console.clone(),
        )))
    }
}
