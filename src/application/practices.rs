//! Practice entry points
//!
//! Each runner sets up its small scenario and prints the results through the
//! injected console.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::services::{
    handle_payment, notifier_for, processor_for_name, Library, Office, ReportService,
    SendNotification,
};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{
    Book, Circle, Employee, FullTimeEmployee, InternEmployee, MachineKind, PaymentMethod,
    Principle, Rectangle, Shape, ShapeStore, Triangle,
};
use crate::infrastructure::traits::{BookStore, Console};
use crate::infrastructure::InMemoryBookRepository;

/// Title looked up by the catalog entry point.
pub const CATALOG_LOOKUP_TITLE: &str = "Clean Code";

/// The catalog the entry point starts from.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("Clean Code", "Edric Cao", 2023),
        Book::new("Design Pattern", "Edric Cao", 2022),
    ]
}

pub struct PracticeRunner {
    console: Arc<dyn Console>,
    settings: Arc<Settings>,
}

impl PracticeRunner {
    pub fn new(console: Arc<dyn Console>, settings: Arc<Settings>) -> Self {
        Self { console, settings }
    }

    pub fn run(&self, principle: Principle) -> ApplicationResult<()> {
        info!("running practice: {}", principle);
        match principle {
            Principle::SingleResponsibility => self.run_srp(),
            Principle::OpenClosed => self.run_ocp(),
            Principle::LiskovSubstitution => self.run_lsp(),
            Principle::InterfaceSegregation => self.run_isp(),
            Principle::DependencyInversion => self.run_dip(),
        }
    }

    pub fn run_all(&self) -> ApplicationResult<()> {
        for principle in Principle::ALL {
            self.run(principle)?;
        }
        Ok(())
    }

    /// Fill a repository, then look a book up through the library.
    #[instrument(skip(self))]
    pub fn run_srp(&self) -> ApplicationResult<()> {
        let repository = Arc::new(InMemoryBookRepository::new());
        let library = Library::new(repository.clone());
        for book in sample_books() {
            repository.add_book(book);
        }
        self.lookup_title(&library, CATALOG_LOOKUP_TITLE);
        Ok(())
    }

    /// Print the catalog entry for `title`, or `undefined` when missing.
    pub fn lookup_title(&self, library: &Library, title: &str) -> Option<Book> {
        let found = library.get_book_by_title(title);
        match &found {
            Some(book) => self.console.write_line(&book.to_string()),
            None => self.console.write_line("undefined"),
        }
        found
    }

    /// Total area of the sample shapes, then two salary lines.
    #[instrument(skip(self))]
    pub fn run_ocp(&self) -> ApplicationResult<()> {
        let report = ReportService::new(self.console.clone());

        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new(5.0)),
            Box::new(Rectangle::new(4.0, 5.0)),
            Box::new(Triangle::new(3.0)),
        ];
        report.print_total_area(&ShapeStore::new(shapes));

        let employees: Vec<Box<dyn Employee>> = vec![
            Box::new(FullTimeEmployee::new("Alice")),
            Box::new(InternEmployee::new("Bob")),
        ];
        report.print_payroll(&employees);
        Ok(())
    }

    /// Credit card, PayPal and cash through the same handler.
    #[instrument(skip(self))]
    pub fn run_lsp(&self) -> ApplicationResult<()> {
        let payment = &self.settings.payment;
        let queue = [
            (PaymentMethod::CreditCard.as_str(), payment.credit_card),
            (PaymentMethod::PayPal.as_str(), payment.paypal),
            (PaymentMethod::Cash.as_str(), payment.cash),
        ];
        for (name, amount) in queue {
            let processor = processor_for_name(name, self.console.clone());
            handle_payment(processor.as_ref(), amount);
        }
        Ok(())
    }

    /// One print on the old printer, print/scan/fax on the new one.
    #[instrument(skip(self))]
    pub fn run_isp(&self) -> ApplicationResult<()> {
        let office = Office::new(self.console.clone());

        let basic = office.machine(MachineKind::Basic);
        basic.printer().print("Document 1");

        let advanced = office.machine(MachineKind::Advanced);
        if let Some(machine) = advanced.multi_function() {
            machine.print("Document 4");
            machine.scan("Document 5");
            machine.fax("Document 6");
        }
        Ok(())
    }

    /// Send the configured message through the configured channel.
    #[instrument(skip(self))]
    pub fn run_dip(&self) -> ApplicationResult<()> {
        let channel = self.settings.notification.channel()?;
        let sender = SendNotification::new(notifier_for(channel, self.console.clone()));
        sender.send_notification(&self.settings.notification.message);
        Ok(())
    }
}
