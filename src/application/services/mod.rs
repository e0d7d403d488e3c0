//! Application services
//!
//! Concrete service implementations, one per practice.
//! Services depend on I/O boundary traits (Console, BookStore)
//! but are themselves concrete structs.

mod library;
mod notification;
mod office;
mod payment;
mod report;

pub use library::Library;
pub use notification::{
    notifier_for, BroadcastNotifier, EmailService, Notifier, PushNotificationService,
    SendNotification, SmsService,
};
pub use office::{
    FaxMachine, MultiFunctionMachine, NewFashionedPrinter, Office, OfficeMachine,
    OldFashionedPrinter, Printer, Scanner,
};
pub use payment::{
    handle_payment, processor_for, processor_for_name, CashPayment, CreditCardPayment,
    PayPalPayment, PaymentProcessor, StandardPayment,
};
pub use report::ReportService;
