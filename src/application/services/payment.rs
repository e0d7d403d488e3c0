//! Payment processors
//!
//! Every processor honours the same contract: it accepts any amount and
//! reports what it does on the console, without failing. Callers can swap one
//! for another through `&dyn PaymentProcessor`.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{format_number, PaymentMethod};
use crate::infrastructure::traits::Console;

pub trait PaymentProcessor: Send + Sync {
    fn method(&self) -> PaymentMethod;

    fn process_payment(&self, amount: f64);
}

/// Plain processor with no provider-specific steps.
pub struct StandardPayment {
    console: Arc<dyn Console>,
}

impl StandardPayment {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl PaymentProcessor for StandardPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Standard
    }

    fn process_payment(&self, amount: f64) {
        self.console
            .write_line(&format!("Processing payment of ${}", format_number(amount)));
    }
}

pub struct CreditCardPayment {
    console: Arc<dyn Console>,
}

impl CreditCardPayment {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl PaymentProcessor for CreditCardPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }

    fn process_payment(&self, amount: f64) {
        self.console.write_line(&format!(
            "Processing credit card payment of ${}",
            format_number(amount)
        ));
        self.console.write_line("Validating credit card details...");
        self.console.write_line("Charging the credit card...");
    }
}

pub struct PayPalPayment {
    console: Arc<dyn Console>,
}

impl PayPalPayment {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl PaymentProcessor for PayPalPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::PayPal
    }

    fn process_payment(&self, amount: f64) {
        self.console.write_line(&format!(
            "Processing PayPal payment of ${}",
            format_number(amount)
        ));
        self.console.write_line("Redirecting to PayPal...");
        self.console.write_line("Completing PayPal transaction...");
    }
}

pub struct CashPayment {
    console: Arc<dyn Console>,
}

impl CashPayment {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl PaymentProcessor for CashPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Cash
    }

    fn process_payment(&self, amount: f64) {
        self.console.write_line(&format!(
            "Processing cash payment of ${}",
            format_number(amount)
        ));
        self.console
            .write_line("Please prepare the cash for collection.");
    }
}

/// Run a payment through whichever processor is given.
pub fn handle_payment(processor: &dyn PaymentProcessor, amount: f64) {
    debug!("handle_payment: method={} amount={}", processor.method(), amount);
    processor.process_payment(amount);
}

/// Build the processor for `method`.
pub fn processor_for(method: PaymentMethod, console: Arc<dyn Console>) -> Box<dyn PaymentProcessor> {
    match method {
        PaymentMethod::Standard => Box::new(StandardPayment::new(console)),
        PaymentMethod::CreditCard => Box::new(CreditCardPayment::new(console)),
        PaymentMethod::PayPal => Box::new(PayPalPayment::new(console)),
        PaymentMethod::Cash => Box::new(CashPayment::new(console)),
    }
}

/// Build the processor for a method name; unknown names get the standard processor.
pub fn processor_for_name(name: &str, console: Arc<dyn Console>) -> Box<dyn PaymentProcessor> {
    processor_for(PaymentMethod::from_name_or_standard(name), console)
}
