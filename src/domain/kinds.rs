//! Selector tags for the factory-built practices and number rendering

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Payment processor flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Standard,
    CreditCard,
    PayPal,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Standard,
        PaymentMethod::CreditCard,
        PaymentMethod::PayPal,
        PaymentMethod::Cash,
    ];

    /// Lenient lookup by exact, case-sensitive name: anything but `credit`,
    /// `paypal` or `cash` falls back to `Standard`.
    pub fn from_name_or_standard(name: &str) -> Self {
        match name {
            "credit" => PaymentMethod::CreditCard,
            "paypal" => PaymentMethod::PayPal,
            "cash" => PaymentMethod::Cash,
            _ => PaymentMethod::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Standard => "standard",
            PaymentMethod::CreditCard => "credit",
            PaymentMethod::PayPal => "paypal",
            PaymentMethod::Cash => "cash",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| DomainError::UnknownPaymentMethod(s.to_string()))
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Office machine flavour: a print-only printer or a multi-function device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineKind {
    Basic,
    Advanced,
}

impl FromStr for MachineKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(MachineKind::Basic),
            "advanced" => Ok(MachineKind::Advanced),
            _ => Err(DomainError::UnknownMachine(s.to_string())),
        }
    }
}

impl fmt::Display for MachineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineKind::Basic => f.write_str("basic"),
            MachineKind::Advanced => f.write_str("advanced"),
        }
    }
}

/// Notification delivery channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Channel {
    #[default]
    Email,
    Sms,
    Push,
}

impl FromStr for Channel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Channel::Email),
            "sms" => Ok(Channel::Sms),
            "push" => Ok(Channel::Push),
            _ => Err(DomainError::UnknownChannel(s.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Email => f.write_str("email"),
            Channel::Sms => f.write_str("sms"),
            Channel::Push => f.write_str("push"),
        }
    }
}

/// Shortest round-trip rendering of a number: `100`, `99.99`, `75.5`, `-50`.
/// Negative zero prints as `0`, infinities as `Infinity` / `-Infinity`.
/// Magnitudes from `1e21` up and below `1e-6` use exponent form: `1e+21`, `1.5e-7`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        let label = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return label.to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        // `{:e}` yields `1e21`; positive exponents carry an explicit sign
        let rendered = format!("{:e}", value);
        return match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => rendered,
        };
    }
    value.to_string()
}
