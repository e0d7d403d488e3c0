//! The five principles and the practices that illustrate them

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "srp",
            Principle::OpenClosed => "ocp",
            Principle::LiskovSubstitution => "lsp",
            Principle::InterfaceSegregation => "isp",
            Principle::DependencyInversion => "dip",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "Single Responsibility",
            Principle::OpenClosed => "Open/Closed",
            Principle::LiskovSubstitution => "Liskov Substitution",
            Principle::InterfaceSegregation => "Interface Segregation",
            Principle::DependencyInversion => "Dependency Inversion",
        }
    }

    pub fn practices(&self) -> &'static [&'static str] {
        match self {
            Principle::SingleResponsibility => &["book catalog: repository + library queries"],
            Principle::OpenClosed => &[
                "shape store: circle, rectangle, triangle",
                "payroll: full-time, part-time, intern",
            ],
            Principle::LiskovSubstitution => &["payment processors: standard, credit card, PayPal, cash"],
            Principle::InterfaceSegregation => &["office machines: printer, scanner, fax"],
            Principle::DependencyInversion => &["notifications: email, SMS, push"],
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.tag())
    }
}

impl FromStr for Principle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.tag() == wanted)
            .ok_or_else(|| DomainError::UnknownPrinciple(s.to_string()))
    }
}
