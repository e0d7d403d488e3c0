//! Office machines
//!
//! Printing, scanning and faxing are separate capabilities. A print-only
//! device implements `Printer` and nothing else; clients that need every
//! capability ask for `MultiFunctionMachine`.

use std::sync::Arc;

use tracing::debug;

use crate::domain::MachineKind;
use crate::infrastructure::traits::Console;

pub trait Printer: Send + Sync {
    fn print(&self, document: &str);
}

pub trait Scanner: Send + Sync {
    fn scan(&self, document: &str);
}

pub trait FaxMachine: Send + Sync {
    fn fax(&self, document: &str);
}

/// Print + scan + fax.
pub trait MultiFunctionMachine: Printer + Scanner + FaxMachine {
    /// View restricted to the printing capability.
    fn as_printer(&self) -> &dyn Printer;
}

impl<T: Printer + Scanner + FaxMachine> MultiFunctionMachine for T {
    fn as_printer(&self) -> &dyn Printer {
        self
    }
}

/// Print-only device.
pub struct OldFashionedPrinter {
    console: Arc<dyn Console>,
}

impl OldFashionedPrinter {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl Printer for OldFashionedPrinter {
    fn print(&self, document: &str) {
        self.console
            .write_line(&format!("Printing document: {}", document));
    }
}

/// Multi-function device.
pub struct NewFashionedPrinter {
    console: Arc<dyn Console>,
}

impl NewFashionedPrinter {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl Printer for NewFashionedPrinter {
    fn print(&self, document: &str) {
        self.console
            .write_line(&format!("Printing document: {}", document));
    }
}

impl Scanner for NewFashionedPrinter {
    fn scan(&self, document: &str) {
        self.console
            .write_line(&format!("Scanning document: {}", document));
    }
}

impl FaxMachine for NewFashionedPrinter {
    fn fax(&self, document: &str) {
        self.console
            .write_line(&format!("Faxing document: {}", document));
    }
}

/// A machine as handed out by the office: either print-only or full-featured.
pub enum OfficeMachine {
    Basic(Box<dyn Printer>),
    Advanced(Box<dyn MultiFunctionMachine>),
}

impl OfficeMachine {
    pub fn kind(&self) -> MachineKind {
        match self {
            OfficeMachine::Basic(_) => MachineKind::Basic,
            OfficeMachine::Advanced(_) => MachineKind::Advanced,
        }
    }

    pub fn printer(&self) -> &dyn Printer {
        match self {
            OfficeMachine::Basic(printer) => printer.as_ref(),
            OfficeMachine::Advanced(machine) => machine.as_printer(),
        }
    }

    /// Full capability set, if this machine has it.
    pub fn multi_function(&self) -> Option<&dyn MultiFunctionMachine> {
        match self {
            OfficeMachine::Basic(_) => None,
            OfficeMachine::Advanced(machine) => Some(machine.as_ref()),
        }
    }
}

/// Hands out machines and runs document jobs on them.
pub struct Office {
    console: Arc<dyn Console>,
}

impl Office {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }

    pub fn machine(&self, kind: MachineKind) -> OfficeMachine {
        match kind {
            MachineKind::Basic => {
                OfficeMachine::Basic(Box::new(OldFashionedPrinter::new(self.console.clone())))
            }
            MachineKind::Advanced => {
                OfficeMachine::Advanced(Box::new(NewFashionedPrinter::new(self.console.clone())))
            }
        }
    }

    /// Print the document, then scan and fax it where the machine can.
    pub fn run_job(&self, machine: &OfficeMachine, document: &str) {
        debug!("run_job: machine={} document_len={}", machine.kind(), document.len());
        match machine.multi_function() {
            Some(full) => {
                full.print(document);
                full.scan(document);
                full.fax(document);
            }
            None => machine.printer().print(document),
        }
    }
}
