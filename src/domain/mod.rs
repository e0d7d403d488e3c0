//! Domain layer: practice entities and pure calculations
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod book;
pub mod employee;
pub mod error;
pub mod kinds;
pub mod principle;
pub mod shape;

pub use book::Book;
pub use employee::{
    employee_for, Employee, EmployeeType, FullTimeEmployee, InternEmployee, PartTimeEmployee,
};
pub use error::DomainError;
pub use kinds::{format_number, Channel, MachineKind, PaymentMethod};
pub use principle::Principle;
pub use shape::{Circle, Rectangle, Shape, ShapeStore, Triangle};
