//! SOLID principles by example.
//!
//! Each principle is shown with a small service family:
//! - SRP: book catalog split into repository and query service
//! - OCP: shapes and employees extended by new types, not by edits
//! - LSP: interchangeable payment processors
//! - ISP: printers that implement only the capabilities they have
//! - DIP: notification sender depending on a notifier abstraction

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
