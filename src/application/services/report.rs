//! Payroll and area reports (open for new employee and shape types)
//!
//! Both reports iterate over trait objects and never look at concrete types.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::{format_number, Employee, ShapeStore};
use crate::infrastructure::traits::Console;

pub struct ReportService {
    console: Arc<dyn Console>,
}

impl ReportService {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }

    /// Print `"{name}'s salary is {salary}"` for one employee.
    pub fn print_salary(&self, employee: &dyn Employee) {
        self.console.write_line(&format!(
            "{}'s salary is {}",
            employee.name(),
            employee.calculate_salary()
        ));
    }

    /// Print every salary line and return the payroll total.
    #[instrument(skip_all, fields(employees = employees.len()))]
    pub fn print_payroll(&self, employees: &[Box<dyn Employee>]) -> u64 {
        let mut total = 0u64;
        for employee in employees {
            self.print_salary(employee.as_ref());
            total += u64::from(employee.calculate_salary());
        }
        debug!("payroll total: {}", total);
        total
    }

    /// Print the summed area of all shapes in the store and return it.
    pub fn print_total_area(&self, store: &ShapeStore) -> f64 {
        for shape in store.shapes() {
            debug!("{}: area={}", shape.name(), shape.area());
        }
        let total = store.calculate_area();
        self.console.write_line(&format_number(total));
        total
    }
}
