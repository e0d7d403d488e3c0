//! Employees and their salary rules
//!
//! Each employee kind carries its own salary rule; payroll code works against
//! the `Employee` trait and never branches on the type tag.

use std::fmt;

/// Employment type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EmployeeType {
    FullTime = 0,
    PartTime = 1,
    Intern = 2,
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EmployeeType::FullTime => "full-time",
            EmployeeType::PartTime => "part-time",
            EmployeeType::Intern => "intern",
        };
        f.write_str(label)
    }
}

pub trait Employee: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    fn employee_type(&self) -> EmployeeType;

    fn calculate_salary(&self) -> u32;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullTimeEmployee {
    name: String,
}

impl FullTimeEmployee {
    pub const SALARY: u32 = 5000;

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Employee for FullTimeEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn employee_type(&self) -> EmployeeType {
        EmployeeType::FullTime
    }

    fn calculate_salary(&self) -> u32 {
        Self::SALARY
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartTimeEmployee {
    name: String,
}

impl PartTimeEmployee {
    pub const SALARY: u32 = 3000;

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Employee for PartTimeEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn employee_type(&self) -> EmployeeType {
        EmployeeType::PartTime
    }

    fn calculate_salary(&self) -> u32 {
        Self::SALARY
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternEmployee {
    name: String,
}

impl InternEmployee {
    pub const SALARY: u32 = 1000;

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Employee for InternEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn employee_type(&self) -> EmployeeType {
        EmployeeType::Intern
    }

    fn calculate_salary(&self) -> u32 {
        Self::SALARY
    }
}

/// Build the employee matching `employee_type`.
pub fn employee_for(employee_type: EmployeeType, name: impl Into<String>) -> Box<dyn Employee> {
    match employee_type {
        EmployeeType::FullTime => Box::new(FullTimeEmployee::new(name)),
        EmployeeType::PartTime => Box::new(PartTimeEmployee::new(name)),
        EmployeeType::Intern => Box::new(InternEmployee::new(name)),
    }
}
