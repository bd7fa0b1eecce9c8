//! # Employee
//!
//! A value entity whose salary invariant is enforced at construction and on
//! mutation, with two deliberately different policies:
//!
//! - construction floors a non-negative salary below [`MIN_SALARY`] and rejects a
//!   negative one with [`SalaryError`];
//! - [`Employee::set_salary`] rejects anything below [`MIN_SALARY`] with the generic
//!   [`ValidationError`].
//!
//! Comparisons go through the [`Staff`] trait and only succeed between values of the
//! exact same concrete type, so a [`Manager`] never compares equal to a plain
//! [`Employee`] even when name and salary match.

use crate::error::{SalaryError, SourceError, ValidationError};
use crate::source::LineReader;
use std::any::Any;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Lowest salary any employee may hold
pub const MIN_SALARY: f64 = 30000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    salary: f64,
}

impl Employee {
    /// Create an employee
    ///
    /// # Example
    /// ```
    /// use classwork_core::{Employee, MIN_SALARY};
    /// assert_eq!(Employee::new("Kat", 100.0).unwrap().salary(), MIN_SALARY);
    /// assert!(Employee::new("Kat", -200.0).is_err());
    /// ```
    pub fn new(name: impl Into<String>, salary: f64) -> Result<Self, SalaryError> {
        let name = name.into();
        let salary = if salary >= MIN_SALARY {
            salary
        } else if salary < 0.0 {
            return Err(SalaryError::Negative(salary));
        } else {
            debug!(%name, requested = salary, "flooring salary to the minimum");
            MIN_SALARY
        };
        Ok(Self { name, salary })
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Replace the salary; values below [`MIN_SALARY`] are refused
    pub fn set_salary(&mut self, salary: f64) -> Result<(), ValidationError> {
        if salary < MIN_SALARY {
            warn!(name = %self.name, requested = salary, "rejected salary update");
            return Err(ValidationError {
                field: "salary",
                minimum: MIN_SALARY,
                value: salary,
            });
        }
        self.salary = salary;
        Ok(())
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "My name is {} and my salary is {}.",
            self.name, self.salary
        )
    }
}

/// Shared behaviour of every employee variant
pub trait Staff: Any {
    /// The employee record carrying name and salary
    fn employee(&self) -> &Employee;

    fn employee_mut(&mut self) -> &mut Employee;

    fn as_any(&self) -> &dyn Any;

    /// A new value of the implementing variant at the default salary
    fn with_default_salary(name: String) -> Self
    where
        Self: Sized;

    /// Factory: the first line of `path` becomes the name, salary is the default
    fn from_file(path: &Path, reader: &dyn LineReader) -> Result<Self, SourceError>
    where
        Self: Sized,
    {
        let name = reader.read_first_line(path)?;
        Ok(Self::with_default_salary(name))
    }

    fn name(&self) -> &str {
        &self.employee().name
    }

    fn salary(&self) -> f64 {
        self.employee().salary
    }

    fn set_salary(&mut self, salary: f64) -> Result<(), ValidationError> {
        self.employee_mut().set_salary(salary)
    }

    /// Whether both values share the identical concrete type
    fn same_kind(&self, other: &dyn Staff) -> bool {
        self.as_any().type_id() == other.as_any().type_id()
    }

    /// Equal name, equal salary, and the same concrete type
    fn equals(&self, other: &dyn Staff) -> bool {
        self.name() == other.name() && self.salary() == other.salary() && self.same_kind(other)
    }

    /// Name or salary differ
    ///
    /// This does not look at the concrete type, so it is not the negation of
    /// [`Staff::equals`] across variants.
    fn not_equals(&self, other: &dyn Staff) -> bool {
        self.name() != other.name() || self.salary() != other.salary()
    }

    /// Salary at least the other's, and the same concrete type
    fn at_least(&self, other: &dyn Staff) -> bool {
        self.salary() >= other.salary() && self.same_kind(other)
    }

    /// Salary below the other's, and the same concrete type
    fn less_than(&self, other: &dyn Staff) -> bool {
        self.salary() < other.salary() && self.same_kind(other)
    }
}

impl Staff for Employee {
    fn employee(&self) -> &Employee {
        self
    }

    fn employee_mut(&mut self) -> &mut Employee {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn with_default_salary(name: String) -> Self {
        Self {
            name,
            salary: MIN_SALARY,
        }
    }
}

/// A specialised employee that leads a team
#[derive(Debug, Clone, PartialEq)]
pub struct Manager {
    base: Employee,
    pub reports: Vec<String>,
}

impl Manager {
    pub fn new(name: impl Into<String>, salary: f64) -> Result<Self, SalaryError> {
        Ok(Self {
            base: Employee::new(name, salary)?,
            reports: Vec::new(),
        })
    }
}

impl Staff for Manager {
    fn employee(&self) -> &Employee {
        &self.base
    }

    fn employee_mut(&mut self) -> &mut Employee {
        &mut self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn with_default_salary(name: String) -> Self {
        Self {
            base: Employee::with_default_salary(name),
            reports: Vec::new(),
        }
    }
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} I manage {} people.", self.base, self.reports.len())
    }
}
