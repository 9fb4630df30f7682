use std::fmt;

use crate::error::RecordError;

/// Mutable name/age holder that external diagnostics tooling probes at
/// runtime.
///
/// Every operation is synchronous and independently invocable; none relies on
/// call ordering beyond the two stored fields, so an attached inspector can
/// exercise them in isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    age: i32,
}

impl Record {
    /// Stores both values verbatim. No validation; negative and zero ages are
    /// accepted.
    pub fn new(name: String, age: i32) -> Self {
        Self { name, age }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    /// Writes one line of the form `Name: <name>, Age: <age>` to stdout.
    pub fn print_info(&self) {
        println!("{self}");
    }

    /// Returns `number * number`, widened to `i64` so the product is exact
    /// for every `i32` input.
    pub fn square(number: i32) -> i64 {
        i64::from(number) * i64::from(number)
    }

    /// Returns `age / divisor` as a floating-point quotient.
    ///
    /// Fails with [`RecordError::DivisionByZero`] when `divisor` is zero;
    /// never mutates the record.
    pub fn divide(&self, divisor: i32) -> Result<f64, RecordError> {
        if divisor == 0 {
            return Err(RecordError::DivisionByZero);
        }
        Ok(f64::from(self.age) / f64::from(divisor))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Age: {}", self.name, self.age)
    }
}
