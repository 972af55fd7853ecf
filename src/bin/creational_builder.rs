//! Creational pattern: Builder
//! Example: assembling an integer digit by digit, from either end
//!
//! Run with: cargo run --bin creational_builder

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
enum BuildError {
    #[error("{0} is not a single digit")]
    NotADigit(u8),
}

/// Builds up an integer from digits. Consuming `self` and returning it back
/// gives the usual fluent chaining.
#[derive(Default, Debug)]
struct IntBuilder {
    value: i64,
    digits: u32,
}

impl IntBuilder {
    fn new() -> Self {
        IntBuilder::default()
    }

    fn append_end(mut self, digit: u8) -> Result<Self, BuildError> {
        Self::check(digit)?;
        self.value = self.value * 10 + i64::from(digit);
        self.digits += 1;
        Ok(self)
    }

    fn append_front(mut self, digit: u8) -> Result<Self, BuildError> {
        Self::check(digit)?;
        self.value += i64::from(digit) * 10i64.pow(self.digits);
        self.digits += 1;
        Ok(self)
    }

    fn build(self) -> i64 {
        self.value
    }

    fn check(digit: u8) -> Result<(), BuildError> {
        if digit > 9 {
            Err(BuildError::NotADigit(digit))
        } else {
            Ok(())
        }
    }
}

fn main() -> Result<(), BuildError> {
    let number = IntBuilder::new()
        .append_end(3)?
        .append_end(5)?
        .append_front(7)?
        .build();
    println!("{number}");
    Ok(())
}
