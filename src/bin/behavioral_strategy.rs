//! Behavioral pattern: Strategy
//! Example: a family of "make this number negative" algorithms
//!
//! Run with: cargo run --bin behavioral_strategy

/// The strategy interface. Implementations are interchangeable at runtime.
trait NegateStrategy {
    fn negate(&self, number: i32) -> i32;
}

struct ArithmeticNegate;

impl NegateStrategy for ArithmeticNegate {
    fn negate(&self, number: i32) -> i32 {
        if number > 0 {
            number * -1
        } else {
            number
        }
    }
}

struct TwosComplementNegate;

impl NegateStrategy for TwosComplementNegate {
    fn negate(&self, number: i32) -> i32 {
        if number > 0 {
            !number + 1
        } else {
            number
        }
    }
}

/// The silly one: format, prepend a minus, parse back.
struct ParseNegate;

impl NegateStrategy for ParseNegate {
    fn negate(&self, number: i32) -> i32 {
        if number > 0 {
            format!("-{number}").parse().unwrap_or(number)
        } else {
            number
        }
    }
}

fn main() {
    let strategies: Vec<Box<dyn NegateStrategy>> = vec![
        Box::new(ArithmeticNegate),
        Box::new(TwosComplementNegate),
        Box::new(ParseNegate),
    ];

    for strategy in &strategies {
        println!("{}", strategy.negate(10));
    }

    // Closures make ad-hoc strategies; this is how sort comparators work.
    let mut numbers = vec![3, -1, 4, -1, 5];
    numbers.sort_by_key(|n: &i32| n.abs());
    println!("{numbers:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_strategies_agree_on_positive_input() {
        let strategies: Vec<Box<dyn NegateStrategy>> = vec![
            Box::new(ArithmeticNegate),
            Box::new(TwosComplementNegate),
            Box::new(ParseNegate),
        ];

        for strategy in &strategies {
            assert_eq!(strategy.negate(10), -10);
        }
    }

    #[test]
    fn negative_and_zero_inputs_pass_through() {
        for strategy in [&ArithmeticNegate as &dyn NegateStrategy, &TwosComplementNegate, &ParseNegate] {
            assert_eq!(strategy.negate(-7), -7);
            assert_eq!(strategy.negate(0), 0);
        }
    }
}
