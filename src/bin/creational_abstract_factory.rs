//! Creational pattern: Abstract Factory
//! Example: shoe factories, swapped without the caller noticing
//!
//! Run with: cargo run --bin creational_abstract_factory

trait ShoeFactory {
    fn make_shoes(&self) -> String;
}

struct SneakerFactory;

impl ShoeFactory for SneakerFactory {
    fn make_shoes(&self) -> String {
        "Puma Sneakers".to_string()
    }
}

struct BootFactory;

impl ShoeFactory for BootFactory {
    fn make_shoes(&self) -> String {
        "Leather Boots".to_string()
    }
}

fn produce(factory: &dyn ShoeFactory) -> String {
    factory.make_shoes()
}

fn main() {
    println!("{}", produce(&SneakerFactory));
    println!("{}", produce(&BootFactory));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_are_interchangeable_behind_the_trait() {
        assert_eq!(produce(&SneakerFactory), "Puma Sneakers");
        assert_eq!(produce(&BootFactory), "Leather Boots");
    }
}
