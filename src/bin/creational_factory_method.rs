//! Creational pattern: Factory Method
//! Example: bakeries deciding which pastry to produce
//!
//! Run with: cargo run --bin creational_factory_method

#[derive(Debug, PartialEq, Eq)]
struct Pastry {
    name: String,
}

/// The creator interface: callers ask for a pastry, concrete bakeries decide
/// what actually comes out of the oven.
trait Bakery {
    fn bake(&self) -> Pastry;
}

struct DonutBakery;

impl Bakery for DonutBakery {
    fn bake(&self) -> Pastry {
        Pastry {
            name: "Strawberry Donut".to_string(),
        }
    }
}

struct CroissantBakery;

impl Bakery for CroissantBakery {
    fn bake(&self) -> Pastry {
        Pastry {
            name: "Chocolate Croissant".to_string(),
        }
    }
}

fn main() {
    let bakeries: Vec<Box<dyn Bakery>> = vec![Box::new(DonutBakery), Box::new(CroissantBakery)];

    for bakery in &bakeries {
        println!("{}", bakery.bake().name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_bakery_produces_its_own_pastry() {
        assert_eq!(DonutBakery.bake().name, "Strawberry Donut");
        assert_eq!(CroissantBakery.bake().name, "Chocolate Croissant");
    }
}
