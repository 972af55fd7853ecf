//! Structural pattern: Flyweight
//! Example: interning shared product info behind `Rc`
//!
//! Run with: cargo run --bin structural_flyweight

use std::collections::HashMap;
use std::rc::Rc;

use rand::Rng;

/// Intrinsic, shareable state. Everything product-specific stays outside.
#[derive(Debug, PartialEq)]
struct ProductInfo {
    catalogue_id: u32,
}

/// Interning pool: one `ProductInfo` per catalogue id, shared by reference.
#[derive(Default)]
struct InfoPool {
    interned: HashMap<u32, Rc<ProductInfo>>,
}

impl InfoPool {
    fn get(&mut self, catalogue_id: u32) -> Rc<ProductInfo> {
        Rc::clone(
            self.interned
                .entry(catalogue_id)
                .or_insert_with(|| Rc::new(ProductInfo { catalogue_id })),
        )
    }

    fn len(&self) -> usize {
        self.interned.len()
    }
}

struct Product {
    info: Rc<ProductInfo>,
}

impl Product {
    fn new(pool: &mut InfoPool, catalogue_id: u32) -> Self {
        Product {
            info: pool.get(catalogue_id),
        }
    }
}

fn main() {
    let mut pool = InfoPool::default();

    let product1 = Product::new(&mut pool, 10);
    let product2 = Product::new(&mut pool, 10);
    let product3 = Product::new(&mut pool, 15);
    let product4 = Product::new(&mut pool, 15);

    println!("product1 refers to catalogue entry {}", product1.info.catalogue_id);
    println!("{}", Rc::ptr_eq(&product1.info, &product2.info));
    println!("{}", Rc::ptr_eq(&product2.info, &product3.info));
    println!("{}", Rc::ptr_eq(&product3.info, &product4.info));

    // Bulk allocation: thousands of products, at most ten info instances.
    let mut rng = rand::thread_rng();
    let products: Vec<Product> = (0..1_000)
        .map(|_| Product::new(&mut pool, rng.gen_range(0..10)))
        .collect();

    println!(
        "{} products share {} interned infos",
        products.len(),
        pool.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_shares_one_instance() {
        let mut pool = InfoPool::default();
        let a = pool.get(10);
        let b = pool.get(10);
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn different_keys_get_different_instances() {
        let mut pool = InfoPool::default();
        let a = pool.get(10);
        let b = pool.get(15);
        assert!(!Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn pool_size_is_bounded_by_distinct_keys() {
        let mut pool = InfoPool::default();
        let mut rng = rand::thread_rng();

        for _ in 0..1_000 {
            pool.get(rng.gen_range(0..10));
        }
        assert!(pool.len() <= 10);
    }
}
