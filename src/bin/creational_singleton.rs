//! Creational pattern: Singleton
//! Example: one process-wide instance, eagerly and lazily initialized
//!
//! Run with: cargo run --bin creational_singleton

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use lazy_static::lazy_static;

/* ============================================================
 * Eager flavor: a plain static with const initialization
 * ============================================================
 */

struct AppInfo {
    name: &'static str,
}

static APP_INFO: AppInfo = AppInfo {
    name: "gof-patterns",
};

/* ============================================================
 * Lazy flavor: constructed on first access, exactly once
 * ============================================================
 */

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

struct Registry {
    text: String,
}

impl Registry {
    fn new() -> Self {
        let nth = CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
        println!("Registry constructed (construction #{nth})");
        Registry {
            text: "Singleton text".to_string(),
        }
    }

    fn text(&self) -> &str {
        &self.text
    }
}

lazy_static! {
    static ref REGISTRY: Registry = Registry::new();
}

fn main() {
    println!("Eager singleton: {}", APP_INFO.name);

    // Two threads race to touch the lazy instance; construction still
    // happens once.
    let handle = thread::spawn(|| println!("From thread: {}", REGISTRY.text()));
    println!("From main: {}", REGISTRY.text());
    handle.join().expect("reader thread panicked");

    println!(
        "Constructions observed: {}",
        CONSTRUCTIONS.load(Ordering::SeqCst)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_access_yields_the_same_instance() {
        let first: &Registry = &REGISTRY;
        let second: &Registry = &REGISTRY;
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn construction_happens_at_most_once() {
        let _ = REGISTRY.text();
        let _ = REGISTRY.text();
        assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 1);
    }
}
