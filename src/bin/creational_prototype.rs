//! Creational pattern: Prototype
//! Example: cloning a machine-part tree
//!
//! `#[derive(Clone)]` already gives the deep, recursive copy that the classic
//! pattern hand-rolls. The demo contrasts it with reference sharing through
//! `Rc` (the memberwise-copy analogue) and with a serialize round trip, which
//! deep-copies through any representation boundary.
//!
//! Run with: cargo run --bin creational_prototype

use std::rc::Rc;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct MachinePart {
    id: u32,
    name: String,
    weight: f32,
    neighbours: Vec<MachinePart>,
}

impl MachinePart {
    fn new(id: u32, name: &str, weight: f32, neighbours: Vec<MachinePart>) -> Self {
        MachinePart {
            id,
            name: name.to_string(),
            weight,
            neighbours,
        }
    }

    fn describe(&self) -> String {
        format!(
            "{} with neighbour parts: {}",
            self.name,
            self.neighbours.iter().map(|part| part.name.as_str()).join(" ")
        )
    }

    /// Deep copy through JSON. Equivalent to `clone` here, but survives any
    /// boundary a serialized representation can cross.
    fn serde_clone(&self) -> serde_json::Result<MachinePart> {
        serde_json::from_str(&serde_json::to_string(self)?)
    }
}

fn engine() -> MachinePart {
    MachinePart::new(
        0,
        "Engine",
        130_000.0,
        vec![
            MachinePart::new(4, "Shaft", 103.21, Vec::new()),
            MachinePart::new(
                2,
                "Piston",
                13.74,
                vec![MachinePart::new(5, "PistonHead", 5.74, Vec::new())],
            ),
        ],
    )
}

fn main() -> serde_json::Result<()> {
    let part = engine();
    println!("{}", part.describe());

    // Deep clone: an independent tree.
    let deep = part.clone();
    println!("{}", deep.describe());

    // Shared prototype: cloning the Rc copies the pointer, not the tree.
    let shared = Rc::new(engine());
    let alias = Rc::clone(&shared);
    println!("shared copies point at one tree: {}", Rc::ptr_eq(&shared, &alias));

    // Deep copy via serialization.
    let restored = part.serde_clone()?;
    println!("serde round trip equals the source: {}", restored == part);
    Ok(())
}
