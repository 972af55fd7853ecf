//! Structural pattern: Adapter
//! Example: a third-party text renderer behind the shape interface
//!
//! Run with: cargo run --bin structural_adapter

/// The interface the client code draws against.
trait Shape {
    fn draw(&self) -> String;
}

struct Triangle;

impl Shape for Triangle {
    fn draw(&self) -> String {
        "\u{25B2}".to_string()
    }
}

struct Square;

impl Shape for Square {
    fn draw(&self) -> String {
        "\u{25A0}".to_string()
    }
}

// A library we do not control, with an interface that knows nothing about
// shapes.
mod third_party {
    pub fn draw_text(text: &str) -> String {
        text.to_uppercase()
    }
}

/// Adapts the third-party renderer to the `Shape` interface.
struct UpperTextAdapter {
    text: String,
}

impl Shape for UpperTextAdapter {
    fn draw(&self) -> String {
        third_party::draw_text(&self.text)
    }
}

fn main() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Triangle),
        Box::new(Square),
        Box::new(UpperTextAdapter {
            text: "not a shape at all".to_string(),
        }),
    ];

    for shape in &shapes {
        println!("{}", shape.draw());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_routes_through_the_foreign_interface() {
        let adapter = UpperTextAdapter {
            text: "hello".to_string(),
        };
        assert_eq!(adapter.draw(), "HELLO");
    }
}
