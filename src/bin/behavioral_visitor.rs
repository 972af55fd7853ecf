//! Behavioral pattern: Visitor
//! Example: adding operations over clients without touching the client type
//!
//! The enum plus a dispatching default method replaces the classic
//! Accept/Visit overload pair: the match picks the right visit method by
//! variant, and exhaustiveness checking keeps new variants honest.
//!
//! Run with: cargo run --bin behavioral_visitor

enum Client {
    Personal { id: u32 },
    Business { id: u32, business_id: u32 },
}

trait ClientVisitor {
    type Output;

    fn visit(&mut self, client: &Client) -> Self::Output {
        match client {
            Client::Personal { id } => self.visit_personal(*id),
            Client::Business { id, business_id } => self.visit_business(*id, *business_id),
        }
    }

    fn visit_personal(&mut self, id: u32) -> Self::Output;
    fn visit_business(&mut self, id: u32, business_id: u32) -> Self::Output;
}

/// Formats client identity, with more detail for business clients.
struct IdReport;

impl ClientVisitor for IdReport {
    type Output = String;

    fn visit_personal(&mut self, id: u32) -> String {
        format!("Client's ID: {id}")
    }

    fn visit_business(&mut self, id: u32, business_id: u32) -> String {
        format!("Business client's ID: {id}, business ID: {business_id}")
    }
}

/// A second operation over the same data, added without changing `Client`.
struct DiscountRate;

impl ClientVisitor for DiscountRate {
    type Output = f64;

    fn visit_personal(&mut self, _id: u32) -> f64 {
        0.05
    }

    fn visit_business(&mut self, _id: u32, _business_id: u32) -> f64 {
        0.15
    }
}

fn main() {
    let clients = [
        Client::Personal { id: 11 },
        Client::Business {
            id: 15,
            business_id: 3,
        },
    ];

    let mut report = IdReport;
    let mut discount = DiscountRate;

    for client in &clients {
        println!("{}", report.visit(client));
        println!("  discount: {:.0}%", discount.visit(client) * 100.0);
    }
}
