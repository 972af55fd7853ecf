//! Behavioral pattern: Chain of Responsibility
//! Example: contextual help handlers with successors
//!
//! Run with: cargo run --bin behavioral_chain

/// A handler either answers the help request or forwards it along the chain.
trait HelpHandler {
    fn handle(&self, topic: &str) -> String;
}

/// End of every chain: the application always has something generic to say.
struct Application;

impl HelpHandler for Application {
    fn handle(&self, _topic: &str) -> String {
        format!("No specific help found. This is the {} application.", env!("CARGO_PKG_NAME"))
    }
}

struct DialogWindow {
    successor: Box<dyn HelpHandler>,
}

impl HelpHandler for DialogWindow {
    fn handle(&self, topic: &str) -> String {
        if topic == "DialogWindow" {
            "This is a dialog window".to_string()
        } else {
            self.successor.handle(topic)
        }
    }
}

struct Button {
    successor: Box<dyn HelpHandler>,
}

impl HelpHandler for Button {
    fn handle(&self, topic: &str) -> String {
        if topic == "Button" {
            "This is a button".to_string()
        } else {
            self.successor.handle(topic)
        }
    }
}

fn main() {
    // Button -> DialogWindow -> Application
    let chain = Button {
        successor: Box::new(DialogWindow {
            successor: Box::new(Application),
        }),
    };

    for topic in ["Button", "DialogWindow", "SomethingElse"] {
        println!("{}", chain.handle(topic));
    }
}
