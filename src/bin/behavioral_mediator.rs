//! Behavioral pattern: Mediator
//! Example: auth dialog routing widget events
//!
//! The dialog owns its widgets and is the only place that knows how one
//! widget's event affects the others, so the widgets stay decoupled from
//! each other.
//!
//! Run with: cargo run --bin behavioral_mediator

/* ============================================================
 * Events and widgets
 * ============================================================
 */

enum UiEvent {
    Pressed,
    Checked(bool),
    Typed(String),
}

struct Button {
    visible: bool,
}

struct Checkbox {
    visible: bool,
    checked: bool,
}

struct TextField {
    visible: bool,
    secret_mode: bool,
}

impl TextField {
    fn typed(&self, input: &str) -> String {
        if self.secret_mode {
            "*".repeat(input.chars().count())
        } else {
            input.to_string()
        }
    }
}

/* ============================================================
 * Mediator: the dialog window
 * ============================================================
 */

struct AuthDialog {
    show_elements: Button,
    hide_input_text: Checkbox,
    text_field: TextField,
    output: Vec<String>,
}

impl AuthDialog {
    fn new() -> Self {
        AuthDialog {
            show_elements: Button { visible: true },
            hide_input_text: Checkbox {
                visible: false,
                checked: false,
            },
            text_field: TextField {
                visible: false,
                secret_mode: false,
            },
            output: Vec::new(),
        }
    }

    // Widget entry points. Each one raises an event; all coordination
    // happens in on_event.

    fn press_show_elements(&mut self) {
        if self.show_elements.visible {
            self.on_event(UiEvent::Pressed);
        }
    }

    fn toggle_hide_input(&mut self) {
        if self.hide_input_text.visible {
            self.hide_input_text.checked = !self.hide_input_text.checked;
            self.on_event(UiEvent::Checked(self.hide_input_text.checked));
        }
    }

    fn type_text(&mut self, input: &str) {
        if self.text_field.visible {
            let rendered = self.text_field.typed(input);
            self.on_event(UiEvent::Typed(rendered));
        }
    }

    fn on_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Pressed => {
                self.hide_input_text.visible = true;
                self.text_field.visible = true;
            }
            UiEvent::Checked(checked) => {
                self.text_field.secret_mode = checked;
            }
            UiEvent::Typed(text) => {
                self.output.push(text);
            }
        }
    }
}

fn main() {
    let mut dialog = AuthDialog::new();

    // Typing before the field is shown does nothing.
    dialog.type_text("too early");

    // Enable the other UI elements.
    dialog.press_show_elements();

    // Type the username in the clear.
    dialog.type_text("username1234");

    // Switch the field to secret mode and type the password.
    dialog.toggle_hide_input();
    dialog.type_text("myPassword");

    for line in &dialog.output {
        println!("{line}");
    }
}
