//! Behavioral pattern: Command
//! Example: composite command executing in order and undoing in reverse
//!
//! Run with: cargo run --bin behavioral_command

trait Command {
    fn execute(&mut self);
    fn unexecute(&mut self);
}

/// Groups several commands behind the single command interface. Undo walks
/// the group in reverse order.
struct MultiCommand {
    commands: Vec<Box<dyn Command>>,
}

impl MultiCommand {
    fn new(commands: Vec<Box<dyn Command>>) -> Self {
        MultiCommand { commands }
    }
}

impl Command for MultiCommand {
    fn execute(&mut self) {
        for command in &mut self.commands {
            command.execute();
        }
    }

    fn unexecute(&mut self) {
        for command in self.commands.iter_mut().rev() {
            command.unexecute();
        }
    }
}

struct PrintCommand {
    message: String,
}

impl Command for PrintCommand {
    fn execute(&mut self) {
        println!("{}", self.message);
    }

    fn unexecute(&mut self) {
        println!("(screen cleared)");
    }
}

struct BeepCommand;

impl Command for BeepCommand {
    fn execute(&mut self) {
        // BEL plus a visible marker for terminals that stay silent.
        println!("\x07Beep!");
    }

    fn unexecute(&mut self) {
        println!("UnBeeped!");
    }
}

fn main() {
    let mut multi = MultiCommand::new(vec![
        Box::new(PrintCommand {
            message: "Yolo".into(),
        }),
        Box::new(BeepCommand),
    ]);
    multi.execute();
    multi.unexecute();

    let mut multi = MultiCommand::new(vec![
        Box::new(BeepCommand),
        Box::new(PrintCommand {
            message: "Hola".into(),
        }),
    ]);
    multi.execute();
    multi.unexecute();
}
