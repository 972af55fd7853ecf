//! Structural pattern: Decorator
//! Example: wrapping a task to extend its output
//!
//! Run with: cargo run --bin structural_decorator

trait Task {
    fn execute(&self) -> String;
}

struct ActionNode;

impl Task for ActionNode {
    fn execute(&self) -> String {
        "Action".to_string()
    }
}

struct ConditionNode;

impl Task for ConditionNode {
    fn execute(&self) -> String {
        "Condition".to_string()
    }
}

/// Wraps any task and decorates its result. The wrapped task can be swapped
/// at runtime.
struct TaskDecorator {
    attached: Box<dyn Task>,
}

impl TaskDecorator {
    fn new(attached: Box<dyn Task>) -> Self {
        TaskDecorator { attached }
    }

    fn set_attached(&mut self, task: Box<dyn Task>) {
        self.attached = task;
    }
}

impl Task for TaskDecorator {
    fn execute(&self) -> String {
        format!("{} from decorator", self.attached.execute())
    }
}

fn main() {
    let mut decorator = TaskDecorator::new(Box::new(ActionNode));
    println!("{}", decorator.execute());

    decorator.set_attached(Box::new(ConditionNode));
    println!("{}", decorator.execute());

    // Decorators stack, since a decorator is itself a task.
    let doubled = TaskDecorator::new(Box::new(decorator));
    println!("{}", doubled.execute());
}
