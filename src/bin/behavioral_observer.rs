//! Behavioral pattern: Observer
//! Example: wallet notifying subscribers about balance changes
//!
//! Run with: cargo run --bin behavioral_observer

/* ============================================================
 * Subject
 * ============================================================
 */

#[derive(Debug, Clone, Copy, PartialEq)]
struct WalletEvent {
    new_balance: f64,
    change: f64,
}

/// Interface-style observer. Closure subscribers cover the delegate-style
/// flavor, so both classic shapes of the pattern are on display.
trait WalletObserver {
    fn balance_changed(&mut self, event: &WalletEvent);
}

struct Wallet {
    balance: f64,
    // Delegate-style subscribers: any closure with the right signature.
    listeners: Vec<Box<dyn FnMut(&WalletEvent)>>,
    // Interface-style subscribers.
    observers: Vec<Box<dyn WalletObserver>>,
    // Pre-change hooks. Returning true vetoes the change.
    before_change: Vec<Box<dyn Fn(&WalletEvent) -> bool>>,
}

impl Wallet {
    fn new() -> Self {
        Wallet {
            balance: 0.0,
            listeners: Vec::new(),
            observers: Vec::new(),
            before_change: Vec::new(),
        }
    }

    fn balance(&self) -> f64 {
        self.balance
    }

    fn subscribe(&mut self, listener: impl FnMut(&WalletEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn add_observer(&mut self, observer: Box<dyn WalletObserver>) {
        self.observers.push(observer);
    }

    fn add_hook(&mut self, hook: impl Fn(&WalletEvent) -> bool + 'static) {
        self.before_change.push(Box::new(hook));
    }

    /// Applies the change unless a hook vetoes it, then notifies everyone.
    fn change_balance(&mut self, delta: f64) -> bool {
        let event = WalletEvent {
            new_balance: self.balance + delta,
            change: delta,
        };
        if self.before_change.iter().any(|hook| hook(&event)) {
            return false;
        }

        self.balance = event.new_balance;
        for listener in &mut self.listeners {
            listener(&event);
        }
        for observer in &mut self.observers {
            observer.balance_changed(&event);
        }
        true
    }
}

/* ============================================================
 * Observers
 * ============================================================
 */

struct PrintObserver {
    label: &'static str,
}

impl WalletObserver for PrintObserver {
    fn balance_changed(&mut self, event: &WalletEvent) {
        println!(
            "[{}]: wallet changed, {:+.2} applied, current balance: {:.2}",
            self.label, event.change, event.new_balance
        );
    }
}

fn main() {
    let mut wallet = Wallet::new();

    wallet.subscribe(|event| {
        println!(
            "[CLOSURE OBSERVER]: wallet changed, new balance: {:.2}",
            event.new_balance
        );
    });
    wallet.add_observer(Box::new(PrintObserver { label: "INTERFACE OBSERVER" }));
    wallet.add_hook(|event| {
        println!(
            "[HOOK]: wallet is about to change from {:.2} to {:.2}",
            event.new_balance - event.change,
            event.new_balance
        );
        false
    });
    // Overdrafts are vetoed.
    wallet.add_hook(|event| event.new_balance < 0.0);

    wallet.change_balance(100.0);
    wallet.change_balance(-50.0);

    if !wallet.change_balance(-200.0) {
        println!("Overdraft rejected, balance still {:.2}", wallet.balance());
    }
}

/* ============================================================
 * Tests
 * ============================================================
 */
