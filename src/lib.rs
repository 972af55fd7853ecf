//! A catalogue of classic design-pattern demos.
//!
//! Every binary under `src/bin` is an independent, self-contained sample of
//! one pattern. The library crate itself holds the one reusable component:
//! the support-ticket state machine driven by the State demo
//! (`cargo run --bin behavioral_state`).

pub mod ticket;

pub use ticket::{ConfirmFn, Confirmation, ConfirmSource, Notice, Ticket, TicketId, TicketState};
