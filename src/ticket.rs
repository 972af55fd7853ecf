//! Support-ticket state machine.
//!
//! A ticket moves between `Draft`, `Opened` and `Closed`, and every operation
//! (`open`, `close`, `reply`) is dispatched on the current state. Each match
//! arm produces a `(Notice, TicketState)` pair, so the whole transition table
//! lives in three functions instead of per-state subclasses.

use std::fmt;

use uuid::Uuid;

/// Opaque ticket identity, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicketId(Uuid);

impl TicketId {
    fn generate() -> Self {
        TicketId(Uuid::new_v4())
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Exactly one variant is active per ticket at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketState {
    Draft,
    Opened,
    Closed,
}

impl TicketState {
    pub fn name(&self) -> &'static str {
        match self {
            TicketState::Draft => "Draft",
            TicketState::Opened => "Opened",
            TicketState::Closed => "Closed",
        }
    }
}

/// A resolved yes/no decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

impl Confirmation {
    /// Parses raw user input. Anything but `y`/`n` (after trimming) is
    /// invalid and yields `None`, which makes the caller ask again.
    pub fn parse(input: &str) -> Option<Confirmation> {
        match input.trim() {
            "y" => Some(Confirmation::Yes),
            "n" => Some(Confirmation::No),
            _ => None,
        }
    }
}

/// External yes/no decision source consulted when closing an opened ticket.
///
/// `None` means the answer was not a valid yes/no; the state machine keeps
/// re-asking until it gets `Some`. There is no timeout and no retry bound.
pub trait ConfirmSource {
    fn confirm(&mut self, prompt: &str) -> Option<Confirmation>;
}

/// Adapts any closure with the right signature into a [`ConfirmSource`].
pub struct ConfirmFn<F>(pub F);

impl<F> ConfirmSource for ConfirmFn<F>
where
    F: FnMut(&str) -> Option<Confirmation>,
{
    fn confirm(&mut self, prompt: &str) -> Option<Confirmation> {
        (self.0)(prompt)
    }
}

/// Human-readable output produced by every ticket operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(String);

impl Notice {
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A support ticket. Identity and owner address never change; the state is
/// the only mutable part, and the ticket owns it exclusively.
#[derive(Debug)]
pub struct Ticket {
    id: TicketId,
    owner_address: String,
    state: TicketState,
}

impl Ticket {
    /// Creates a ticket in the `Draft` state with a fresh id.
    pub fn new(owner_address: impl Into<String>) -> Self {
        Ticket {
            id: TicketId::generate(),
            owner_address: owner_address.into(),
            state: TicketState::Draft,
        }
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn owner_address(&self) -> &str {
        &self.owner_address
    }

    pub fn state(&self) -> TicketState {
        self.state
    }

    /// Publishes the ticket. Opens a draft, reports an already-opened ticket,
    /// and reopens a closed one by behaving like a fresh draft.
    pub fn open(&mut self, text: &str) -> Notice {
        let (notice, next) = match self.state {
            TicketState::Draft => (self.submission_notice(text), TicketState::Opened),
            TicketState::Opened => (
                Notice(format!(
                    "Ticket {} is already opened. Thank you for your patience, \
                     we will respond as soon as we can.",
                    self.id
                )),
                TicketState::Opened,
            ),
            TicketState::Closed => {
                let submission = self.submission_notice(text);
                (
                    Notice(format!(
                        "Ticket {} is closed! Reopening:\n{}",
                        self.id,
                        submission.text()
                    )),
                    TicketState::Opened,
                )
            }
        };
        self.state = next;
        notice
    }

    /// Closes the ticket. A draft stays a draft (closing it is allowed but
    /// only informational). An opened ticket requires a confirmed decision
    /// from `confirm`, which is re-asked until it yields a valid answer.
    pub fn close(&mut self, confirm: &mut dyn ConfirmSource) -> Notice {
        let (notice, next) = match self.state {
            TicketState::Draft => (
                Notice(format!(
                    "Ticket {} draft was closed without publishing.",
                    self.id
                )),
                TicketState::Draft,
            ),
            TicketState::Opened => match self.ask_until_decided(confirm) {
                Confirmation::Yes => (
                    Notice(format!("Ticket {} was closed successfully!", self.id)),
                    TicketState::Closed,
                ),
                Confirmation::No => (
                    Notice(format!("Aborting ticket {} closing..", self.id)),
                    TicketState::Opened,
                ),
            },
            TicketState::Closed => (
                Notice(format!("Ticket {} is already closed!", self.id)),
                TicketState::Closed,
            ),
        };
        self.state = next;
        notice
    }

    /// Tech-support reply. Never changes state.
    pub fn reply(&self, text: &str) -> Notice {
        match self.state {
            TicketState::Draft => Notice(format!("Ticket {} was not opened yet.", self.id)),
            TicketState::Opened => Notice(format!(
                "[SYSTEM]: Reply was successfully sent to the user! Reply text:\n    {text}"
            )),
            TicketState::Closed => Notice(format!(
                "Ticket {} was closed by user or system. You can contact the user \
                 directly via email: {}.",
                self.id, self.owner_address
            )),
        }
    }

    fn submission_notice(&self, text: &str) -> Notice {
        Notice(format!(
            "Ticket {} was opened successfully! We will get back to you as soon \
             as possible.\nCheck your email {} for the details.\nYour message:\n    {text}",
            self.id, self.owner_address
        ))
    }

    // Blocks until the source produces a valid yes/no.
    fn ask_until_decided(&self, confirm: &mut dyn ConfirmSource) -> Confirmation {
        let prompt = format!(
            "Are you sure you want to close ticket {}? Please, type y for yes or n for no:",
            self.id
        );
        loop {
            if let Some(decision) = confirm.confirm(&prompt) {
                return decision;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Deterministic stand-in for the interactive prompt. `None` entries
    /// simulate invalid input; exhausting the script is a test bug.
    struct ScriptedConfirm {
        answers: VecDeque<Option<Confirmation>>,
        calls: usize,
    }

    impl ScriptedConfirm {
        fn new(answers: &[Option<Confirmation>]) -> Self {
            ScriptedConfirm {
                answers: answers.iter().copied().collect(),
                calls: 0,
            }
        }
    }

    impl ConfirmSource for ScriptedConfirm {
        fn confirm(&mut self, _prompt: &str) -> Option<Confirmation> {
            self.calls += 1;
            self.answers.pop_front().expect("confirmation script exhausted")
        }
    }

    fn yes() -> ScriptedConfirm {
        ScriptedConfirm::new(&[Some(Confirmation::Yes)])
    }

    fn no() -> ScriptedConfirm {
        ScriptedConfirm::new(&[Some(Confirmation::No)])
    }

    #[test]
    fn new_ticket_starts_as_draft() {
        let ticket = Ticket::new("user@example.com");
        assert_eq!(ticket.state(), TicketState::Draft);
        assert_eq!(ticket.owner_address(), "user@example.com");
    }

    #[test]
    fn ids_are_unique_per_ticket() {
        let a = Ticket::new("a@example.com");
        let b = Ticket::new("b@example.com");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn open_draft_transitions_to_opened() {
        let mut ticket = Ticket::new("user@example.com");
        let notice = ticket.open("hello");

        assert_eq!(ticket.state(), TicketState::Opened);
        assert!(notice.text().contains("hello"));
        assert!(notice.text().contains("user@example.com"));
        assert!(notice.text().contains(&ticket.id().to_string()));
    }

    #[test]
    fn open_on_opened_is_idempotent() {
        let mut ticket = Ticket::new("user@example.com");
        ticket.open("hello");

        let notice = ticket.open("hello again");
        assert_eq!(ticket.state(), TicketState::Opened);
        assert!(notice.text().contains("already opened"));
    }

    #[test]
    fn open_on_closed_reopens() {
        let mut ticket = Ticket::new("user@example.com");
        ticket.open("hello");
        ticket.close(&mut yes());
        assert_eq!(ticket.state(), TicketState::Closed);

        let notice = ticket.open("again");
        assert_eq!(ticket.state(), TicketState::Opened);
        assert!(notice.text().contains("Reopening"));
        assert!(notice.text().contains("again"));
        assert!(notice.text().contains("opened successfully"));
    }

    #[test]
    fn close_on_draft_keeps_draft() {
        let mut ticket = Ticket::new("user@example.com");

        for _ in 0..3 {
            let notice = ticket.close(&mut yes());
            assert_eq!(ticket.state(), TicketState::Draft);
            assert!(notice.text().contains("closed without publishing"));
        }
    }

    #[test]
    fn close_on_draft_never_consults_confirmation() {
        let mut ticket = Ticket::new("user@example.com");
        let mut script = ScriptedConfirm::new(&[]);

        ticket.close(&mut script);
        assert_eq!(script.calls, 0);
    }

    #[test]
    fn close_on_opened_confirmed_transitions_to_closed() {
        let mut ticket = Ticket::new("user@example.com");
        ticket.open("hello");

        let notice = ticket.close(&mut yes());
        assert_eq!(ticket.state(), TicketState::Closed);
        assert!(notice.text().contains("closed successfully"));
    }

    #[test]
    fn close_on_opened_declined_stays_opened() {
        let mut ticket = Ticket::new("user@example.com");
        ticket.open("hello");

        let notice = ticket.close(&mut no());
        assert_eq!(ticket.state(), TicketState::Opened);
        assert!(notice.text().contains("Aborting"));
    }

    #[test]
    fn close_retries_until_valid_answer() {
        let mut ticket = Ticket::new("user@example.com");
        ticket.open("hello");

        let mut script = ScriptedConfirm::new(&[None, None, Some(Confirmation::Yes)]);
        ticket.close(&mut script);

        assert_eq!(script.calls, 3);
        assert_eq!(ticket.state(), TicketState::Closed);
    }

    #[test]
    fn close_on_closed_is_idempotent() {
        let mut ticket = Ticket::new("user@example.com");
        ticket.open("hello");
        ticket.close(&mut yes());

        let mut script = ScriptedConfirm::new(&[]);
        let notice = ticket.close(&mut script);

        assert_eq!(ticket.state(), TicketState::Closed);
        assert_eq!(script.calls, 0);
        assert!(notice.text().contains("already closed"));
    }

    #[test]
    fn reply_never_changes_state() {
        let mut ticket = Ticket::new("user@example.com");

        let notice = ticket.reply("x");
        assert_eq!(ticket.state(), TicketState::Draft);
        assert!(notice.text().contains("not opened yet"));

        ticket.open("hello");
        let notice = ticket.reply("have you tried rebooting?");
        assert_eq!(ticket.state(), TicketState::Opened);
        assert!(notice.text().contains("have you tried rebooting?"));

        ticket.close(&mut yes());
        let notice = ticket.reply("following up");
        assert_eq!(ticket.state(), TicketState::Closed);
        assert!(notice.text().contains("user@example.com"));
    }

    #[test]
    fn confirmation_parsing_accepts_only_y_or_n() {
        assert_eq!(Confirmation::parse("y"), Some(Confirmation::Yes));
        assert_eq!(Confirmation::parse(" n \n"), Some(Confirmation::No));
        assert_eq!(Confirmation::parse("yes"), None);
        assert_eq!(Confirmation::parse(""), None);
        assert_eq!(Confirmation::parse("q"), None);
    }

    #[test]
    fn closure_works_as_confirmation_source() {
        let mut ticket = Ticket::new("user@example.com");
        ticket.open("hello");
        ticket.close(&mut ConfirmFn(|_prompt: &str| Some(Confirmation::Yes)));
        assert_eq!(ticket.state(), TicketState::Closed);
    }

    #[test]
    fn full_lifecycle_scenario() {
        let mut ticket = Ticket::new("user@example.com");

        let notice = ticket.open("hello");
        assert_eq!(ticket.state(), TicketState::Opened);
        assert!(notice.text().contains("hello"));

        ticket.close(&mut no());
        assert_eq!(ticket.state(), TicketState::Opened);

        ticket.close(&mut yes());
        assert_eq!(ticket.state(), TicketState::Closed);

        ticket.open("again");
        assert_eq!(ticket.state(), TicketState::Opened);

        let notice = ticket.reply("fix?");
        assert_eq!(ticket.state(), TicketState::Opened);
        assert!(notice.text().contains("fix?"));
    }

    #[test]
    fn draft_only_scenarios() {
        let mut ticket = Ticket::new("user@example.com");
        let notice = ticket.reply("x");
        assert_eq!(ticket.state(), TicketState::Draft);
        assert!(notice.text().contains("not opened"));

        let mut ticket = Ticket::new("user@example.com");
        let notice = ticket.close(&mut yes());
        assert_eq!(ticket.state(), TicketState::Draft);
        assert!(notice.text().contains("without publishing"));
    }
}
