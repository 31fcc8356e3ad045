//! Drives a [`Round`] with injected input and output.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::RoundError;
use crate::result::Settlement;
use crate::round::{Event, Input, Prompt, Round};
use crate::session::Session;

/// Source of cards and operator decisions.
///
/// A console, a test script, or a simulated shoe. `respond` may block until
/// the answer is available.
pub trait Operator {
    /// Answers a prompt, or returns `None` to abandon the round.
    fn respond(&mut self, prompt: &Prompt) -> Option<Input>;
}

impl<F> Operator for F
where
    F: FnMut(&Prompt) -> Option<Input>,
{
    fn respond(&mut self, prompt: &Prompt) -> Option<Input> {
        self(prompt)
    }
}

/// Destination for records and notices.
pub trait Sink {
    /// Shows or stores an event.
    fn emit(&mut self, event: &Event);
}

impl Sink for Vec<Event> {
    fn emit(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

/// A sink that writes every event to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl Sink for LogSink {
    fn emit(&mut self, event: &Event) {
        log::info!("{event:?}");
    }
}

/// Plays one round from deal to settlement.
///
/// # Errors
///
/// Returns [`RoundError::Abandoned`] if the operator stops answering, and
/// any error from [`Round::step`] if the operator answers the wrong prompt.
pub fn play_round<O, S>(
    session: &mut Session,
    operator: &mut O,
    sink: &mut S,
) -> Result<Settlement, RoundError>
where
    O: Operator + ?Sized,
    S: Sink + ?Sized,
{
    let mut round = Round::new();

    while let Some(prompt) = round.prompt() {
        let input = operator.respond(&prompt).ok_or(RoundError::Abandoned)?;
        for event in round.step(session, input)? {
            sink.emit(&event);
        }
    }

    round.settlement().cloned().ok_or(RoundError::RoundOver)
}
