//! # Diagnostics
//!
//! Line-oriented progress and error reporting.
//!
//! Operations take an explicit [`DiagnosticSink`] instead of writing to a
//! process-wide stream, so two operations can report to different places and
//! tests can capture exactly what an operator would see. Every line is also
//! mirrored to the [`log`] facade.

use crate::operation::Direction;
use std::fmt;

/// Receiver of human-readable status lines.
pub trait DiagnosticSink {
    /// Accept one line of text (no trailing newline).
    fn line(&mut self, text: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn line(&mut self, text: &str) {
        (**self).line(text);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn line(&mut self, text: &str) {
        (**self).line(text);
    }
}

/// Captures every line, in order. Handy for tests and for UIs that poll.
impl DiagnosticSink for Vec<String> {
    fn line(&mut self, text: &str) {
        self.push(text.to_owned());
    }
}

/// Forwards lines to `log::info!` under the `filecipher` target.
///
/// Error lines are already logged at `error` level by the operation itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn line(&mut self, text: &str) {
        log::info!(target: "filecipher", "{text}");
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn line(&mut self, _text: &str) {}
}

/// Progress points reported by every run, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    Loading,
    CreatingStream,
    Starting,
    Closing,
    Complete,
}

impl Milestone {
    /// Render the milestone for one direction.
    pub fn describe(self, direction: Direction) -> MilestoneText {
        MilestoneText {
            milestone: self,
            direction,
        }
    }
}

/// `Display` adapter returned by [`Milestone::describe`].
#[derive(Debug, Clone, Copy)]
pub struct MilestoneText {
    milestone: Milestone,
    direction: Direction,
}

impl fmt::Display for MilestoneText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match (self.milestone, self.direction) {
            (Milestone::Loading, _) => "Loading files",
            (Milestone::CreatingStream, _) => "Creating cipher stream",
            (Milestone::Starting, Direction::Encrypt) => "Starting encryption",
            (Milestone::Starting, Direction::Decrypt) => "Starting file decryption",
            (Milestone::Closing, _) => "Closing file streams",
            (Milestone::Complete, Direction::Encrypt) => "Encryption Complete",
            (Milestone::Complete, Direction::Decrypt) => "Decryption complete",
        };
        f.write_str(text)
    }
}

/// Format an error line the way operators see it.
pub(crate) fn error_line(err: &dyn fmt::Display) -> String {
    format!("Error: {err}")
}

/// Error line for a failure while configuring an operation.
///
/// Encryption setup failures keep their historical wording.
pub(crate) fn setup_error_line(direction: Direction, err: &dyn fmt::Display) -> String {
    match direction {
        Direction::Encrypt => format!("Cannot encrypt password: {err}"),
        Direction::Decrypt => error_line(err),
    }
}
