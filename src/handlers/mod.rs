use crate::error::Result;
use crate::state::{Indent, Mode};

mod font;
mod layout;
mod registry;
mod section;

pub use registry::{HandlerManager, HandlerRegistry};

/// Operations a macro handler may perform on the running conversion
pub trait Interpreter {
    /// Appends a token to the pending output. Embedded newlines force flushes.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Switches between fill and no-fill mode
    fn set_mode(&mut self, mode: Mode);

    /// Changes the indent applied to subsequently flushed fill-mode lines
    fn set_indent(&mut self, indent: Indent);

    /// Pulls the next raw input line out of the dispatch sequence
    fn next_line(&mut self) -> Result<Option<String>>;

    /// Processes a line exactly like the main loop would
    fn handle_line(&mut self, line: &str) -> Result<()>;
}

/// A macro implementation receiving the parsed argument list
pub type MacroHandler = fn(&mut dyn Interpreter, &[String]) -> Result<()>;

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::*;

    /// Records every interpreter call as a readable event
    #[derive(Default)]
    pub struct Recorder {
        pub events: Vec<String>,
        pub pending: VecDeque<String>,
    }

    impl Recorder {
        pub fn with_lines(lines: &[&str]) -> Self {
            Self {
                events: Vec::new(),
                pending: lines.iter().map(|l| l.to_string()).collect(),
            }
        }
    }

    impl Interpreter for Recorder {
        fn write(&mut self, text: &str) -> Result<()> {
            self.events.push(format!("write {:?}", text));
            Ok(())
        }

        fn set_mode(&mut self, mode: Mode) {
            self.events.push(format!("mode {}", mode));
        }

        fn set_indent(&mut self, indent: Indent) {
            self.events.push(format!("indent {:?}", indent));
        }

        fn next_line(&mut self) -> Result<Option<String>> {
            Ok(self.pending.pop_front())
        }

        fn handle_line(&mut self, line: &str) -> Result<()> {
            self.events.push(format!("line {:?}", line));
            Ok(())
        }
    }

    pub fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }
}
