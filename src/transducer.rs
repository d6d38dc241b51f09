use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::{
    config::Defaults,
    debug,
    error::*,
    handlers::{HandlerManager, HandlerRegistry, Interpreter},
    parser::{classify, Invocation, Line},
    reader::LineCursor,
    state::{Indent, Mode, State},
    writer::MarkdownWriter,
};

/// Line-by-line man page interpreter producing Markdown.
///
/// Owns the input cursor, the pending output and the interpreter state of a
/// single conversion; independent transducers share nothing but the
/// (immutable) handler registry.
pub struct Transducer<R: BufRead, W: Write> {
    cursor: LineCursor<R>,
    writer: MarkdownWriter<W>,
    state: State,
    list_indent: String,
    registry: Arc<HandlerRegistry>,
}

impl<R: BufRead, W: Write> Transducer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_settings(input, output, &Defaults::default())
    }

    pub fn with_settings(input: R, output: W, settings: &Defaults) -> Self {
        Self {
            cursor: LineCursor::new(input),
            writer: MarkdownWriter::new(output, settings.line_width, settings.preformat_indent),
            state: State::default(),
            list_indent: " ".repeat(settings.list_indent),
            registry: HandlerManager::get().share(),
        }
    }

    /// Replaces the default macro catalog
    pub fn with_registry(mut self, registry: Arc<HandlerRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Names the input and output in read and write errors
    pub fn with_names(mut self, input: &str, output: &str) -> Self {
        self.cursor = self.cursor.with_source(input);
        self.writer = self.writer.with_sink(output);
        self
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Converts the whole input. Pending text is always flushed before returning.
    pub fn run(&mut self) -> Result<()> {
        while let Some(line) = self.cursor.next_line()? {
            self.process_source_line(&line)?;
        }
        self.writer.flush(&self.state)?;
        self.writer.finish()?;
        debug!("Converted {} input lines", self.cursor.line_number());
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.writer.into_inner()
    }

    /// Lines taken by the main loop. Blank ones end the paragraph in fill mode,
    /// lines pulled by handlers never do.
    fn process_source_line(&mut self, line: &str) -> Result<()> {
        if self.state.is_fill() && line.trim().is_empty() {
            return self.break_paragraph();
        }
        self.dispatch(line)
    }

    fn dispatch(&mut self, line: &str) -> Result<()> {
        match classify(line) {
            Line::Comment => Ok(()),
            Line::Text(text) => self.handle_simple_line(text),
            Line::Macro(invocation) => self.handle_macro(invocation),
        }
    }

    fn handle_macro(&mut self, invocation: Invocation) -> Result<()> {
        let mode = self.state.mode;
        let handler = self.registry.get(&invocation.name, mode);
        match handler {
            Some(handler) => handler(self, &invocation.args),
            None => {
                debug!(
                    "Line {}: no {} handler for .{}, emitting its arguments as text",
                    self.cursor.line_number(),
                    mode,
                    invocation.name
                );
                let separator = match mode {
                    Mode::Fill => " ",
                    Mode::NoFill => "",
                };
                self.handle_simple_line(&invocation.args.join(separator))
            }
        }
    }

    fn handle_simple_line(&mut self, line: &str) -> Result<()> {
        match self.state.mode {
            Mode::Fill => line
                .split_whitespace()
                .try_for_each(|word| self.writer.write(word, &self.state)),
            Mode::NoFill => self.writer.write(&format!("{}\n", line), &self.state),
        }
    }

    /// A blank source line ends the running paragraph and leaves one empty line
    fn break_paragraph(&mut self) -> Result<()> {
        if self.writer.is_pending() {
            self.writer.flush(&self.state)?;
        }
        self.writer.flush(&self.state)
    }
}

impl<R: BufRead, W: Write> Interpreter for Transducer<R, W> {
    fn write(&mut self, text: &str) -> Result<()> {
        self.writer.write(text, &self.state)
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.state.mode != mode {
            debug!("Line {}: switching to {} mode", self.cursor.line_number(), mode);
        }
        self.state.mode = mode;
    }

    fn set_indent(&mut self, indent: Indent) {
        self.state.indent = match indent {
            Indent::None => String::new(),
            Indent::Nested => self.list_indent.clone(),
        };
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        self.cursor.next_line()
    }

    fn handle_line(&mut self, line: &str) -> Result<()> {
        self.dispatch(line)
    }
}
