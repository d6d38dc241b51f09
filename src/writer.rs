use std::io::{self, ErrorKind, Write};

use textwrap::{fill, Options, WordSeparator, WrapAlgorithm};

use crate::{
    error::*,
    state::{Mode, State},
};

/// Accumulates the line under construction and renders it on flush.
///
/// In fill mode the pending tokens are reflowed greedily with `textwrap`, in
/// no-fill mode they are emitted verbatim behind the preformat indent.
pub struct MarkdownWriter<W: Write> {
    out: W,
    sink: String,
    buffer: Vec<String>,
    line_width: usize,
    preformat_indent: String,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(out: W, line_width: usize, preformat_indent: usize) -> Self {
        Self {
            out,
            sink: "<output>".to_string(),
            buffer: Vec::new(),
            line_width,
            preformat_indent: " ".repeat(preformat_indent),
        }
    }

    /// Names the output in write errors
    pub fn with_sink(mut self, sink: &str) -> Self {
        self.sink = sink.to_string();
        self
    }

    /// Appends a token to the pending line.
    ///
    /// Blank tokens are dropped. Every embedded newline forces a flush, which
    /// is how handlers request line and paragraph breaks.
    pub fn write(&mut self, text: &str, state: &State) -> Result<()> {
        if is_blank(text) {
            return Ok(());
        }

        let mut pieces = text.split('\n').peekable();
        while let Some(piece) = pieces.next() {
            if !is_blank(piece) {
                self.buffer.push(piece.to_string());
            }
            if pieces.peek().is_some() {
                self.flush(state)?;
            }
        }
        Ok(())
    }

    /// Renders the pending tokens as one output line (possibly wrapped) and clears them.
    /// An empty buffer still produces a line.
    pub fn flush(&mut self, state: &State) -> Result<()> {
        let rendered = self.render(state);
        writeln!(self.out, "{}", rendered).map_err(|e| output_error(&self.sink, e))?;
        self.buffer.clear();
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Flushes the underlying sink
    pub fn finish(&mut self) -> Result<()> {
        self.out.flush().map_err(|e| output_error(&self.sink, e))?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&self, state: &State) -> String {
        let line = self.buffer.join(" ");
        match state.mode {
            Mode::Fill if line.is_empty() => line,
            // At least one column is left after the indent
            Mode::Fill => fill(
                &line,
                Options::new(self.line_width.max(state.indent.len() + 1))
                    .initial_indent(&state.indent)
                    .subsequent_indent(&state.indent)
                    .word_separator(WordSeparator::AsciiSpace)
                    .wrap_algorithm(WrapAlgorithm::FirstFit),
            ),
            Mode::NoFill => format!("{}{}", self.preformat_indent, line),
        }
    }
}

// A closed pipe stays an I/O error so the caller can exit quietly
fn output_error(sink: &str, error: io::Error) -> Error {
    if error.kind() == ErrorKind::BrokenPipe {
        Error::Io(error)
    } else {
        Error::OutputWriteError {
            file: sink.to_string(),
            cause: error.to_string(),
        }
    }
}

fn is_blank(text: &str) -> bool {
    text.trim_matches(' ').is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(width: usize) -> MarkdownWriter<Vec<u8>> {
        MarkdownWriter::new(Vec::new(), width, 4)
    }

    struct FailingSink(ErrorKind);

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "sink failure"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn output(writer: MarkdownWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_tokens_are_joined_with_spaces() {
        let state = State::default();
        let mut w = writer(75);
        w.write("hello", &state).unwrap();
        w.write("world", &state).unwrap();
        assert!(w.is_pending());
        w.flush(&state).unwrap();
        assert!(!w.is_pending());
        assert_eq!(output(w), "hello world\n");
    }

    #[test]
    fn test_blank_tokens_are_ignored() {
        let state = State::default();
        let mut w = writer(75);
        w.write("", &state).unwrap();
        w.write("   ", &state).unwrap();
        assert!(!w.is_pending());
        assert_eq!(output(w), "");
    }

    #[test]
    fn test_newlines_force_flushes() {
        let state = State::default();
        let mut w = writer(75);
        w.write("pending", &state).unwrap();
        w.write("\n## NAME\n\n", &state).unwrap();
        assert_eq!(output(w), "pending\n## NAME\n\n");
    }

    #[test]
    fn test_single_newline_flushes_once() {
        let state = State::default();
        let mut w = writer(75);
        w.write("\n", &state).unwrap();
        assert_eq!(output(w), "\n");
    }

    #[test]
    fn test_fill_wraps_at_line_width() {
        let state = State::default();
        let mut w = writer(20);
        for word in "alpha beta gamma delta epsilon".split_whitespace() {
            w.write(word, &state).unwrap();
        }
        w.flush(&state).unwrap();
        assert_eq!(output(w), "alpha beta gamma\ndelta epsilon\n");
    }

    #[test]
    fn test_fill_applies_hanging_indent() {
        let state = State {
            indent: "    ".to_string(),
            mode: Mode::Fill,
        };
        let mut w = writer(22);
        for word in "alpha beta gamma delta epsilon".split_whitespace() {
            w.write(word, &state).unwrap();
        }
        w.flush(&state).unwrap();
        assert_eq!(output(w), "    alpha beta gamma\n    delta epsilon\n");
    }

    #[test]
    fn test_empty_flush_ignores_indent() {
        let state = State {
            indent: "    ".to_string(),
            mode: Mode::Fill,
        };
        let mut w = writer(75);
        w.flush(&state).unwrap();
        assert_eq!(output(w), "\n");
    }

    #[test]
    fn test_no_fill_is_verbatim() {
        let state = State {
            indent: String::new(),
            mode: Mode::NoFill,
        };
        let mut w = writer(10);
        w.write("  keep   this spacing even when long\n", &state).unwrap();
        w.flush(&state).unwrap();
        assert_eq!(output(w), "      keep   this spacing even when long\n    \n");
    }

    #[test]
    fn test_width_narrower_than_indent() {
        let state = State {
            indent: "    ".to_string(),
            mode: Mode::Fill,
        };
        let mut w = writer(1);
        w.write("ab", &state).unwrap();
        w.write("c", &state).unwrap();
        w.flush(&state).unwrap();
        assert_eq!(output(w), "    a\n    b\n    c\n");
    }

    #[test]
    fn test_write_failure_names_the_sink() {
        let state = State::default();
        let mut w = MarkdownWriter::new(FailingSink(ErrorKind::Other), 75, 4).with_sink("ls.md");
        match w.flush(&state) {
            Err(Error::OutputWriteError { file, .. }) => assert_eq!(file, "ls.md"),
            other => panic!("Expected an output error, got {:?}", other),
        }
    }

    #[test]
    fn test_broken_pipe_stays_io_error() {
        let state = State::default();
        let mut w = MarkdownWriter::new(FailingSink(ErrorKind::BrokenPipe), 75, 4);
        assert!(matches!(
            w.flush(&state),
            Err(Error::Io(e)) if e.kind() == ErrorKind::BrokenPipe
        ));
    }
}
