use strum_macros::Display;

/// Output mode of the interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Mode {
    /// Text is reflowed to the line width
    #[strum(serialize = "fill")]
    Fill,
    /// Lines are emitted verbatim behind the preformat indent
    #[strum(serialize = "no-fill")]
    NoFill,
}

/// Indentation levels a macro handler may request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    None,
    Nested,
}

/// Mutable interpreter state, one per conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub indent: String,
    pub mode: Mode,
}

impl Default for State {
    fn default() -> Self {
        Self {
            indent: String::new(),
            mode: Mode::Fill,
        }
    }
}

impl State {
    pub fn is_fill(&self) -> bool {
        self.mode == Mode::Fill
    }
}
