use super::{font, layout, section, MacroHandler};
use crate::state::Mode;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps `(macro name, mode)` pairs to their handlers
#[derive(Default)]
pub struct HandlerRegistry {
    fill: HashMap<String, MacroHandler>,
    no_fill: HashMap<String, MacroHandler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes the registry with the supported man macros.
    /// Macros without a no-fill entry fall back to literal text in no-fill mode.
    pub fn init(&mut self) {
        self.register("B", Mode::Fill, font::bold);
        self.register("B", Mode::NoFill, font::bold_no_fill);
        self.register("BI", Mode::Fill, font::bold_italic);
        self.register("BR", Mode::Fill, font::bold_roman);
        self.register("I", Mode::Fill, font::italic);
        self.register("IR", Mode::Fill, font::italic_roman);
        self.register("IP", Mode::Fill, layout::indented_paragraph);
        self.register("br", Mode::Fill, layout::line_break);
        self.register("br", Mode::NoFill, layout::ignore);
        self.register("fi", Mode::NoFill, layout::end_no_fill);
        self.register("in", Mode::Fill, layout::ignore);
        self.register("nf", Mode::Fill, layout::begin_no_fill);
        self.register("PP", Mode::Fill, layout::paragraph);
        self.register("SH", Mode::Fill, section::section_heading);
        self.register("SS", Mode::Fill, section::subsection_heading);
        self.register("sp", Mode::Fill, layout::vertical_space);
        self.register("sp", Mode::NoFill, layout::vertical_space_no_fill);
        self.register("TH", Mode::Fill, section::title_heading);
        self.register("TP", Mode::Fill, layout::tagged_paragraph);
    }

    /// Registers (or replaces) the handler of a macro for the given mode
    pub fn register(&mut self, name: &str, mode: Mode, handler: MacroHandler) {
        self.table_mut(mode).insert(name.to_string(), handler);
    }

    pub fn get(&self, name: &str, mode: Mode) -> Option<MacroHandler> {
        self.table(mode).get(name).copied()
    }

    pub fn contains(&self, name: &str, mode: Mode) -> bool {
        self.table(mode).contains_key(name)
    }

    fn table(&self, mode: Mode) -> &HashMap<String, MacroHandler> {
        match mode {
            Mode::Fill => &self.fill,
            Mode::NoFill => &self.no_fill,
        }
    }

    fn table_mut(&mut self, mode: Mode) -> &mut HashMap<String, MacroHandler> {
        match mode {
            Mode::Fill => &mut self.fill,
            Mode::NoFill => &mut self.no_fill,
        }
    }
}

/// Global handler manager that provides shared access to the default registry
pub struct HandlerManager {
    registry: Arc<HandlerRegistry>,
}

impl HandlerManager {
    /// Gets a reference to the global handler manager
    pub fn get() -> &'static HandlerManager {
        static INSTANCE: Lazy<HandlerManager> = Lazy::new(|| {
            let mut registry = HandlerRegistry::new();
            registry.init();
            HandlerManager {
                registry: Arc::new(registry),
            }
        });
        &INSTANCE
    }

    /// Gets a clone of the shared registry
    pub fn share(&self) -> Arc<HandlerRegistry> {
        Arc::clone(&self.registry)
    }
}
