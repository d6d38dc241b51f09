//! `man2md` is a library to convert troff/groff man pages into Markdown.
//!
//! The main struct of this crate is `transducer::Transducer`, a line-by-line
//! macro interpreter reading from any `BufRead` and writing to any `Write`.
//! For one-off conversions use `convert_str`.
//!
//! "Hello world" example:
//! ```
//! let markdown = man2md::convert_str(".SH NAME\nhello \\- greet the world\n").unwrap();
//! assert_eq!(markdown, "\n\n## NAME\n\nhello \\- greet the world\n");
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod log;
pub mod parser;
pub mod reader;
pub mod state;
pub mod transducer;
pub mod writer;

use config::Defaults;
use error::Result;
use transducer::Transducer;

/// Converts a whole man page held in memory using the default settings
pub fn convert_str(source: &str) -> Result<String> {
    convert_str_with(source, &Defaults::default())
}

/// Converts a whole man page held in memory
pub fn convert_str_with(source: &str, settings: &Defaults) -> Result<String> {
    let mut transducer = Transducer::with_settings(source.as_bytes(), Vec::new(), settings);
    transducer.run()?;
    String::from_utf8(transducer.into_output())
        .map_err(|e| error::Error::Msg(format!("output is not valid UTF-8: {}", e)))
}

/// The man2md prelude
///
/// This module re-exports the most commonly used items from man2md.
/// You can use it with `use man2md::prelude::*;` to bring all common items into scope.
pub mod prelude {
    pub use crate::handlers::{HandlerManager, HandlerRegistry, Interpreter, MacroHandler};

    pub use crate::config::{Defaults, MainConfig};
    pub use crate::error::Result;
    pub use crate::state::{Indent, Mode};
    pub use crate::transducer::Transducer;

    pub use crate::{convert_str, convert_str_with};
}
