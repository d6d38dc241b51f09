//! Font change macros: `B`, `I` and the alternating `BI`, `BR`, `IR` forms.

use super::Interpreter;
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
enum Face {
    Bold,
    Italic,
    Roman,
}

impl Face {
    fn apply(self, text: &str) -> String {
        match self {
            Face::Bold => format!("**{}**", text),
            Face::Italic => format!("_{}_", text),
            Face::Roman => text.to_string(),
        }
    }
}

/// Concatenates the arguments with no separator, switching face on every argument
fn alternate(args: &[String], even: Face, odd: Face) -> String {
    args.iter()
        .enumerate()
        .map(|(i, arg)| {
            let face = if i % 2 == 0 { even } else { odd };
            face.apply(arg)
        })
        .collect()
}

/// `.B`
pub fn bold(interp: &mut dyn Interpreter, args: &[String]) -> Result<()> {
    interp.write(&Face::Bold.apply(&args.join(" ")))
}

/// `.B` in no-fill mode: emphasis is dropped, the text keeps its own line
pub fn bold_no_fill(interp: &mut dyn Interpreter, args: &[String]) -> Result<()> {
    interp.write(&format!("{}\n", args.join(" ")))
}

/// `.I`
pub fn italic(interp: &mut dyn Interpreter, args: &[String]) -> Result<()> {
    interp.write(&Face::Italic.apply(&args.join(" ")))
}

/// `.BI`
pub fn bold_italic(interp: &mut dyn Interpreter, args: &[String]) -> Result<()> {
    interp.write(&alternate(args, Face::Bold, Face::Italic))
}

/// `.BR`
pub fn bold_roman(interp: &mut dyn Interpreter, args: &[String]) -> Result<()> {
    interp.write(&alternate(args, Face::Bold, Face::Roman))
}

/// `.IR`
pub fn italic_roman(interp: &mut dyn Interpreter, args: &[String]) -> Result<()> {
    interp.write(&alternate(args, Face::Italic, Face::Roman))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{args, Recorder};

    #[test]
    fn test_bold_joins_arguments() {
        let mut rec = Recorder::default();
        bold(&mut rec, &args(&["two", "words"])).unwrap();
        assert_eq!(rec.events, vec!["write \"**two words**\""]);
    }

    #[test]
    fn test_bold_no_fill_keeps_line() {
        let mut rec = Recorder::default();
        bold_no_fill(&mut rec, &args(&["plain", "text"])).unwrap();
        assert_eq!(rec.events, vec!["write \"plain text\\n\""]);
    }

    #[test]
    fn test_italic() {
        let mut rec = Recorder::default();
        italic(&mut rec, &args(&["word"])).unwrap();
        assert_eq!(rec.events, vec!["write \"_word_\""]);
    }

    #[test]
    fn test_bold_italic_alternates() {
        let mut rec = Recorder::default();
        bold_italic(&mut rec, &args(&["foo", "bar", "baz"])).unwrap();
        assert_eq!(rec.events, vec!["write \"**foo**_bar_**baz**\""]);
    }

    #[test]
    fn test_bold_roman_alternates() {
        let mut rec = Recorder::default();
        bold_roman(&mut rec, &args(&["ls", "(1),"])).unwrap();
        assert_eq!(rec.events, vec!["write \"**ls**(1),\""]);
    }

    #[test]
    fn test_italic_roman_alternates() {
        let mut rec = Recorder::default();
        italic_roman(&mut rec, &args(&["file", ".", "ext"])).unwrap();
        assert_eq!(rec.events, vec!["write \"_file_._ext_\""]);
    }

    #[test]
    fn test_alternate_without_arguments_is_empty() {
        let mut rec = Recorder::default();
        bold_roman(&mut rec, &[]).unwrap();
        assert_eq!(rec.events, vec!["write \"\""]);
    }
}
