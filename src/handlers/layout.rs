//! Paragraph, list and fill-mode macros.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Interpreter;
use crate::constants::markup::{BULLET_ESCAPES, BULLET_MARKER, TAG_MARKER};
use crate::debug;
use crate::error::Result;
use crate::state::{Indent, Mode};

// Numbered list tags such as "1." (anything after the dot is tolerated)
static NUMBERED_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.").unwrap());

/// `.IP tag`: starts a list item. Bullets and numbers indent the body that follows.
pub fn indented_paragraph(interp: &mut dyn Interpreter, args: &[String]) -> Result<()> {
    let Some(tag) = args.first() else {
        return Ok(());
    };

    interp.write("\n")?;
    interp.set_indent(Indent::None);

    if BULLET_ESCAPES.contains(&tag.as_str()) {
        interp.write(&format!("\n{}\n", BULLET_MARKER))?;
        interp.set_indent(Indent::Nested);
    } else if NUMBERED_TAG.is_match(tag) {
        interp.write(&format!("\n{}\n", tag))?;
        interp.set_indent(Indent::Nested);
    }
    Ok(())
}

/// `.TP`: the next input line is the tag, rendered inline after a bullet marker.
pub fn tagged_paragraph(interp: &mut dyn Interpreter, _args: &[String]) -> Result<()> {
    let tag = match interp.next_line()? {
        Some(line) if !line.is_empty() => line,
        _ => {
            debug!("TP without a tag line, ignored");
            return Ok(());
        }
    };

    interp.write("\n")?;
    interp.set_indent(Indent::None);
    interp.write(&format!("\n{}", TAG_MARKER))?;
    interp.handle_line(&tag)?;
    interp.write("\n")?;
    interp.set_indent(Indent::Nested);
    Ok(())
}

/// `.PP`
pub fn paragraph(interp: &mut dyn Interpreter, _args: &[String]) -> Result<()> {
    interp.write("\n\n")?;
    interp.set_indent(Indent::None);
    Ok(())
}

/// `.br`
pub fn line_break(interp: &mut dyn Interpreter, _args: &[String]) -> Result<()> {
    interp.write("\n")
}

/// `.sp`
pub fn vertical_space(interp: &mut dyn Interpreter, _args: &[String]) -> Result<()> {
    interp.write("\n\n")
}

/// `.sp` in no-fill mode
pub fn vertical_space_no_fill(interp: &mut dyn Interpreter, _args: &[String]) -> Result<()> {
    interp.write("\n")
}

/// `.nf`
pub fn begin_no_fill(interp: &mut dyn Interpreter, _args: &[String]) -> Result<()> {
    interp.write("\n")?;
    interp.set_mode(Mode::NoFill);
    Ok(())
}

/// `.fi` in no-fill mode
pub fn end_no_fill(interp: &mut dyn Interpreter, _args: &[String]) -> Result<()> {
    interp.set_mode(Mode::Fill);
    Ok(())
}

/// Consumes the macro without output (`.in`, `.br` in no-fill mode)
pub fn ignore(_interp: &mut dyn Interpreter, _args: &[String]) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{args, Recorder};

    #[test]
    fn test_ip_without_arguments_is_noop() {
        let mut rec = Recorder::default();
        indented_paragraph(&mut rec, &[]).unwrap();
        assert!(rec.events.is_empty());
    }

    #[test]
    fn test_ip_bullet() {
        for escape in ["\\(bu", "\\(em"] {
            let mut rec = Recorder::default();
            indented_paragraph(&mut rec, &args(&[escape, "4"])).unwrap();
            assert_eq!(
                rec.events,
                vec![
                    "write \"\\n\"",
                    "indent None",
                    "write \"\\n*\\n\"",
                    "indent Nested",
                ]
            );
        }
    }

    #[test]
    fn test_ip_numbered() {
        let mut rec = Recorder::default();
        indented_paragraph(&mut rec, &args(&["12."])).unwrap();
        assert_eq!(
            rec.events,
            vec![
                "write \"\\n\"",
                "indent None",
                "write \"\\n12.\\n\"",
                "indent Nested",
            ]
        );
    }

    #[test]
    fn test_ip_other_tag_resets_indent() {
        let mut rec = Recorder::default();
        indented_paragraph(&mut rec, &args(&["-v"])).unwrap();
        assert_eq!(rec.events, vec!["write \"\\n\"", "indent None"]);
    }

    #[test]
    fn test_tp_pulls_tag_line() {
        let mut rec = Recorder::with_lines(&[".B \\-v", "body"]);
        tagged_paragraph(&mut rec, &[]).unwrap();
        assert_eq!(
            rec.events,
            vec![
                "write \"\\n\"",
                "indent None",
                "write \"\\n*  \"",
                "line \".B \\\\-v\"",
                "write \"\\n\"",
                "indent Nested",
            ]
        );
        assert_eq!(rec.pending, vec!["body"]);
    }

    #[test]
    fn test_tp_at_end_of_input() {
        let mut rec = Recorder::default();
        tagged_paragraph(&mut rec, &[]).unwrap();
        assert!(rec.events.is_empty());
    }

    #[test]
    fn test_tp_with_empty_tag_consumes_it() {
        let mut rec = Recorder::with_lines(&["", "next"]);
        tagged_paragraph(&mut rec, &[]).unwrap();
        assert!(rec.events.is_empty());
        assert_eq!(rec.pending, vec!["next"]);
    }

    #[test]
    fn test_fill_mode_switches() {
        let mut rec = Recorder::default();
        begin_no_fill(&mut rec, &[]).unwrap();
        end_no_fill(&mut rec, &[]).unwrap();
        assert_eq!(
            rec.events,
            vec!["write \"\\n\"", "mode no-fill", "mode fill"]
        );
    }

    #[test]
    fn test_spacing_macros() {
        let mut rec = Recorder::default();
        paragraph(&mut rec, &[]).unwrap();
        vertical_space(&mut rec, &[]).unwrap();
        vertical_space_no_fill(&mut rec, &[]).unwrap();
        line_break(&mut rec, &[]).unwrap();
        ignore(&mut rec, &args(&["+4"])).unwrap();
        assert_eq!(
            rec.events,
            vec![
                "write \"\\n\\n\"",
                "indent None",
                "write \"\\n\\n\"",
                "write \"\\n\"",
                "write \"\\n\"",
            ]
        );
    }
}
