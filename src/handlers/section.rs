use super::Interpreter;
use crate::error::Result;
use crate::state::Indent;

fn heading(interp: &mut dyn Interpreter, level: &str, args: &[String]) -> Result<()> {
    interp.write("\n")?;
    interp.set_indent(Indent::None);
    interp.write(&format!("\n{} {}\n\n", level, args.join(" ")))
}

/// `.SH`
pub fn section_heading(interp: &mut dyn Interpreter, args: &[String]) -> Result<()> {
    heading(interp, "##", args)
}

/// `.SS`
pub fn subsection_heading(interp: &mut dyn Interpreter, args: &[String]) -> Result<()> {
    heading(interp, "###", args)
}

/// `.TH` carries title metadata only, nothing is rendered
pub fn title_heading(_interp: &mut dyn Interpreter, _args: &[String]) -> Result<()> {
    Ok(())
}
