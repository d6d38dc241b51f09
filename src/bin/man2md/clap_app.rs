use clap::{
    arg,
    builder::{styling::AnsiColor, Styles},
    crate_description, crate_name, crate_version, value_parser, ColorChoice, Command,
};

fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty())
}

// Builds the application command line interface
pub fn build_app(interactive_output: bool) -> Command {
    let color_when = if interactive_output && !env_no_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default());

    Command::new(crate_name!())
        .styles(styles)
        .version(crate_version!())
        .about(crate_description!())
        .color(color_when)
        .arg(
            arg!(<input> "The man page to convert")
                .long_help(
                    "Path of the troff/groff man page to convert. \
                    Use \"-\" to read the document from the standard input.",
                ),
        )
        .arg(
            arg!(-w --width <COLUMNS> "Sets the wrap width of the generated paragraphs.")
                .long_help(
                    "Explicitly sets the column at which filled paragraphs are wrapped. \
                    Overrides the line_width setting of the configuration file (defaults to 75).",
                )
                .value_parser(value_parser!(u16).range(1..)),
        )
        .arg(
            arg!(-o --output <FILE> "Writes the Markdown to the given file.")
                .long_help(
                    "Writes the converted document to the given file instead of the \
                    standard output. The file is created or truncated.",
                ),
        )
        .arg(
            arg!(--"no-config" "Ignores the configuration file.")
                .long_help(
                    "Skips reading man2md.toml from the configuration directory \
                    ($MAN2MD_CONFIG_DIR) and uses the built-in defaults.",
                ),
        )
}
