use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};

use crate::{bootstrap::BootStrap, clap_app};
use clap::ArgMatches;
use man2md::{config::Defaults, debug, error::*, transducer::Transducer};

const STDIN_PATH: &str = "-";

pub struct App {
    pub matches: ArgMatches,
}

impl App {
    pub fn new() -> Result<Self> {
        #[cfg(windows)]
        let _ = nu_ansi_term::enable_ansi_support();

        let interactive_output = std::io::stdout().is_terminal();

        Ok(App {
            matches: Self::matches(interactive_output)?,
        })
    }

    pub fn matches(interactive_output: bool) -> Result<ArgMatches> {
        Ok(clap_app::build_app(interactive_output).get_matches())
    }

    /// Resolves the conversion settings, command line values taking precedence
    /// over the configuration file.
    fn build_settings(&self, bootstrap: &BootStrap) -> Defaults {
        let settings = bootstrap.get_config().defaults.clone();
        match self.matches.get_one::<u16>("width") {
            Some(width) => settings.with_line_width(usize::from(*width)),
            None => settings,
        }
    }

    fn open_input(&self) -> Result<Box<dyn BufRead>> {
        let path = self
            .matches
            .get_one::<String>("input")
            .ok_or_else(|| Error::ArgsProcessingError("Missing input file".to_string()))?;

        if path == STDIN_PATH {
            return Ok(Box::new(io::stdin().lock()));
        }

        File::open(path)
            .map(|file| Box::new(BufReader::new(file)) as Box<dyn BufRead>)
            .map_err(|e| Error::InputReadError {
                file: path.to_string(),
                cause: e.to_string(),
            })
    }

    fn open_output(&self) -> Result<Box<dyn Write>> {
        match self.matches.get_one::<String>("output") {
            Some(path) => File::create(path)
                .map(|file| Box::new(BufWriter::new(file)) as Box<dyn Write>)
                .map_err(|e| Error::OutputWriteError {
                    file: path.to_string(),
                    cause: e.to_string(),
                }),
            None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        }
    }

    fn input_name(&self) -> &str {
        match self.matches.get_one::<String>("input") {
            Some(path) if path != STDIN_PATH => path.as_str(),
            _ => "<stdin>",
        }
    }

    fn output_name(&self) -> &str {
        self.matches
            .get_one::<String>("output")
            .map_or("<stdout>", |path| path.as_str())
    }

    /// Start the application, bootstraps the configuration and runs the conversion.
    ///
    /// # Errors
    /// Read and write failures are reported against the input or output they came from.
    pub fn start(&self) -> Result<()> {
        let bootstrap = BootStrap::new(self.matches.get_flag("no-config"))?;
        let settings = self.build_settings(&bootstrap);
        debug!("Using settings {:?}", settings);

        let input = self.open_input()?;
        let output = self.open_output()?;

        Transducer::with_settings(input, output, &settings)
            .with_names(self.input_name(), self.output_name())
            .run()
    }
}
