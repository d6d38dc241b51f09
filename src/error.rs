use std::io::Write;
use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Display)]
pub enum ConfigType {
    #[strum(serialize = "Main config")]
    MAIN,
    #[strum(serialize = "Environment")]
    ENV,
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("error processing args. Cause : {0}")]
    ArgsProcessingError(String),
    #[error("invalid configuration in {file:?}. Cause : {cause}")]
    ConfigError { file: String, cause: String },
    #[error("unable to read configuration file {file:?}. Cause : {cause}")]
    ConfigReadError { file: String, cause: String },
    #[error("unable to parse {location} file {file:?}. Cause : {cause}")]
    SerdeTomlError {
        location: ConfigType,
        file: String,
        cause: String,
    },
    #[error("unable to interpolate variable in {location}. Cause : {cause}")]
    InterpolationError { location: ConfigType, cause: String },
    #[error("unable to read input {file:?}. Cause : {cause}")]
    InputReadError { file: String, cause: String },
    #[error("unable to write output {file:?}. Cause : {cause}")]
    OutputWriteError { file: String, cause: String },
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("{0}")]
    Msg(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::Io(io_error) if io_error.kind() == ::std::io::ErrorKind::BrokenPipe => {
            ::std::process::exit(0);
        }
        Error::ConfigError { file: _, cause: _ }
        | Error::ConfigReadError { file: _, cause: _ }
        | Error::SerdeTomlError {
            location: _,
            file: _,
            cause: _,
        }
        | Error::InterpolationError {
            location: _,
            cause: _,
        } => {
            writeln!(output, "{}: {}", Red.paint("[config error]"), error).ok();
        }
        Error::InputReadError { file: _, cause: _ } => {
            writeln!(output, "{}: {}", Red.paint("[input error]"), error).ok();
        }
        Error::OutputWriteError { file: _, cause: _ } => {
            writeln!(output, "{}: {}", Red.paint("[output error]"), error).ok();
        }
        _ => {
            writeln!(output, "{}: {}", Red.paint("[man2md error]"), error).ok();
        }
    };
}
