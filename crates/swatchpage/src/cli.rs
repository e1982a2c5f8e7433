//! Command-line surface.
//!
//! ```text
//! swatchpage -css <PATH> [-output <PATH>] [-wallpaper <LABEL>] [-mode <LABEL>]
//! ```
//!
//! Long flags are accepted with one dash or two (`-css theme.css`,
//! `--css theme.css`, `-css=theme.css`). Without `-css` the usage line is
//! printed to stdout and the run fails.
//!
//! Every failure prints one diagnostic line to stderr and exits with
//! status 1.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use crate::error::PaletteError;
use crate::{generate, Config, RenderError, DEFAULT_OUTPUT};

/// Long flags that may be written with a single dash.
const LONG_FLAGS: &[&str] = &["css", "output", "wallpaper", "mode", "help", "version"];

#[derive(Parser, Debug)]
#[command(
    name = "swatchpage",
    version,
    about = "Renders the :root color variables of a CSS file as an HTML palette page"
)]
pub struct Cli {
    /// Path to the CSS file containing the color palette
    #[arg(long, value_name = "PATH")]
    pub css: Option<PathBuf>,

    /// Output HTML file name
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Wallpaper label shown in the page header [default: the CSS
    /// `Wallpaper:` comment]
    #[arg(long, value_name = "LABEL")]
    pub wallpaper: Option<String>,

    /// Mode label shown in the page header [default: the CSS `Mode:`
    /// comment]
    #[arg(long, value_name = "LABEL")]
    pub mode: Option<String>,
}

impl Cli {
    /// Resolves the run configuration, or `None` when no stylesheet was given.
    pub fn into_config(self) -> Option<Config> {
        let css = self.css?;
        let mut config = Config::new(css).with_output(self.output);
        config.wallpaper = self.wallpaper;
        config.mode = self.mode;
        Some(config)
    }
}

/// Rewrites single-dash long flags (`-css`, `-output=x`) to their `--` form.
///
/// The program name and anything after a bare `--` are left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::<OsString>::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    None
                }
                Some(text) => text
                    .strip_prefix('-')
                    .filter(|rest| !rest.starts_with('-') && is_long_flag(rest))
                    .map(|_| OsString::from(format!("-{}", text))),
                None => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}

fn is_long_flag(arg: &str) -> bool {
    let name = arg.split_once('=').map_or(arg, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}

/// Usage text printed when `-css` is missing.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// The stderr line for a failed run.
pub fn diagnostic(err: &PaletteError) -> String {
    match err {
        PaletteError::Io { .. } | PaletteError::Read { .. } | PaletteError::Format => {
            format!("Error parsing CSS file: {}", err)
        }
        PaletteError::Template(source) => format!("Error parsing HTML template: {}", source),
        PaletteError::Output {
            path,
            source: RenderError::CreateError(io),
        } => format!("Error creating output file {}: {}", path.display(), io),
        PaletteError::Output {
            path,
            source: RenderError::IoError(io),
        } => format!("Error writing output file {}: {}", path.display(), io),
        PaletteError::Output { source, .. } => format!("Error executing template: {}", source),
    }
}

/// Parses `args`, runs the pipeline and reports the outcome.
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cli = match Cli::try_parse_from(normalize_args(args)) {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too, with a zero exit code.
            let code = err.exit_code();
            let _ = err.print();
            return ExitCode::from(u8::try_from(code).unwrap_or(1));
        }
    };

    let Some(config) = cli.into_config() else {
        println!("{}", usage());
        return ExitCode::FAILURE;
    };

    match generate(&config) {
        Ok(summary) => {
            println!("Successfully generated {}", summary.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", diagnostic(&err));
            ExitCode::FAILURE
        }
    }
}
