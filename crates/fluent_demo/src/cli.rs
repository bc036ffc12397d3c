//! CLI argument definitions

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use fluent_core::Appearance;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "fluent-demo",
    version,
    about = "Fluent token demo - inspect how control tokens resolve",
    long_about = "Resolve Fluent control tokens under a preset or theme file.\n\n\
                  Toggle theme-wide and per-control demo overrides to see which \
                  layer answers each token."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Explicit log level (overrides -v).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the resolved token table of a control.
    Tokens(TokensArgs),

    /// List the built-in theme presets.
    Presets,

    /// Validate a theme file.
    Check(CheckArgs),

    /// Walk a badge through theme-wide and per-instance overrides.
    Scenario(ScenarioArgs),
}

#[derive(Args)]
pub struct TokensArgs {
    #[arg(value_enum)]
    pub control: ControlArg,

    /// Built-in preset the theme starts from.
    #[arg(long, default_value = "default")]
    pub preset: String,

    /// Theme file; takes precedence over --preset.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub appearance: AppearanceArgs,

    /// Control style (e.g. "danger", "outline_accent").
    #[arg(long)]
    pub style: Option<String>,

    /// Control size (e.g. "small", "xlarge").
    #[arg(long)]
    pub size: Option<String>,

    /// Register the demo theme-wide overrides for the control.
    #[arg(long = "theme-override")]
    pub theme_override: bool,

    /// Install the demo per-control overrides on the instance.
    #[arg(long = "control-override")]
    pub control_override: bool,
}

#[derive(Args, Clone, Copy, Default)]
pub struct AppearanceArgs {
    /// Resolve in dark mode.
    #[arg(long)]
    pub dark: bool,

    /// Resolve on an elevated surface.
    #[arg(long)]
    pub elevated: bool,

    /// Resolve with increased contrast.
    #[arg(long = "high-contrast")]
    pub high_contrast: bool,
}

impl AppearanceArgs {
    pub fn appearance(&self) -> Appearance {
        let mut appearance = if self.dark {
            Appearance::DARK
        } else {
            Appearance::LIGHT
        };
        if self.elevated {
            appearance = appearance.elevated();
        }
        if self.high_contrast {
            appearance = appearance.high_contrast();
        }
        appearance
    }
}

#[derive(Args)]
pub struct CheckArgs {
    #[arg(value_name = "THEME_FILE")]
    pub path: PathBuf,
}

#[derive(Args)]
pub struct ScenarioArgs {
    #[command(flatten)]
    pub appearance: AppearanceArgs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ControlArg {
    Badge,
    Button,
    Avatar,
    Shimmer,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for Level {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn tokens_flags_parse() {
        let cli = Cli::try_parse_from([
            "fluent-demo",
            "tokens",
            "badge",
            "--preset",
            "purple",
            "--dark",
            "--high-contrast",
            "--style",
            "danger",
            "--theme-override",
        ])
        .unwrap();
        let Command::Tokens(args) = cli.command else {
            panic!("expected tokens command");
        };
        assert_eq!(args.control, ControlArg::Badge);
        assert_eq!(args.preset, "purple");
        assert_eq!(args.style.as_deref(), Some("danger"));
        assert!(args.theme_override);
        assert!(!args.control_override);
        assert_eq!(
            args.appearance.appearance(),
            Appearance::DARK.high_contrast()
        );
    }

    #[test]
    fn verbosity_is_global() {
        let cli = Cli::try_parse_from(["fluent-demo", "scenario", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
