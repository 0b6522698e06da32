// SPDX-License-Identifier: MIT
//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tinto_theme::HarmonyStrategy;

/// Build accessible UI color themes from two seed colors
#[derive(Debug, Parser)]
#[command(name = "tinto", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a theme and print it
    Build(BuildArgs),
    /// Measure WCAG contrast between two colors
    Contrast {
        /// Foreground (text) color
        fg: String,
        /// Background color
        bg: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Re-hue a secondary color relative to a primary
    Harmonize {
        primary: String,
        secondary: String,
        #[arg(long, value_enum, default_value_t = StrategyArg::Complementary)]
        strategy: StrategyArg,
        /// Seed for the analogous direction coin flip
        #[arg(long)]
        seed: Option<u32>,
    },
    /// List builtin seed presets
    Presets,
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Primary seed color (#rrggbb)
    #[arg(required_unless_present_any = ["input", "preset"])]
    pub primary: Option<String>,
    /// Secondary seed color (#rrggbb)
    #[arg(required_unless_present_any = ["input", "preset"])]
    pub secondary: Option<String>,

    /// Read the request from a JSON file ({"primaryHex", "secondaryHex", "name"})
    #[arg(long, conflicts_with_all = ["primary", "secondary", "preset"])]
    pub input: Option<PathBuf>,
    /// Use a builtin preset
    #[arg(long, conflicts_with_all = ["primary", "secondary"])]
    pub preset: Option<String>,
    /// Theme name recorded in the metadata
    #[arg(long)]
    pub name: Option<String>,

    /// Theme options JSON file; flags below override it
    #[arg(long, env = "TINTO_CONFIG")]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
    pub format: OutputFormat,
    /// CSS selector for the variable block
    #[arg(long)]
    pub selector: Option<String>,
    /// Brand gradient angle in degrees
    #[arg(long)]
    pub angle: Option<f32>,
    /// Require AAA contrast instead of AA
    #[arg(long)]
    pub aaa: bool,
    /// Text is large (18pt, or 14pt bold)
    #[arg(long)]
    pub large_text: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// CSS custom-property block
    #[default]
    Css,
    /// Full result as JSON
    Json,
    /// Validation report for humans
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Complementary,
    Triadic,
    Analogous,
}

impl From<StrategyArg> for HarmonyStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Complementary => Self::Complementary,
            StrategyArg::Triadic => Self::Triadic,
            StrategyArg::Analogous => Self::Analogous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_with_two_seeds() {
        let cli = Cli::try_parse_from(["tinto", "build", "#3b82f6", "#10b981", "--format", "json"])
            .unwrap();
        let Command::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.primary.as_deref(), Some("#3b82f6"));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(!args.aaa);
    }

    #[test]
    fn build_requires_seeds_or_input() {
        assert!(Cli::try_parse_from(["tinto", "build"]).is_err());
        assert!(Cli::try_parse_from(["tinto", "build", "--input", "theme.json"]).is_ok());
        assert!(Cli::try_parse_from(["tinto", "build", "--preset", "sunset"]).is_ok());
    }

    #[test]
    fn input_conflicts_with_seeds() {
        let parsed =
            Cli::try_parse_from(["tinto", "build", "#3b82f6", "#10b981", "--input", "t.json"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn harmonize_parses_strategy_and_seed() {
        let cli = Cli::try_parse_from([
            "tinto", "harmonize", "#3b82f6", "#2563eb", "--strategy", "analogous", "--seed", "7",
        ])
        .unwrap();
        let Command::Harmonize { strategy, seed, .. } = cli.command else {
            panic!("expected harmonize");
        };
        assert_eq!(HarmonyStrategy::from(strategy), HarmonyStrategy::Analogous);
        assert_eq!(seed, Some(7));
    }
}
