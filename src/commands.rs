// SPDX-License-Identifier: MIT
//! Subcommand handlers. Each returns the text to print on stdout.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tinto_theme::builtin::{preset, presets};
use tinto_theme::{
    BuildThemeResult, HarmonyStrategy, TextSize, ThemeInput, ThemeOptions, WcagLevel,
    build_theme_tokens_with, calculate_contrast, harmonize_secondary, harmonize_secondary_seeded,
};

use crate::cli::{BuildArgs, Command, OutputFormat};

pub fn handle(command: Command) -> Result<String> {
    match command {
        Command::Build(args) => build(&args),
        Command::Contrast { fg, bg, json } => contrast(&fg, &bg, json),
        Command::Harmonize {
            primary,
            secondary,
            strategy,
            seed,
        } => Ok(harmonize(&primary, &secondary, strategy.into(), seed)),
        Command::Presets => Ok(list_presets()),
    }
}

// ─── build ───────────────────────────────────────────────────────────────────

fn build(args: &BuildArgs) -> Result<String> {
    let mut input = resolve_input(args)?;
    if let Some(name) = &args.name {
        input.name = Some(name.clone());
    }
    let options = resolve_options(args)?;
    tracing::debug!(?input, ?options, "building theme");

    let result = build_theme_tokens_with(&input, &options);
    Ok(match args.format {
        OutputFormat::Css => result.css,
        OutputFormat::Json => {
            let mut json = result.to_json().context("serializing theme")?;
            json.push('\n');
            json
        }
        OutputFormat::Report => report(&result),
    })
}

fn resolve_input(args: &BuildArgs) -> Result<ThemeInput> {
    if let Some(path) = &args.input {
        return read_json(path);
    }
    if let Some(name) = &args.preset {
        return preset(name).with_context(|| {
            let known: Vec<_> = presets().iter().map(|p| p.name).collect();
            format!("unknown preset {name:?} (known: {})", known.join(", "))
        });
    }
    match (&args.primary, &args.secondary) {
        (Some(p), Some(s)) => Ok(ThemeInput::new(p, s)),
        _ => bail!("build needs <PRIMARY> <SECONDARY>, --input or --preset"),
    }
}

fn resolve_options(args: &BuildArgs) -> Result<ThemeOptions> {
    let mut options = match &args.config {
        Some(path) => read_json(path)?,
        None => ThemeOptions::default(),
    };
    if let Some(selector) = &args.selector {
        options.selector.clone_from(selector);
    }
    if let Some(angle) = args.angle {
        options.gradient_angle = angle;
    }
    if args.aaa {
        options.level = WcagLevel::Aaa;
    }
    if args.large_text {
        options.text_size = TextSize::Large;
    }
    Ok(options)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn report(result: &BuildThemeResult) -> String {
    let m = &result.metadata;
    let v = &result.validation;
    let mut out = String::new();
    if let Some(name) = &m.name {
        let _ = writeln!(out, "theme:     {name}");
    }
    let _ = writeln!(out, "primary:   {} -> {}", m.primary_original, m.primary_final);
    let _ = writeln!(out, "secondary: {} -> {}", m.secondary_original, m.secondary_final);
    let _ = writeln!(out, "valid:     {}", if v.is_valid { "yes" } else { "no" });
    section(&mut out, "adjustments", &v.adjustments);
    section(&mut out, "warnings", &v.warnings);
    let _ = writeln!(out, "generated: {}", m.generated_at);
    out
}

fn section(out: &mut String, title: &str, lines: &[String]) {
    let _ = writeln!(out, "{title}:");
    if lines.is_empty() {
        out.push_str("  (none)\n");
    }
    for line in lines {
        let _ = writeln!(out, "  - {line}");
    }
}

// ─── contrast / harmonize / presets ──────────────────────────────────────────

fn contrast(fg: &str, bg: &str, json: bool) -> Result<String> {
    for hex in [fg, bg] {
        tinto_color::normalize_hex(hex).with_context(|| format!("bad color {hex:?}"))?;
    }
    let result = calculate_contrast(fg, bg);
    if json {
        let mut out = serde_json::to_string_pretty(&result).context("serializing contrast")?;
        out.push('\n');
        return Ok(out);
    }
    let mut out = format!("{:.2}:1 {}\n", result.ratio, result.level);
    if let Some(rec) = result.recommendation {
        let _ = writeln!(out, "{rec}");
    }
    Ok(out)
}

fn harmonize(primary: &str, secondary: &str, strategy: HarmonyStrategy, seed: Option<u32>) -> String {
    let hex = match seed {
        Some(seed) => harmonize_secondary_seeded(primary, secondary, strategy, seed),
        None => harmonize_secondary(primary, secondary, strategy),
    };
    format!("{hex}\n")
}

fn list_presets() -> String {
    presets().iter().fold(String::new(), |mut out, p| {
        let _ = writeln!(out, "{:<10} {} {}", p.name, p.primary, p.secondary);
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn run(argv: &[&str]) -> Result<String> {
        let mut full = vec!["tinto"];
        full.extend_from_slice(argv);
        handle(Cli::try_parse_from(full)?.command)
    }

    #[test]
    fn build_prints_css_by_default() {
        let out = run(&["build", "#3b82f6", "#10b981"]).unwrap();
        assert!(out.starts_with(":root {\n"));
        assert!(out.contains("--gradient-brand: linear-gradient(135deg,"));
    }

    #[test]
    fn build_flags_reach_options() {
        let out = run(&["build", "#3b82f6", "#10b981", "--selector", ".x", "--angle", "45"]).unwrap();
        assert!(out.starts_with(".x {\n"));
        assert!(out.contains("linear-gradient(45deg,"));
    }

    #[test]
    fn build_report_for_bad_seed_shows_fallback() {
        let out = run(&["build", "nope", "#10b981", "--format", "report"]).unwrap();
        assert!(out.contains("valid:     no"));
        assert!(out.contains(tinto_theme::builtin::FALLBACK_WARNING));
    }

    #[test]
    fn build_json_is_parseable() {
        let out = run(&["build", "--preset", "forest", "--format", "json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["metadata"]["name"], "forest");
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = run(&["build", "--preset", "neon"]).unwrap_err();
        assert!(err.to_string().contains("unknown preset"));
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let err = run(&["build", "--input", "/nonexistent/theme.json"]).unwrap_err();
        assert!(err.to_string().contains("reading"));
    }

    #[test]
    fn contrast_text_output() {
        let out = run(&["contrast", "#000000", "#ffffff"]).unwrap();
        assert_eq!(out, "21.00:1 AAA\n");
    }

    #[test]
    fn contrast_rejects_bad_color() {
        assert!(run(&["contrast", "#000", "#ffffff"]).is_err());
    }

    #[test]
    fn seeded_harmonize_is_stable() {
        let argv = ["harmonize", "#3b82f6", "#2563eb", "--strategy", "analogous", "--seed", "9"];
        assert_eq!(run(&argv).unwrap(), run(&argv).unwrap());
    }

    #[test]
    fn presets_lists_every_preset() {
        let out = run(&["presets"]).unwrap();
        assert_eq!(out.lines().count(), presets().len());
        assert!(out.starts_with("default"));
    }
}
