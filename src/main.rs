//! Anchor Layout CLI
//!
//! Usage:
//!   anchor-layout [OPTIONS] [FILE]
//!
//! Options:
//!   --viewport <WxH>       Container size used on unbounded axes
//!   -f, --format <FORMAT>  Output format: text or toml
//!   -v, --verbose          Log more (repeat for trace output)
//!   --strict               Exit with status 2 when the pass reported problems
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use anchor_layout::{ItemFrame, LayoutConfig, LayoutOutcome, Scene, Size};

#[derive(Parser)]
#[command(name = "anchor-layout")]
#[command(about = "Resolve anchor-based relative layouts described in TOML")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Container size used on axes without a bounded max, e.g. 720x1280
    #[arg(long, value_parser = parse_viewport)]
    viewport: Option<Size>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Exit with status 2 when any diagnostic was reported
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Toml,
}

fn parse_viewport(value: &str) -> Result<Size, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| format!("invalid viewport dimension '{s}'"))
    };
    Ok(Size::new(parse(width)?, parse(height)?))
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.input.is_none() && io::stdin().is_terminal() {
        let _ = Cli::command().print_help();
        std::process::exit(1);
    }

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut scene = match Scene::from_str(&source) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut config = LayoutConfig::new();
    if let Some(viewport) = cli.viewport {
        config = config.with_viewport(viewport.width, viewport.height);
    }
    let outcome = scene.layout(&config);

    match cli.format {
        Format::Text => print!("{}", render_text(&outcome)),
        Format::Toml => match render_toml(&outcome) {
            Ok(out) => print!("{}", out),
            Err(e) => {
                eprintln!("Error writing TOML: {}", e);
                std::process::exit(1);
            }
        },
    }

    let status = exit_status(&outcome, cli.strict);
    if status != 0 {
        std::process::exit(status);
    }
}

/// 2 when `--strict` is set and the pass reported anything, else 0
fn exit_status(outcome: &LayoutOutcome, strict: bool) -> i32 {
    if strict && !outcome.is_clean() {
        2
    } else {
        0
    }
}

fn render_text(outcome: &LayoutOutcome) -> String {
    let width = outcome
        .frames
        .iter()
        .map(|f| f.name.len())
        .max()
        .unwrap_or(0);
    let mut out = format!("container {}\n", outcome.container_size);
    for frame in &outcome.frames {
        out.push_str(&format!(
            "{:<width$}  {} at {}\n",
            frame.name, frame.size, frame.position
        ));
    }
    out
}

fn render_toml(outcome: &LayoutOutcome) -> Result<String, toml::ser::Error> {
    toml::to_string(&Report::from(outcome))
}

/// TOML form of a layout outcome
#[derive(Serialize)]
struct Report<'a> {
    degenerate: bool,
    diagnostics: Vec<String>,
    container: Size,
    frames: &'a [ItemFrame],
}

impl<'a> From<&'a LayoutOutcome> for Report<'a> {
    fn from(outcome: &'a LayoutOutcome) -> Self {
        Self {
            degenerate: outcome.degenerate,
            diagnostics: outcome.diagnostics.iter().map(|d| d.to_string()).collect(),
            container: outcome.container_size,
            frames: &outcome.frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCENE: &str = r#"
        [container]
        width = 2000.0
        height = 1000.0

        [[items]]
        id = "a"
        width = 200.0
        height = 200.0
        rules.middle = { anchor = "__container__", align = "center" }
        rules.center = { anchor = "__container__", align = "center" }

        [[items]]
        width = 10.0
        height = 10.0
        rules.left = { anchor = "ghost", align = "start" }
    "#;

    fn outcome() -> LayoutOutcome {
        anchor_layout::resolve_scene(SCENE).unwrap()
    }

    #[test]
    fn test_parse_viewport_accepts_either_separator() {
        assert_eq!(parse_viewport("720x1280"), Ok(Size::new(720.0, 1280.0)));
        assert_eq!(parse_viewport("1920X1080"), Ok(Size::new(1920.0, 1080.0)));
        assert_eq!(parse_viewport(" 10.5 x 0 "), Ok(Size::new(10.5, 0.0)));
    }

    #[test]
    fn test_parse_viewport_rejects_bad_input() {
        assert_eq!(
            parse_viewport("720"),
            Err("expected WIDTHxHEIGHT, got '720'".to_string())
        );
        assert_eq!(
            parse_viewport("-1x10"),
            Err("invalid viewport dimension '-1'".to_string())
        );
        assert!(parse_viewport("10xinf").is_err());
        assert!(parse_viewport("NaNx10").is_err());
        assert!(parse_viewport("widexhigh").is_err());
    }

    #[test]
    fn test_render_text() {
        insta::assert_snapshot!(render_text(&outcome()), @r"
        container 2000x1000
        a          200x200 at (900, 400)
        <item #2>  10x10 at (0, 0)
        ");
    }

    #[test]
    fn test_render_toml_report() {
        let out = render_toml(&outcome()).unwrap();
        let value: toml::Value = toml::from_str(&out).unwrap();

        assert_eq!(value["degenerate"].as_bool(), Some(false));
        assert_eq!(
            value["diagnostics"][0].as_str(),
            Some("anchor 'ghost' of component <item #2> is not found, will be ignored")
        );
        assert_eq!(value["container"]["width"].as_float(), Some(2000.0));
        let frames = value["frames"].as_array().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0]["name"].as_str(), Some("a"));
        assert_eq!(frames[0]["position"]["x"].as_float(), Some(900.0));
        assert_eq!(frames[0]["position"]["y"].as_float(), Some(400.0));
        assert_eq!(frames[1]["size"]["height"].as_float(), Some(10.0));
    }

    #[test]
    fn test_exit_status() {
        let degraded = outcome();
        assert_eq!(exit_status(&degraded, true), 2);
        assert_eq!(exit_status(&degraded, false), 0);

        let clean =
            anchor_layout::resolve_scene("[[items]]\nwidth = 1.0\nheight = 1.0\n").unwrap();
        assert_eq!(exit_status(&clean, true), 0);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "anchor-layout",
            "scene.toml",
            "--viewport",
            "100x50",
            "--format",
            "toml",
            "-vv",
            "--strict",
        ])
        .unwrap();
        assert_eq!(cli.viewport, Some(Size::new(100.0, 50.0)));
        assert!(matches!(cli.format, Format::Toml));
        assert_eq!(cli.verbose, 2);
        assert!(cli.strict);

        assert!(Cli::try_parse_from(["anchor-layout", "--viewport", "100"]).is_err());
        assert!(Cli::try_parse_from(["anchor-layout", "--format", "svg"]).is_err());
    }
}
