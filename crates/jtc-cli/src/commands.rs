use std::io::{self, IsTerminal, Read};

use anyhow::{bail, Context};
use colored::Colorize;
use jtc_diff::DiffSummary;
use jtc_render::{legend_lines, Painter};
use jtc_session::{Osc52Clipboard, Side, Viewer, ViewerConfig};

use crate::cli::*;
use crate::repl::Session;

/// Effective settings after merging the config file with global flags.
pub struct Settings {
    pub config: ViewerConfig,
    pub use_color: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => ViewerConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ViewerConfig::default(),
        };
        if let Some(theme) = cli.theme {
            config.theme = theme;
        }
        if let Some(color) = cli.color {
            config.color = color;
        }
        let use_color = config.color.enabled(io::stdout().is_terminal());
        colored::control::set_override(use_color);
        Ok(Self { config, use_color })
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::resolve(&cli)?;
    match cli.command {
        Command::Compare(args) => cmd_compare(settings, args, &cli.format),
        Command::Legend => cmd_legend(&settings),
        Command::Interactive(args) => cmd_interactive(settings, args),
    }
}

fn read_input(arg: &str) -> anyhow::Result<String> {
    if arg == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(arg).with_context(|| format!("reading {arg}"))
}

fn cmd_compare(settings: Settings, args: CompareArgs, format: &OutputFormat) -> anyhow::Result<()> {
    if args.left == "-" && args.right == "-" {
        bail!("only one side can be read from stdin");
    }

    let mut config = settings.config;
    if let Some(depth) = args.depth {
        config.expand_depth = depth;
    }
    let mut viewer = Viewer::headless(config);
    viewer.set_text(Side::Left, read_input(&args.left)?);
    viewer.set_text(Side::Right, read_input(&args.right)?);

    if let Err(err) = viewer.compare() {
        if let jtc_session::SessionError::InvalidJson { side, .. } = &err {
            eprintln!("{} {} input is not valid JSON", "✗".red().bold(), side.to_string().bold());
        }
        return Err(err.into());
    }
    if args.expand_all {
        viewer.expand_all();
    }

    match format {
        OutputFormat::Json => {
            let comparison = viewer
                .comparison()
                .context("comparison unavailable after compare")?;
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        }
        OutputFormat::Text => {
            let painter = viewer.painter(settings.use_color);
            let screen = viewer.result_screen().with_legend();
            print!("{}", screen.render(&painter, viewer.config().pane_width));
            if let Some(summary) = viewer.summary() {
                println!();
                println!("{}", format_summary(&summary));
            }
        }
    }
    Ok(())
}

fn cmd_legend(settings: &Settings) -> anyhow::Result<()> {
    let painter = Painter::new(settings.config.theme, settings.use_color);
    for line in legend_lines(&painter) {
        println!("{line}");
    }
    Ok(())
}

fn cmd_interactive(settings: Settings, args: InteractiveArgs) -> anyhow::Result<()> {
    let clipboard = Osc52Clipboard::new(io::stdout());
    let mut viewer = Viewer::new(settings.config, Box::new(clipboard));
    for (side, path) in [(Side::Left, args.left), (Side::Right, args.right)] {
        if let Some(path) = path {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            viewer.set_text(side, text);
        }
    }

    let prompt = io::stdin().is_terminal();
    let mut session = Session::new(viewer, settings.use_color);
    session.run(io::stdin().lock(), io::stdout().lock(), prompt)
}

/// One-line mismatch count for both sides.
pub fn format_summary(summary: &DiffSummary) -> String {
    if summary.is_identical() {
        return format!("{} documents match", "✓".green().bold());
    }
    let side = |s: Side| {
        let counts = summary.side(s);
        format!(
            "{}: {} differing keys, {} differing values",
            s,
            counts.differing_keys,
            counts.differing_values
        )
    };
    format!("{} {}; {}", "≠".yellow().bold(), side(Side::Left), side(Side::Right))
}
