//! Line-driven viewer session.
//!
//! Every user action of the viewer has a command: set or load a side's text,
//! compare, clear, copy, toggle a node, switch theme. The screen is printed
//! after each command that changes what is shown.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use jtc_session::{Side, Viewer};

use crate::commands::format_summary;

const HELP: &str = "\
commands:
  left <json>              set the left input (rest of the line)
  right <json>             set the right input
  load <side> <file>       read a side's input from a file
  compare                  decode both inputs and compare them
  clear <side>             empty one side
  copy <side>              copy one side's raw text to the clipboard
  toggle <side> <pointer>  expand or collapse a node, e.g. toggle left /a/0
  expand                   expand every node
  collapse                 collapse every node
  theme                    switch between light and dark
  show                     print the screen
  summary                  print mismatch counts
  legend                   print the color legend
  help                     this text
  quit                     leave the session";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplCommand {
    SetText { side: Side, text: String },
    Load { side: Side, path: PathBuf },
    Compare,
    Clear(Side),
    Copy(Side),
    Toggle { side: Side, pointer: String },
    ExpandAll,
    CollapseAll,
    Theme,
    Show,
    Summary,
    Legend,
    Help,
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<ReplCommand>> {
    let line = line.trim_start();
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line.trim_end(), ""),
    };

    let side_arg = |text: &str| -> anyhow::Result<Side> {
        if text.is_empty() {
            bail!("{verb}: expected a side (left or right)");
        }
        Ok(text.parse::<Side>()?)
    };

    let cmd = match verb.to_ascii_lowercase().as_str() {
        "left" => ReplCommand::SetText { side: Side::Left, text: rest.to_string() },
        "right" => ReplCommand::SetText { side: Side::Right, text: rest.to_string() },
        "load" => {
            let (side, path) = rest
                .split_once(char::is_whitespace)
                .context("load: expected <side> <file>")?;
            ReplCommand::Load { side: side_arg(side)?, path: PathBuf::from(path.trim()) }
        }
        "compare" => ReplCommand::Compare,
        "clear" => ReplCommand::Clear(side_arg(rest)?),
        "copy" => ReplCommand::Copy(side_arg(rest)?),
        "toggle" => {
            let (side, pointer) = match rest.split_once(char::is_whitespace) {
                Some((side, pointer)) => (side, pointer.trim()),
                None => (rest, ""),
            };
            // A bare "/" means the root node here, not the empty-named key.
            let pointer = if pointer == "/" { "" } else { pointer };
            ReplCommand::Toggle { side: side_arg(side)?, pointer: pointer.to_string() }
        }
        "expand" => ReplCommand::ExpandAll,
        "collapse" => ReplCommand::CollapseAll,
        "theme" => ReplCommand::Theme,
        "show" => ReplCommand::Show,
        "summary" => ReplCommand::Summary,
        "legend" => ReplCommand::Legend,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        other => bail!("unknown command: {other} (try help)"),
    };
    Ok(Some(cmd))
}

/// Whether the session should keep reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    viewer: Viewer,
    use_color: bool,
}

impl Session {
    pub fn new(viewer: Viewer, use_color: bool) -> Self {
        Self { viewer, use_color }
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Read commands until `quit` or end of input. Command errors are
    /// reported and the session goes on.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut out: W,
        prompt: bool,
    ) -> anyhow::Result<()> {
        if prompt {
            writeln!(out, "jtc interactive session; type help for commands")?;
        }
        let mut line = String::new();
        loop {
            if prompt {
                write!(out, "jtc> ")?;
                out.flush()?;
            }
            line.clear();
            if input.read_line(&mut line).context("reading command")? == 0 {
                break;
            }
            let flow = match parse_line(&line) {
                Ok(Some(cmd)) => self.handle(cmd, &mut out),
                Ok(None) => Ok(Flow::Continue),
                Err(e) => Err(e),
            };
            match flow {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(out, "error: {e:#}")?,
            }
        }
        Ok(())
    }

    fn print_screen<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        write!(out, "{}", self.viewer.render(self.use_color))?;
        Ok(())
    }

    pub fn handle<W: Write>(&mut self, cmd: ReplCommand, out: &mut W) -> anyhow::Result<Flow> {
        match cmd {
            ReplCommand::SetText { side, text } => self.viewer.set_text(side, text),
            ReplCommand::Load { side, path } => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                self.viewer.set_text(side, text);
            }
            ReplCommand::Compare => {
                // The banner on screen is the report; the error needs no echo.
                let _ = self.viewer.compare();
                self.print_screen(out)?;
            }
            ReplCommand::Clear(side) => {
                self.viewer.clear(side);
                self.print_screen(out)?;
            }
            ReplCommand::Copy(side) => self.viewer.copy(side),
            ReplCommand::Toggle { side, pointer } => {
                self.viewer.toggle_pointer(side, &pointer)?;
                self.print_screen(out)?;
            }
            ReplCommand::ExpandAll => {
                self.viewer.expand_all();
                self.print_screen(out)?;
            }
            ReplCommand::CollapseAll => {
                self.viewer.collapse_all();
                self.print_screen(out)?;
            }
            ReplCommand::Theme => {
                let theme = self.viewer.toggle_theme();
                writeln!(out, "theme: {theme}")?;
                self.print_screen(out)?;
            }
            ReplCommand::Show => self.print_screen(out)?,
            ReplCommand::Summary => match self.viewer.summary() {
                Some(summary) => writeln!(out, "{}", format_summary(&summary))?,
                None => writeln!(out, "nothing compared")?,
            },
            ReplCommand::Legend => {
                let painter = self.viewer.painter(self.use_color);
                for line in jtc_render::legend_lines(&painter) {
                    writeln!(out, "{line}")?;
                }
            }
            ReplCommand::Help => writeln!(out, "{HELP}")?,
            ReplCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
