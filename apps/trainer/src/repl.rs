//! Line-oriented session host: reads learner commands, drives the session,
//! prints feedback.

use std::{
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use session::{render_svg, report, Action, Outcome, PlotParams, Session, PROBLEM_STATEMENT};
use shared::domain::AngleKind;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    config::ensure_parent_dir_exists,
    display::{coordinate_table, verdict_line, HELP, TITLE},
};

pub const PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Check(AngleKind, f64),
    How,
    Plot(Option<PathBuf>),
    Table,
    New,
    Dorsi,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command '{0}', type 'help' for the list")]
    Unknown(String),
    #[error("'{0}' needs a value in degrees, e.g. '{0} 62.9'")]
    MissingValue(String),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' is not a finite number")]
    NotFinite(String),
    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(String),
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Err(InputError::Unknown(String::new()));
        };
        let command = command.to_ascii_lowercase();
        let argument = parts.next();
        if parts.next().is_some() {
            return Err(InputError::UnexpectedArgument(command));
        }

        let kind = match command.as_str() {
            "leg" => Some(AngleKind::Leg),
            "foot" => Some(AngleKind::Foot),
            "ankle" => Some(AngleKind::Ankle),
            _ => None,
        };
        if let Some(kind) = kind {
            let raw = argument.ok_or_else(|| InputError::MissingValue(command.clone()))?;
            let value = raw
                .trim_end_matches('°')
                .parse::<f64>()
                .map_err(|_| InputError::NotANumber(raw.to_string()))?;
            if !value.is_finite() {
                return Err(InputError::NotFinite(raw.to_string()));
            }
            return Ok(Input::Check(kind, value));
        }

        if command == "plot" {
            return Ok(Input::Plot(argument.map(PathBuf::from)));
        }

        let input = match command.as_str() {
            "how" | "show" => Input::How,
            "table" => Input::Table,
            "new" => Input::New,
            "dorsi" | "dorsiflex" => Input::Dorsi,
            "help" | "?" => Input::Help,
            "quit" | "exit" | "q" => Input::Quit,
            _ => return Err(InputError::Unknown(command)),
        };
        if argument.is_some() {
            return Err(InputError::UnexpectedArgument(command));
        }
        Ok(input)
    }
}

pub struct Repl {
    session: Session,
    plot_path: PathBuf,
    plot_params: PlotParams,
}

impl Repl {
    pub fn new(session: Session, plot_path: PathBuf) -> Self {
        Self {
            session,
            plot_path,
            plot_params: PlotParams::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "{TITLE}\n")?;
        writeln!(out, "Problem Statement\n{PROBLEM_STATEMENT}\n")?;
        self.print_table(out)?;
        writeln!(out, "\nType 'help' for the list of commands.")?;

        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line).context("failed to read input")? == 0 {
                writeln!(out)?;
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Input>() {
                Ok(Input::Quit) => break,
                Ok(command) => self.handle(command, out)?,
                Err(err) => writeln!(out, "{err}")?,
            }
        }

        out.flush()?;
        Ok(())
    }

    fn handle<W: Write>(&mut self, command: Input, out: &mut W) -> anyhow::Result<()> {
        match command {
            Input::Check(kind, estimate) => {
                match self.session.apply(Action::Check { kind, estimate }) {
                    Ok(Outcome::Verdict(verdict)) => writeln!(out, "{}", verdict_line(&verdict))?,
                    Ok(other) => warn!(?other, "unexpected outcome for answer check"),
                    Err(err) => writeln!(out, "{}", err.message)?,
                }
            }
            Input::How => {
                if let Outcome::Explanation(explanation) = self.session.apply(Action::Reveal)? {
                    write!(out, "\n{explanation}")?;
                }
                let path = self.plot_path.clone();
                self.write_plot(&path, out)?;
            }
            Input::Plot(path) => {
                if !self.session.state().is_revealed() {
                    writeln!(out, "Use 'how' to reveal the explanation before plotting.")?;
                    return Ok(());
                }
                let path = path.unwrap_or_else(|| self.plot_path.clone());
                self.write_plot(&path, out)?;
            }
            Input::Table => self.print_table(out)?,
            Input::New => {
                self.session.apply(Action::NewProblem)?;
                writeln!(out, "\nNew problem.")?;
                self.print_table(out)?;
            }
            Input::Dorsi => {
                self.session.apply(Action::Dorsiflex)?;
                writeln!(out, "\nSame leg, ankle now dorsiflexed.")?;
                self.print_table(out)?;
            }
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Quit => {}
        }
        Ok(())
    }

    fn print_table<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let view = report(self.session.problem(), false);
        write!(out, "{}", coordinate_table(&view.coordinates))?;
        Ok(())
    }

    fn write_plot<W: Write>(&self, path: &Path, out: &mut W) -> anyhow::Result<()> {
        let svg = render_svg(self.session.problem(), &self.plot_params);
        let written = ensure_parent_dir_exists(path).and_then(|()| {
            fs::write(path, svg)
                .with_context(|| format!("failed to write plot '{}'", path.display()))
        });

        match written {
            Ok(()) => {
                info!(path = %path.display(), "segment plot written");
                writeln!(out, "\nSegment plot written to {}", path.display())?;
            }
            Err(err) => {
                warn!(error = %format!("{err:#}"), "segment plot not written");
                writeln!(out, "\nCould not write segment plot: {err:#}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/repl_tests.rs"]
mod tests;
