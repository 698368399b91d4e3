//! Interactive terminal session for the prediction form.
//!
//! Reads one command per line and keeps accepting input while a prediction
//! is in flight, so fields can still be edited and the request cancelled.

use std::{fmt, io::Write, str::FromStr};

use price_core::PricePredictor;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::{
    controller::FormController,
    models::{Field, UnknownField},
    render::{TITLE, render_form, render_status},
};

const HELP: &str = "\
Commands:
  set <field> <value>   change a field (company, year, km_driven, fuel)
  show                  print the form and the last outcome
  submit                request a price prediction
  cancel                abandon the prediction in progress
  help                  print this message
  quit                  leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Show,
    Submit,
    Cancel,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}'; type 'help' for a list")]
    Unknown(String),

    #[error("usage: set <field> <value>")]
    MissingField,

    #[error(transparent)]
    Field(#[from] UnknownField),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match verb.to_ascii_lowercase().as_str() {
            "set" => {
                let rest = rest.trim();
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(CommandError::MissingField);
                }
                Ok(Command::Set(field.parse()?, value.trim().to_string()))
            }
            "show" => Ok(Command::Show),
            "submit" | "predict" => Ok(Command::Submit),
            "cancel" => Ok(Command::Cancel),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session<'a, W> {
    controller: FormController,
    predictor: &'a dyn PricePredictor,
    out: W,
}

impl<'a, W: Write> Session<'a, W> {
    pub fn new(
        controller: FormController,
        predictor: &'a dyn PricePredictor,
        out: W,
    ) -> Self {
        Self {
            controller,
            predictor,
            out,
        }
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until `quit` or end of input.
    ///
    /// If input ends while a prediction is in flight, the prediction is
    /// awaited and its outcome printed before returning.
    pub async fn run<R>(
        &mut self,
        input: R,
    ) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        writeln!(self.out, "{TITLE}\n\n{}\n\n{HELP}", render_form(self.controller.draft()))?;

        let mut lines = input.lines();
        loop {
            self.prompt()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            let command = match self.read_command(&line)? {
                Some(command) => command,
                None => continue,
            };
            let flow = match command {
                Command::Submit => self.submit_and_wait(&mut lines).await?,
                Command::Quit => Flow::Quit,
                other => self.apply(other)?,
            };
            if flow == Flow::Quit {
                break;
            }
        }
        self.out.flush()
    }

    fn prompt(&mut self) -> std::io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    /// Parses a line, reporting bad commands to the user. Blank lines yield `None`.
    fn read_command(
        &mut self,
        line: &str,
    ) -> std::io::Result<Option<Command>> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        match line.parse() {
            Ok(command) => Ok(Some(command)),
            Err(e) => {
                self.say(e)?;
                Ok(None)
            }
        }
    }

    /// Handles commands that never start a request.
    fn apply(
        &mut self,
        command: Command,
    ) -> std::io::Result<Flow> {
        match command {
            Command::Set(field, value) => {
                self.controller.update_field(field, value);
                let echo = format!("{} = {}", field.name(), self.controller.draft().get(field));
                self.say(echo)?;
            }
            Command::Show => {
                let text = format!(
                    "{}\n\n{}",
                    render_form(self.controller.draft()),
                    render_status(&self.controller)
                );
                self.say(text)?;
            }
            Command::Cancel => {
                if !self.controller.cancel() {
                    self.say("Nothing to cancel.")?;
                }
            }
            Command::Help => self.say(HELP)?,
            Command::Submit | Command::Quit => {}
        }
        Ok(Flow::Continue)
    }

    async fn submit_and_wait<R>(
        &mut self,
        lines: &mut Lines<R>,
    ) -> std::io::Result<Flow>
    where
        R: AsyncBufRead + Unpin,
    {
        let submission = match self.controller.begin_submit() {
            Ok(submission) => submission,
            Err(rejected) => {
                self.say(rejected)?;
                return Ok(Flow::Continue);
            }
        };
        self.say(render_status(&self.controller))?;

        let predictor = self.predictor;
        let prediction = predictor.predict(&submission.request);
        tokio::pin!(prediction);

        let mut input_open = true;
        loop {
            tokio::select! {
                biased;

                result = &mut prediction => {
                    self.controller.complete(submission.id, result);
                    self.say(render_status(&self.controller))?;
                    return Ok(Flow::Continue);
                }

                line = lines.next_line(), if input_open => {
                    let Some(line) = line? else {
                        input_open = false;
                        continue;
                    };
                    match self.read_command(&line)? {
                        Some(Command::Cancel) => {
                            self.controller.cancel();
                            self.say("Prediction cancelled.")?;
                            return Ok(Flow::Continue);
                        }
                        Some(Command::Quit) => {
                            self.controller.cancel();
                            return Ok(Flow::Quit);
                        }
                        Some(Command::Submit) => {
                            // Pending, so the guard always rejects here.
                            if let Err(rejected) = self.controller.begin_submit() {
                                self.say(rejected)?;
                            }
                        }
                        Some(other) => {
                            self.apply(other)?;
                        }
                        None => {}
                    }
                }
            }
        }
    }

    fn say(
        &mut self,
        message: impl fmt::Display,
    ) -> std::io::Result<()> {
        writeln!(self.out, "{message}")
    }
}
