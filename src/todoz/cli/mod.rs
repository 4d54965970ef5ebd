//! Interactive session: read a line, dispatch it, print the result, repeat.
//!
//! The session is generic over its input and output so tests can script it
//! with in-memory buffers. It owns the page state and is the only place that
//! decides when the program stops.

mod print;

use print::{print_messages, print_todos};
use std::io::{BufRead, Write};
use todoz::api::TodozApi;
use todoz::commands::{CmdMessage, CmdResult};
use todoz::error::Result;
use todoz::pagination::{PageMove, PageState};
use todoz::parser::Action;
use todoz::store::DataStore;
use tracing::{debug, error};

const WELCOME: &str = "Welcome to our ToDo app.";
const WAITING: &str = "Waiting for your next action. Type \"help\" to see available commands.";
const INVALID: &str = "Not a valid action";
const NEW_PROMPT: &str = "Write your todo. Press enter when done.";

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<S: DataStore, R: BufRead, W: Write> {
    api: TodozApi<S>,
    page: PageState,
    input: R,
    out: W,
}

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(api: TodozApi<S>, input: R, out: W) -> Self {
        Self {
            api,
            page: PageState::Unset,
            input,
            out,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{}", WELCOME)?;
        let help = self.api.help();
        self.show(&help)?;

        while let Some(line) = self.read_line()? {
            if self.dispatch(&line)? == Flow::Exit {
                break;
            }
            writeln!(self.out, "{}\n", WAITING)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Handles one input line. Only I/O errors on the session's own streams are returned;
    /// a failed save is reported to the user and the session goes on.
    pub fn dispatch(&mut self, line: &str) -> Result<Flow> {
        let parsed = self.api.parse(line);
        debug!(?parsed, "dispatching");

        let Some(action) = parsed.action else {
            self.show(&CmdResult::default().with_message(CmdMessage::error(INVALID)))?;
            return Ok(Flow::Continue);
        };

        let outcome = match action {
            Action::List => Ok(self.turn_page(PageMove::Start)),
            Action::Next => Ok(self.turn_page(PageMove::Next)),
            Action::Prev => Ok(self.turn_page(PageMove::Prev)),
            Action::Help => Ok(self.api.help()),
            Action::Exit => return Ok(Flow::Exit),
            Action::New => {
                writeln!(self.out, "{}", NEW_PROMPT)?;
                self.out.flush()?;
                match self.read_line()? {
                    Some(text) => self.api.create(&text),
                    None => return Ok(Flow::Exit),
                }
            }
            item => match self.api.apply(item, parsed.target) {
                Some(outcome) => outcome,
                None => return Ok(Flow::Continue),
            },
        };

        match outcome {
            Ok(result) => self.show(&result)?,
            Err(e) => {
                error!(error = %e, %action, "could not save todos");
                let message = CmdMessage::error(format!("Could not save todos: {}", e));
                self.show(&CmdResult::default().with_message(message))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn turn_page(&mut self, mv: PageMove) -> CmdResult {
        let (page, result) = self.api.list(self.page, mv);
        self.page = page;
        result
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        print_todos(&mut self.out, &result.listed_todos)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
