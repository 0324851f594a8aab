//! Interactive exam session: one command per line until the paper is handed
//! in or the student quits.
//!
//! | Command | Effect |
//! |---------|--------|
//! | `n` | submit the current answer and move on (hands in on the last question) |
//! | `p` | previous question |
//! | `g N` | jump to question `N` (1-based) |
//! | `a TEXT` | set the current answer |
//! | `s` | hand in every answer at once through the exam form |
//! | `ask TEXT` | ask the AI helper |
//! | `h` | help |
//! | `q` | quit without handing in |

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::io::{BufRead, Write};

use navigator::api::ExamApi;
use navigator::assistant::AiSession;
use navigator::nav::{Advance, NavError, Navigator, NavigatorConfig};
use navigator::paper::ExamPaper;
use navigator::state::NavigationState;
use navigator::surface::Surface;
use tracing::debug;

use crate::error::CliError;
use crate::terminal::{TerminalSurface, apply_entry};

const HELP: &str = "commands: n next | p previous | g N go to | a TEXT answer | s submit all | ask TEXT | h help | q quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Goto(usize),
    Answer(String),
    SubmitAll,
    Ask(String),
    Help,
    Quit,
}

impl Command {
    /// # Errors
    ///
    /// Returns a usage message for unknown commands or a bad `g` index.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).map_or((line, ""), |(w, r)| (w, r.trim()));
        match word {
            "n" | "next" => Ok(Self::Next),
            "p" | "prev" => Ok(Self::Prev),
            "g" | "go" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(Self::Goto(n - 1)),
                _ => Err(format!("usage: g N (1-based), got `{rest}`")),
            },
            "a" | "answer" => Ok(Self::Answer(rest.to_owned())),
            "s" | "submit" => Ok(Self::SubmitAll),
            "ask" => Ok(Self::Ask(rest.to_owned())),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command `{other}`; type h for help")),
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The server accepted the completed paper.
    Completed,
    /// The answer sheet is ready to post through the exam form.
    FormSubmitted(String),
    /// The student left before handing in.
    Quit,
}

pub struct Session<A, R, W> {
    navigator: Navigator<A, TerminalSurface<R, W>>,
    paper: ExamPaper,
    state: NavigationState,
    ai: AiSession,
}

impl<A: ExamApi, R: BufRead, W: Write> Session<A, R, W> {
    pub fn new(
        api: A,
        surface: TerminalSurface<R, W>,
        paper: ExamPaper,
        config: NavigatorConfig,
        ai_remaining: Option<u32>,
    ) -> Self {
        let navigator = Navigator::with_config(api, surface, config);
        let state = navigator.initialize(&paper);
        let ai = AiSession::new(Some(paper.id.clone()), ai_remaining);
        Self { navigator, paper, state, ai }
    }

    #[must_use]
    pub fn paper(&self) -> &ExamPaper {
        &self.paper
    }

    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    #[must_use]
    pub fn surface(&self) -> &TerminalSurface<R, W> {
        self.navigator.surface()
    }

    /// Read and execute commands until the session ends.
    ///
    /// # Errors
    ///
    /// Only terminal i/o failures end the loop with an error; navigation
    /// failures have already been shown to the student.
    pub async fn run(&mut self) -> Result<Outcome, CliError> {
        let surface = self.navigator.surface();
        if self.state.is_empty() {
            surface.print_screen(&self.paper)?;
            return Ok(Outcome::Quit);
        }
        if !self.paper.title.is_empty() {
            surface.write_line(&self.paper.title)?;
        }
        surface.write_line(HELP)?;
        surface.print_screen(&self.paper)?;

        loop {
            let Some(line) = self.navigator.surface().read_line("> ")? else {
                return Ok(Outcome::Quit);
            };
            if line.is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Ok(command) => {
                    if let Some(outcome) = self.execute(command).await? {
                        return Ok(outcome);
                    }
                }
                Err(usage) => self.navigator.surface().write_line(&usage)?,
            }
        }
    }

    /// Execute one command. `Some` ends the session.
    ///
    /// # Errors
    ///
    /// Returns terminal i/o failures.
    pub async fn execute(&mut self, command: Command) -> Result<Option<Outcome>, CliError> {
        let surface = self.navigator.surface();
        match command {
            Command::Next => match self.navigator.advance(&self.paper, &mut self.state).await {
                Ok(Advance::Moved(_)) => surface.print_screen(&self.paper)?,
                Ok(Advance::Completed) => {
                    if let Some((_, sheet)) = surface.take_pending_form() {
                        return Ok(Some(Outcome::FormSubmitted(sheet)));
                    }
                    return Ok(Some(Outcome::Completed));
                }
                Ok(Advance::Stayed) => {}
                Err(e) => debug!(error = %e, "advance did not move"),
            },
            Command::Prev => match self.navigator.retreat(&self.paper, &mut self.state) {
                Ok(Some(_)) => surface.print_screen(&self.paper)?,
                Ok(None) => surface.write_line("already at the first question")?,
                Err(e) => debug!(error = %e, "retreat ignored"),
            },
            Command::Goto(index) => match self.navigator.switch_to(&self.paper, &mut self.state, index) {
                Ok(()) => surface.print_screen(&self.paper)?,
                Err(NavError::InvalidIndex { total, .. }) => {
                    surface.write_line(&format!("pick a question between 1 and {total}"))?;
                }
                Err(e) => surface.notify(&e.to_string()),
            },
            Command::Answer(raw) => {
                let Some(question) = self.paper.question_mut(self.state.current()) else {
                    return Ok(None);
                };
                match apply_entry(&mut question.input, &raw) {
                    Ok(()) => surface.print_screen(&self.paper)?,
                    Err(e) => surface.notify(&e.to_string()),
                }
            }
            Command::SubmitAll => {
                if self.state.is_completed() {
                    surface.notify(&NavError::Completed.to_string());
                } else if let Some(sheet) = self.navigator.confirm_bulk_submit(&self.paper)? {
                    return Ok(Some(Outcome::FormSubmitted(sheet)));
                }
            }
            Command::Ask(prompt) => {
                let reply = match self.ai.ask(self.navigator.api(), &prompt).await {
                    Ok(answer) => answer,
                    Err(e) => e.user_message(),
                };
                surface.write_line(&format!("AI: {reply}"))?;
                if let Some(remaining) = self.ai.remaining() {
                    surface.write_line(&format!("({remaining} AI questions left)"))?;
                }
            }
            Command::Help => surface.write_line(HELP)?,
            Command::Quit => return Ok(Some(Outcome::Quit)),
        }
        Ok(None)
    }
}
