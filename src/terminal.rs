//! Line-oriented [`Surface`] over any reader/writer pair.
//!
//! The terminal has no DOM, so "showing" a question only records which one
//! is visible and [`TerminalSurface::print_screen`] draws it on demand.
//! Notices go to the writer; confirmations read a `y`/`n` line.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::cell::{Cell, RefCell};
use std::io::{self, BufRead, Write};

use navigator::answer::{FALSE_VALUE, TRUE_VALUE};
use navigator::paper::{AnswerInput, Choice, ExamPaper, PaperId};
use navigator::surface::Surface;
use navigator::view::NavView;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("no option matches `{0}`")]
    UnknownOption(String),
    #[error("single-choice questions take one option")]
    TooManyOptions,
    #[error("expected true or false, got `{0}`")]
    NotTruth(String),
}

pub struct TerminalSurface<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
    assume_yes: bool,
    visible: Cell<Option<usize>>,
    view: RefCell<Option<NavView>>,
    submitting: Cell<bool>,
    reloaded: Cell<bool>,
    pending_form: RefCell<Option<(PaperId, String)>>,
}

impl<R: BufRead, W: Write> TerminalSurface<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
            assume_yes: false,
            visible: Cell::new(None),
            view: RefCell::new(None),
            submitting: Cell::new(false),
            reloaded: Cell::new(false),
            pending_form: RefCell::new(None),
        }
    }

    /// Answer every confirmation with yes without reading input.
    #[must_use]
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    #[must_use]
    pub fn visible(&self) -> Option<usize> {
        self.visible.get()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Whether the server asked for a reload (the paper was handed in).
    #[must_use]
    pub fn was_reloaded(&self) -> bool {
        self.reloaded.get()
    }

    /// The answer sheet handed over for native form submission, if any.
    pub fn take_pending_form(&self) -> Option<(PaperId, String)> {
        self.pending_form.borrow_mut().take()
    }

    /// Read one trimmed line after printing `prompt`. `None` at end of input.
    ///
    /// # Errors
    ///
    /// Propagates reader and writer failures.
    pub fn read_line(&self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = self.output.borrow_mut();
            write!(out, "{prompt}")?;
            out.flush()?;
        }
        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// # Errors
    ///
    /// Propagates writer failures.
    pub fn write_line(&self, text: &str) -> io::Result<()> {
        writeln!(self.output.borrow_mut(), "{text}")
    }

    /// Draw the visible question of `paper` and the navigation line.
    ///
    /// # Errors
    ///
    /// Propagates writer failures.
    pub fn print_screen(&self, paper: &ExamPaper) -> io::Result<()> {
        let mut out = self.output.borrow_mut();
        if let Some(question) = self.visible.get().and_then(|i| paper.question(i)) {
            writeln!(out)?;
            if !question.prompt.is_empty() {
                writeln!(out, "{}", question.prompt)?;
            }
            write_input(&mut *out, &question.input)?;
        }
        if let Some(view) = self.view.borrow().as_ref() {
            writeln!(out, "{}", nav_line(view))?;
        }
        Ok(())
    }

    fn emit(&self, text: &str) {
        if let Err(e) = self.write_line(text) {
            warn!(error = %e, "terminal write failed");
        }
    }
}

impl<R> TerminalSurface<R, Vec<u8>> {
    /// Everything written so far, for in-memory surfaces.
    #[must_use]
    pub fn transcript(&self) -> String {
        String::from_utf8_lossy(&self.output.borrow()).into_owned()
    }
}

impl<R: BufRead, W: Write> Surface for TerminalSurface<R, W> {
    fn show_question(&self, index: Option<usize>) {
        self.visible.set(index);
    }

    fn render_nav(&self, view: &NavView) {
        *self.view.borrow_mut() = Some(view.clone());
    }

    fn set_submitting(&self, submitting: bool) {
        self.submitting.set(submitting);
        if submitting {
            self.emit("Submitting…");
        }
    }

    fn notify(&self, message: &str) {
        self.emit(&format!("! {message}"));
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            self.emit(&format!("? {message} [y/N] y"));
            return true;
        }
        match self.read_line(&format!("? {message} [y/N] ")) {
            Ok(Some(line)) => matches!(line.to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "terminal read failed");
                false
            }
        }
    }

    fn reload(&self) {
        self.reloaded.set(true);
    }

    fn submit_form(&self, paper_id: &PaperId, answers_json: &str) -> bool {
        *self.pending_form.borrow_mut() = Some((paper_id.clone(), answers_json.to_owned()));
        true
    }
}

/// One-line rendering of the navigation controls.
#[must_use]
pub fn nav_line(view: &NavView) -> String {
    let prev = if view.prev_enabled { "[p] Previous" } else { "   Previous" };
    let next = if view.next_enabled { format!("[n] {}", view.next_label) } else { format!("   {}", view.next_label) };
    format!("{prev} | {} | {next}", view.label)
}

/// Apply a typed entry to a question's input.
///
/// Choice questions take 1-based option numbers or option values/labels,
/// comma-separated for multiple choice. A blank entry clears the question.
///
/// # Errors
///
/// Leaves `input` unchanged when the entry does not fit the question.
pub fn apply_entry(input: &mut AnswerInput, raw: &str) -> Result<(), EntryError> {
    let raw = raw.trim();
    if raw.is_empty() {
        input.clear();
        return Ok(());
    }

    match &*input {
        AnswerInput::SingleChoice { options, .. } => {
            let mut picks = resolve_options(options, raw)?;
            if picks.len() != 1 {
                return Err(EntryError::TooManyOptions);
            }
            input.select(picks.remove(0));
        }
        AnswerInput::MultipleChoice { options, .. } => {
            let picks = resolve_options(options, raw)?;
            input.clear();
            for index in picks {
                input.toggle(index);
            }
        }
        AnswerInput::ShortText { .. } => {
            input.set_text(raw);
        }
        AnswerInput::TrueFalse { .. } => {
            let value = parse_truth(raw).ok_or_else(|| EntryError::NotTruth(raw.to_owned()))?;
            input.set_truth(value);
        }
    }
    Ok(())
}

fn resolve_options(options: &[Choice], raw: &str) -> Result<Vec<usize>, EntryError> {
    let mut picks = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let by_number = token.parse::<usize>().ok().filter(|n| (1..=options.len()).contains(n)).map(|n| n - 1);
        let index = by_number
            .or_else(|| {
                options
                    .iter()
                    .position(|c| c.value.eq_ignore_ascii_case(token) || c.label.eq_ignore_ascii_case(token))
            })
            .ok_or_else(|| EntryError::UnknownOption(token.to_owned()))?;
        if !picks.contains(&index) {
            picks.push(index);
        }
    }
    picks.sort_unstable();
    Ok(picks)
}

fn parse_truth(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "t" | "true" | "y" | "yes" | "1" => Some(true),
        "f" | "false" | "n" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn write_input(out: &mut impl Write, input: &AnswerInput) -> io::Result<()> {
    match input {
        AnswerInput::SingleChoice { options, .. } => {
            for (i, choice) in options.iter().enumerate() {
                let mark = if input.is_marked(i) { "(*)" } else { "( )" };
                writeln!(out, "  {mark} {}. {}", i + 1, choice.label)?;
            }
        }
        AnswerInput::MultipleChoice { options, .. } => {
            for (i, choice) in options.iter().enumerate() {
                let mark = if input.is_marked(i) { "[x]" } else { "[ ]" };
                writeln!(out, "  {mark} {}. {}", i + 1, choice.label)?;
            }
        }
        AnswerInput::ShortText { text, .. } => {
            writeln!(out, "  > {text}")?;
        }
        AnswerInput::TrueFalse { selected } => {
            let mark = |v: bool| if *selected == Some(v) { "(*)" } else { "( )" };
            writeln!(out, "  {} {TRUE_VALUE}  {} {FALSE_VALUE}", mark(true), mark(false))?;
        }
    }
    Ok(())
}
