use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use exam_room::api::HttpApi;
use exam_room::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, endpoints_from_env};
use exam_room::error::CliError;
use exam_room::session::{Outcome, Session};
use exam_room::terminal::TerminalSurface;
use navigator::assistant::AiSession;
use navigator::draft::QuestionDraft;
use navigator::nav::{CompletionMode, NavigatorConfig};
use navigator::paper::{ExamPaper, PaperId};
use navigator::proctor;
use navigator::state::SubmitLock;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "exam-room", about = "Take and manage exam papers from the terminal")]
struct Cli {
    #[arg(long, env = "EXAM_ROOM_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "EXAM_ROOM_SESSION_ID")]
    session_id: Option<String>,

    #[arg(long, env = "EXAM_ROOM_CSRF_TOKEN")]
    csrf_token: Option<String>,

    #[arg(long, env = "EXAM_ROOM_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Take a paper interactively, one question at a time.
    Take {
        #[arg(long, help = "Paper JSON file, or - for stdin")]
        paper: PathBuf,

        #[arg(long, env = "EXAM_ROOM_COMPLETION", value_enum, default_value_t = Completion::Request)]
        completion: Completion,

        #[arg(long, help = "AI questions left, as shown on the exam page")]
        ai_remaining: Option<u32>,

        #[arg(long, default_value_t = false)]
        no_confirm_empty: bool,
    },
    /// End an exam for every student (teachers only).
    End {
        paper_id: String,

        #[arg(long, short = 'y', default_value_t = false)]
        yes: bool,
    },
    /// Ask the AI helper a single question.
    Ask {
        question: String,

        #[arg(long)]
        paper_id: Option<String>,
    },
    /// Validate a question draft before uploading it.
    CheckDraft { file: PathBuf },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Completion {
    /// POST to the complete-exam endpoint.
    Request,
    /// Post the whole answer sheet through the exam form.
    Form,
}

impl From<Completion> for CompletionMode {
    fn from(value: Completion) -> Self {
        match value {
            Completion::Request => Self::CompleteRequest,
            Completion::Form => Self::FormSubmit,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::new(&cli.base_url, cli.session_id, cli.csrf_token, cli.timeout_secs, endpoints_from_env())?;

    match cli.command {
        Command::Take { paper, completion, ai_remaining, no_confirm_empty } => {
            let nav_config = NavigatorConfig {
                completion: completion.into(),
                confirm_empty_answer: !no_confirm_empty,
                ..NavigatorConfig::default()
            };
            run_take(config, &paper, nav_config, ai_remaining).await
        }
        Command::End { paper_id, yes } => run_end(config, PaperId::new(paper_id), yes).await,
        Command::Ask { question, paper_id } => run_ask(config, &question, paper_id.map(PaperId::new)).await,
        Command::CheckDraft { file } => run_check_draft(&file),
    }
}

async fn run_take(
    config: ClientConfig,
    path: &Path,
    nav_config: NavigatorConfig,
    ai_remaining: Option<u32>,
) -> Result<(), CliError> {
    let paper: ExamPaper = serde_json::from_str(&read_input(path)?)?;
    let paper_id = paper.id.clone();
    info!(%paper_id, questions = paper.len(), "starting paper");

    let api = HttpApi::new(config)?;
    let form_api = api.clone();
    let surface = TerminalSurface::new(io::stdin().lock(), io::stdout());
    let mut session = Session::new(api, surface, paper, nav_config, ai_remaining);

    match session.run().await? {
        Outcome::Completed => println!("paper {paper_id} handed in"),
        Outcome::FormSubmitted(sheet) => {
            form_api.submit_form(&paper_id, &sheet).await?;
            println!("paper {paper_id} handed in");
        }
        Outcome::Quit => println!("left paper {paper_id} without handing in"),
    }
    Ok(())
}

async fn run_end(config: ClientConfig, paper_id: PaperId, yes: bool) -> Result<(), CliError> {
    let api = HttpApi::new(config)?;
    let surface = TerminalSurface::new(io::stdin().lock(), io::stdout()).assume_yes(yes);
    if !proctor::end_exam(&api, &surface, &SubmitLock::default(), &paper_id).await? {
        println!("cancelled");
    }
    Ok(())
}

async fn run_ask(config: ClientConfig, question: &str, paper_id: Option<PaperId>) -> Result<(), CliError> {
    let api = HttpApi::new(config)?;
    let mut session = AiSession::new(paper_id, None);
    let answer = session.ask(&api, question).await?;
    println!("{answer}");
    if let Some(remaining) = session.remaining() {
        eprintln!("{remaining} AI questions left");
    }
    Ok(())
}

fn run_check_draft(path: &Path) -> Result<(), CliError> {
    let draft: QuestionDraft = serde_json::from_str(&read_input(path)?)?;
    draft.validate()?;
    println!("ok");
    Ok(())
}

fn read_input(path: &Path) -> Result<String, CliError> {
    let read = if path.as_os_str() == "-" { io::read_to_string(io::stdin()) } else { std::fs::read_to_string(path) };
    read.map_err(|source| CliError::ReadFile { path: path.display().to_string(), source })
}
