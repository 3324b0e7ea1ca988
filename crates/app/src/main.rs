mod cli;
mod render;

use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Parser;
use services::{Clock, QuizEngine, QuizSession, ReferenceData, StudySession, SubjectProgress};
use study_core::model::{AnswerOption, Subject};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

#[derive(Debug)]
enum InputError {
    EndOfInput { answered: usize, total: usize },
    TooManyAnswers { given: usize, remaining: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EndOfInput { answered, total } => write!(
                f,
                "input ended after {answered} of {total} answers; quiz discarded"
            ),
            InputError::TooManyAnswers { given, remaining } => write!(
                f,
                "{given} answers given but only {remaining} questions remain"
            ),
        }
    }
}

impl std::error::Error for InputError {}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("STUDY_LOG").unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_session(cli: &Cli) -> Result<StudySession, Box<dyn std::error::Error>> {
    let reference = match &cli.data {
        Some(path) => {
            debug!(path = %path.display(), "using reference data file");
            ReferenceData::load(path)?
        }
        None => {
            debug!("using built-in reference data");
            ReferenceData::builtin()?
        }
    };
    let session = StudySession::new(Arc::new(reference), Clock::system());
    Ok(if cli.no_starter {
        session
    } else {
        session.with_starter_progress()
    })
}

/// Subjects outside the catalog still resolve so the quiz engine can report them.
fn quiz_subject(session: &StudySession, raw: &str) -> Result<Subject, Box<dyn std::error::Error>> {
    Ok(match session.catalog().resolve(raw) {
        Ok(subject) => subject,
        Err(_) => Subject::new(raw)?,
    })
}

/// Feed preset answers first, then prompt on `input` for the rest.
///
/// More preset answers than open questions is rejected before anything is recorded.
fn take_quiz(
    engine: &QuizEngine,
    quiz: &mut QuizSession,
    preset: &[AnswerOption],
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let remaining = quiz.total() - quiz.answered_count();
    if preset.len() > remaining {
        return Err(InputError::TooManyAnswers {
            given: preset.len(),
            remaining,
        }
        .into());
    }

    let mut preset = preset.iter().copied();
    while let Some(index) = quiz.next_unanswered() {
        if let Some(answer) = preset.next() {
            engine.record_answer(quiz, index, answer)?;
            continue;
        }

        let prompt = quiz.questions()[index].prompt();
        writeln!(out, "Q{}. {prompt}", index + 1)?;
        for option in AnswerOption::ALL {
            writeln!(out, "  {}) {}", option.number(), option.label())?;
        }

        let answer = loop {
            write!(out, "Your answer: ")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(InputError::EndOfInput {
                    answered: quiz.answered_count(),
                    total: quiz.total(),
                }
                .into());
            }
            match line.parse::<AnswerOption>() {
                Ok(answer) => break answer,
                Err(err) => writeln!(out, "{err}; pick 1 to 4")?,
            }
        };
        engine.record_answer(quiz, index, answer)?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = load_session(&cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Home) {
        Command::Home => writeln!(out, "{}", render::WELCOME)?,
        Command::Plan {
            name,
            subjects,
            hours,
            goal,
        } => {
            let subjects = subjects
                .iter()
                .map(|raw| session.catalog().resolve(raw))
                .collect::<Result<Vec<_>, _>>()?;
            let confirmation = session.submit_plan(name, subjects, hours, goal);
            write!(out, "{}", render::plan(&confirmation))?;
            writeln!(out)?;
            writeln!(out, "Recommended resources:")?;
            write!(out, "{}", render::resources(&session.recommended_resources()))?;
        }
        Command::Quiz { subject, answers } => {
            let subject = quiz_subject(&session, &subject)?;
            let mut quiz = match session.start_quiz(&subject) {
                Ok(quiz) => quiz,
                Err(err) if err.is_unavailable() => {
                    writeln!(
                        out,
                        "warning: No quiz available for the selected subject ({subject})."
                    )?;
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            };

            let engine = session.quiz_engine().clone();
            let stdin = io::stdin();
            take_quiz(&engine, &mut quiz, &answers, stdin.lock(), &mut out)?;

            let outcome = session.complete_quiz(quiz)?;
            writeln!(out, "You scored {} in {subject}.", outcome.score())?;
            let series = session.progress().score_series(&subject);
            write!(out, "{}", render::score_series(&subject, &series))?;
        }
        Command::Progress { subject, json } => {
            let tracker = session.progress();
            let snapshot = tracker.snapshot(session.catalog());
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
                return Ok(());
            }

            writeln!(out, "Completion:")?;
            write!(out, "{}", render::progress_bars(&snapshot.bars))?;
            if let Some(overall) = snapshot.overall_completion {
                writeln!(out, "Overall: {overall:.1}%")?;
            }
            writeln!(out)?;
            writeln!(out, "Quiz scores:")?;
            match subject {
                Some(raw) => {
                    let subject = session.catalog().resolve(&raw)?;
                    let progress = SubjectProgress {
                        summary: tracker.summary(&subject),
                        series: tracker.score_series(&subject),
                    };
                    write!(out, "{}", render::subject_summary(&progress))?;
                }
                None => {
                    for progress in &snapshot.subjects {
                        write!(out, "{}", render::subject_summary(progress))?;
                    }
                }
            }
        }
        Command::Resources { subject } => {
            let resources = session.reference().resources();
            let text = match subject {
                Some(raw) => {
                    let subject = session.catalog().resolve(&raw)?;
                    render::resources(&[(&subject, resources.links_for(&subject))])
                }
                None => render::resources(&resources.all(session.catalog())),
            };
            write!(out, "{text}")?;
        }
    }
    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        debug!(?err, "command failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
