mod error;

use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, BufRead, IsTerminal}, process::ExitCode};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordcalc_compute::{normalize, FormatOptions, Markup, Session};

/// The environment variable that sets the log filter, such as `WORDCALC_LOG=debug`.
const LOG_ENV: &str = "WORDCALC_LOG";

const USAGE: &str = "usage: wordcalc-repl [--latex] [--decimals N]";

const HELP: &str = "\
Type a question, such as:
  solve 2x + 4 = 10
  average of 4, 6, 9
  ∫x^2 dx
  derivative of sin(x)
  convert 1010 base 2 to base 10

Commands:
  history           list the questions asked so far
  normalize <text>  show how a question is read
  help              show this message
  exit              quit";

/// What to do after a line of input.
enum Flow {
    Continue,
    Exit,
}

/// Parses the command line into the formatting options of the session.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<FormatOptions, String> {
    let mut builder = FormatOptions::default().into_builder();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--latex" => builder = builder.markup(Markup::Latex),
            "--decimals" => {
                let decimals = args.next()
                    .and_then(|value| value.parse().ok())
                    .ok_or_else(|| "--decimals needs a whole number".to_string())?;
                builder = builder.decimals(decimals);
            },
            other => return Err(format!("unknown argument `{}`", other)),
        }
    }
    Ok(builder.build())
}

/// Runs a REPL command, or answers the line as a query.
fn process(input: &str, session: &mut Session) -> Flow {
    let input = input.trim();
    match input {
        "exit" | "quit" => return Flow::Exit,
        "help" => println!("{}", HELP),
        "history" => {
            for (i, entry) in session.history().iter().enumerate() {
                println!("{:>3}  {}\n     {}", i + 1, entry.query, entry.response);
            }
        },
        _ => {
            if let Some(text) = input.strip_prefix("normalize ") {
                println!("{}", normalize(text));
            } else if let Some(answer) = session.submit(input) {
                debug!(intent = ?answer.intent, normalized = %answer.normalized, "answered query");
                match &answer.outcome {
                    Ok(response) => println!("{}", response),
                    Err(err) => error::report_to_stderr(&answer, err),
                }
            }
        },
    }
    Flow::Continue
}

/// Answers each line of a piped input.
fn run_piped(session: &mut Session) -> io::Result<()> {
    for line in io::stdin().lock().lines() {
        if let Flow::Exit = process(&line?, session) {
            break;
        }
    }
    Ok(())
}

/// Runs the interactive prompt until end of input.
fn run_interactive(session: &mut Session) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<Flow, ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        rl.add_history_entry(&input)?;
        Ok(process(&input, session))
    }

    loop {
        match process_line(&mut rl, session) {
            Ok(Flow::Continue) => (),
            Ok(Flow::Exit) | Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .with_writer(io::stderr)
        .init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            return ExitCode::from(2);
        },
    };
    debug!(?options, "starting session");

    let mut session = Session::new(options);
    let result = if io::stdin().is_terminal() {
        run_interactive(&mut session).map_err(|err| err.to_string())
    } else {
        run_piped(&mut session).map_err(|err| err.to_string())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        },
    }
}
