use std::fs::File;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use clap::Parser;
use depcalc::{Calculator, Error, Output};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as ReplResult};

/// Single-digit calculator with forward references, results and undo.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File with one command per line. Starts an interactive session when omitted.
    script: Option<PathBuf>,
    /// Line history of the interactive session (needs the `with-file-history` feature).
    #[arg(long, default_value = "history.txt")]
    history: PathBuf,
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.script {
        Some(ref script) => run_script(script)?,
        None => run_repl(&args.history).map_err(|e| e.to_string())?,
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run_script(filename: &Path) -> Result<(), String> {
    let lines = read_lines(filename).map_err(|e| format!("{}: {e}", filename.display()))?;
    let mut calculator = Calculator::new();
    for line in lines.map_while(Result::ok) {
        if line.trim().is_empty() {
            continue;
        }
        report(calculator.execute(&line));
    }
    Ok(())
}

#[cfg_attr(not(feature = "with-file-history"), allow(unused_variables))]
fn run_repl(history: &Path) -> ReplResult<()> {
    let mut rl = DefaultEditor::new()?;
    let mut calculator = Calculator::new();
    #[cfg(feature = "with-file-history")]
    if rl.load_history(history).is_err() {
        println!("No previous history.");
    }
    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                report(calculator.execute(&line));
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    #[cfg(feature = "with-file-history")]
    rl.save_history(history)?;
    Ok(())
}

fn report(result: Result<Output, Error>) {
    match result {
        Ok(output) => {
            let lines = output.lines();
            if !lines.is_empty() {
                println!("{}", lines.join(", "));
            } else if let Some(notice) = output.notice() {
                println!("{notice}");
            }
        }
        Err(err) => eprintln!("{err}"),
    }
}

fn read_lines<P>(filename: P) -> io::Result<io::Lines<io::BufReader<File>>>
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;
    Ok(io::BufReader::new(file).lines())
}
