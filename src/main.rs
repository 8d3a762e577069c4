// brainf: tape interpreter with debug dumps and a time-travel viewer

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use brainf::interpreter::constants::DEFAULT_SNAPSHOT_LIMIT;
use brainf::interpreter::debug::write_report;
use brainf::interpreter::engine::{run_program, Interpreter};
use brainf::interpreter::errors::Outcome;
use brainf::program;
use brainf::ui::App;

/// Parsed command line
struct Options {
    tui: bool,
    snapshot_limit: usize,
    file: String,
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--tui] [--snapshot-limit <MiB>] <file>", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tui                   Step through the run in a terminal viewer");
    eprintln!(
        "  --snapshot-limit <MiB>  History memory budget for --tui (default {})",
        DEFAULT_SNAPSHOT_LIMIT / (1024 * 1024)
    );
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut tui = false;
    let mut snapshot_limit = DEFAULT_SNAPSHOT_LIMIT;
    let mut file = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--tui" => tui = true,
            "--snapshot-limit" => {
                let value = iter
                    .next()
                    .ok_or("--snapshot-limit needs a value in MiB")?;
                let mib: usize = value
                    .parse()
                    .map_err(|_| format!("Invalid snapshot limit '{}'", value))?;
                snapshot_limit = mib.saturating_mul(1024 * 1024);
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option '{}'", flag));
            }
            path => {
                if file.replace(path.to_string()).is_some() {
                    return Err("Only one input file may be given".to_string());
                }
            }
        }
    }

    let file = file.ok_or("No input file provided")?;
    Ok(Options {
        tui,
        snapshot_limit,
        file,
    })
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("brainf");

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    let source = match program::load(&options.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    let result = if options.tui {
        run_tui(&source, options.snapshot_limit)
    } else {
        run_program(&source, io::stdout())
            .map(|_| ())
            .map_err(Into::into)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Record the whole run, browse it, then print the usual report
fn run_tui(source: &str, snapshot_limit: usize) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Loaded {} instructions.", source.chars().count());

    eprintln!("Executing program...");
    let mut interpreter = Interpreter::with_history(source, io::sink(), snapshot_limit);
    let outcome = interpreter.run();
    match &outcome {
        Outcome::Finished => {
            eprintln!("Execution finished after {} steps.", interpreter.steps());
        }
        Outcome::Faulted(fault) => {
            eprintln!("Execution halted: {}", fault);
        }
    }
    eprintln!("Total snapshots: {}", interpreter.total_snapshots());

    let final_state = interpreter.state().clone();
    let transcript = interpreter.transcript().to_string();

    if let Err(e) = interpreter.rewind_to_start() {
        eprintln!("Warning: Failed to rewind to start: {}", e);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(interpreter);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    let mut stdout = io::stdout();
    stdout.write_all(transcript.as_bytes())?;
    write_report(&mut stdout, &final_state, &outcome)?;
    Ok(())
}
