// numbounds: C numeric boundary exercises, printed or stepped through

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use numbounds::lesson::{self, Lesson};
use numbounds::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--tui] [lesson]", program_name);
    eprintln!("       {} --list", program_name);
    eprintln!();
    eprintln!("With no lesson, runs '{}'.", lesson::default_lesson().name);
    eprintln!();
    eprintln!("Examples:");
    eprintln!(
        "  {}                  # Print the overflow/underflow demonstration",
        program_name
    );
    eprintln!(
        "  {} specifiers       # Print the mismatched specifier lesson",
        program_name
    );
    eprintln!(
        "  {} --tui notation   # Step through a lesson in the terminal UI",
        program_name
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("numbounds");

    let mut use_tui = false;
    let mut lesson_name: Option<&str> = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--tui" => use_tui = true,
            "--list" => {
                for lesson in lesson::catalog() {
                    println!("{:<12} {}", lesson.name, lesson.title);
                }
                return Ok(());
            }
            "-h" | "--help" => {
                print_usage(program_name);
                return Ok(());
            }
            flag if flag.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", flag);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
            name if lesson_name.is_none() => lesson_name = Some(name),
            extra => {
                eprintln!("Error: Unexpected argument '{}'", extra);
                print_usage(program_name);
                std::process::exit(1);
            }
        }
    }

    let lesson = match lesson_name {
        Some(name) => match lesson::find(name) {
            Ok(lesson) => lesson,
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!("Run '{} --list' to see available lessons.", program_name);
                std::process::exit(1);
            }
        },
        None => lesson::default_lesson(),
    };

    let history = match lesson.run() {
        Ok(history) => history,
        Err(e) => {
            eprintln!("Lesson '{}' failed: {}", lesson.name, e);
            std::process::exit(1);
        }
    };

    if use_tui {
        eprintln!(
            "Recorded {} steps for '{}'. Starting TUI...",
            history.len(),
            lesson.name
        );
        return run_tui(lesson, history);
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(history.output().as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn run_tui(
    lesson: &'static Lesson,
    history: numbounds::snapshot::History,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(lesson, history);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
