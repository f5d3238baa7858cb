// Spiral: C declarator to English, with step-through parse visualization

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use spiral::translator::machine::Translator;
use spiral::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("spiral");

    let mut tui = false;
    let mut declarator: Option<String> = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--tui" | "-t" => tui = true,
            _ => declarator = Some(arg.clone()),
        }
    }

    let Some(declarator) = declarator else {
        eprintln!("Error: No declarator provided");
        eprintln!();
        eprintln!("Usage: {} [--tui] \"<declarator>\"", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!(
            "  {} \"char* const*(*next)()\"        # Print the English sentence",
            program_name
        );
        eprintln!(
            "  {} --tui \"int (*x)[]\"             # Step through the translation",
            program_name
        );
        std::process::exit(1);
    };

    // Run the translation, keeping the trace for the explorer
    let mut translator = Translator::new(&declarator);
    let outcome = translator.run();
    let trace = translator.into_trace();

    if !tui {
        match outcome {
            Ok(sentence) => {
                println!("{}", sentence);
                return Ok(());
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = &outcome {
        eprintln!("Error: {}", e);
        eprintln!("Entering TUI with partial translation history...");
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(declarator, trace, outcome);
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
