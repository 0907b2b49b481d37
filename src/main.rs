use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use ghostfill::app::App;
use ghostfill::buffer::Buffer;
use ghostfill::{config, logging};

/// Ghost text code completion in the terminal
#[derive(Parser)]
#[command(name = "ghostfill")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to edit; omit for an empty scratch buffer
    file: Option<PathBuf>,

    /// Completion endpoint, e.g. http://localhost:11434/api/generate
    #[arg(long)]
    url: Option<String>,

    /// Model name to request completions from
    #[arg(long)]
    model: Option<String>,

    /// Prompt template family the model expects (codellama, deepseek)
    #[arg(long)]
    family: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    logging::init();

    let cli = Cli::parse();

    let mut config = config::load();
    if let Some(url) = cli.url {
        config.server.url = url;
    }
    if let Some(model) = cli.model {
        config.server.model = model;
    }
    if let Some(family) = cli.family {
        config.server.family = family;
    }

    // Load the buffer before touching the terminal so open errors print
    // like any other CLI failure
    let buffer = match &cli.file {
        Some(path) => Buffer::from_file(path)?,
        None => Buffer::scratch(),
    };

    let mut app = App::new(buffer, config);
    app.start_worker();

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Run the application
    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Pump input and worker outcomes for one tick
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
