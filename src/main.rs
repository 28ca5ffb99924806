use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use std::io::stdout;
use std::path::Path;

use docsurface::browser::Browser;
use docsurface::config::{self, ConfigResult};
use docsurface::error::SurfaceError;
use docsurface::text_engine::TextEngine;

/// URL schemes passed through to the engine unchanged
const URL_PREFIXES: [&str; 5] = ["about:", "qrc:", "file:", "http://", "https://"];

/// Terminal documentation viewer with find-in-page
#[derive(Parser, Debug)]
#[command(version, about = "Terminal documentation viewer with find-in-page")]
struct Args {
    /// Page to open: a text file or an about:, qrc: or file: URL
    target: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/docsurface-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/docsurface-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== DOCSURFACE DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let config_result = config::load_config();

    let args = Args::parse();

    // Fail before touching the terminal
    let url = target_url(args.target.as_deref(), &config_result.config.browser.home)?;

    let terminal = init_terminal()?;
    let result = run(terminal, &url, config_result);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== DOCSURFACE DEBUG SESSION ENDED ===");

    Ok(())
}

/// Turns the command-line target into a URL. Plain paths must exist.
fn target_url(target: Option<&str>, home: &str) -> Result<String, SurfaceError> {
    let target = match target {
        Some(target) => target,
        None => return Ok(home.to_string()),
    };

    if URL_PREFIXES.iter().any(|prefix| target.starts_with(prefix)) {
        return Ok(target.to_string());
    }

    let path = Path::new(target);
    if !path.exists() {
        return Err(SurfaceError::PageNotFound(target.to_string()));
    }
    let absolute = path.canonicalize()?;
    Ok(format!("file://{}", absolute.display()))
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    // Lets Shift+Enter reach the find bar as a distinct key
    if supports_keyboard_enhancement().unwrap_or(false) {
        let _ = execute!(
            stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        );
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, url: &str, config_result: ConfigResult) -> Result<()> {
    let mut browser = Browser::new(TextEngine::new(), url, &config_result.config);

    if let Some(warning) = config_result.warning {
        browser.notification.show_warning(&warning);
    }

    loop {
        browser.tick();
        terminal.draw(|frame| browser.render(frame))?;
        browser.handle_events()?;

        if browser.should_quit() {
            break;
        }
    }

    Ok(())
}
