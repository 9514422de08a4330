use crossterm::{
    event::{DisableFocusChange, EnableFocusChange, Event, EventStream, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use crypto_monitor_tui::{
    ui, Dashboard, HttpSnapshotSource, RefreshOutcome, RefreshScheduler, SchedulerHandle,
    SnapshotSource, DEFAULT_ENDPOINT, REFRESH_INTERVAL,
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let endpoint = std::env::var("MONITOR_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let source = Arc::new(HttpSnapshotSource::new(endpoint)?);
    info!(endpoint = source.endpoint(), "starting crypto monitor");

    let (scheduler, handle, outcome_rx) =
        RefreshScheduler::new(source as Arc<dyn SnapshotSource>, REFRESH_INTERVAL);
    tokio::spawn(scheduler.run());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, handle.clone(), outcome_rx).await;

    // Restore terminal
    handle.stop().await;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    handle: SchedulerHandle,
    mut outcome_rx: mpsc::Receiver<RefreshOutcome>,
) -> io::Result<()> {
    let mut dashboard = Dashboard::new();
    let mut events = EventStream::new();
    // Redraw on a coarse tick even without input, so the clock-ish status
    // line never looks frozen.
    let mut redraw = tokio::time::interval(Duration::from_millis(250));

    loop {
        terminal.draw(|f| ui::draw(f, &dashboard))?;

        tokio::select! {
            Some(outcome) = outcome_rx.recv() => {
                dashboard.apply(outcome);
            }
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('r') => handle.trigger_now().await,
                    _ => {}
                },
                // Terminal focus stands in for page visibility: no polling
                // while unfocused, one immediate refresh on regaining it.
                Some(Ok(Event::FocusGained)) => handle.set_visible(true).await,
                Some(Ok(Event::FocusLost)) => handle.set_visible(false).await,
                Some(Ok(_)) => {}
                Some(Err(error)) => return Err(error),
                None => return Ok(()),
            },
            _ = redraw.tick() => {}
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
