//! Main TUI runner - entry point and event loop

use std::time::Duration;

use botdash_app::Engine;
use botdash_client::ResourceClient;
use botdash_core::prelude::*;

use crate::{event, render, terminal};

/// Run the dashboard until the user quits or a signal arrives
pub async fn run<C>(mut engine: Engine<C>) -> Result<()>
where
    C: ResourceClient + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();

    engine.spawn_signal_handler();
    engine.start();

    let tick = Duration::from_millis(engine.state.settings.ui.tick_rate_ms.max(1));
    let result = run_loop(&mut term, &mut engine, tick);

    ratatui::restore();

    if let Err(ref e) = result {
        error!("Dashboard loop failed: {}", e);
    }
    info!("Bot dashboard exiting");
    result
}

/// Main event loop
fn run_loop<C>(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<C>,
    tick: Duration,
) -> Result<()>
where
    C: ResourceClient + Sync + 'static,
{
    while !engine.should_quit() {
        // Task completions and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll(tick)? {
            engine.process_message(message);
        }
    }

    Ok(())
}
