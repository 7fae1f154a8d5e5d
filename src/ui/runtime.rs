use crate::config::Config;
use crate::generation::DescriptionBackend;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::upload::ImageStore;
use crate::worker::Worker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

const COMMAND_QUEUE_SIZE: usize = 16;

pub fn run(
    config: &Config,
    runtime: Handle,
    store: Arc<dyn ImageStore>,
    backend: Arc<dyn DescriptionBackend>,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(120);
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_SIZE);
    runtime.spawn(Worker::new(command_rx, store, backend).run(events.sender()));

    let mut app = App::new(config);
    app.set_command_sender(command_tx);
    tracing::info!("UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::UploadFinished { path, result }) => {
                app.on_upload_finished(path, result);
            }
            Ok(AppEvent::GenerationFinished { request_id, result }) => {
                app.on_generation_finished(request_id, result);
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("UI stopped");
    drop(guard);
    Ok(())
}
