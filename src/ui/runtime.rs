use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::api::ProductSource;
use crate::config::UiConfig;
use crate::favorites::FavoritesStore;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::route::Route;
use crate::ui::terminal_guard::setup_terminal;

const COMMAND_QUEUE: usize = 32;

/// Run the interactive browser until the user quits.
pub fn run(
    source: Arc<dyn ProductSource>,
    favorites: FavoritesStore,
    config: &UiConfig,
    route: Route,
) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let tick_rate = config.tick_rate();
    let events = EventHandler::new(tick_rate);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(command_worker(command_rx, source, events.sender()));

    let mut app = App::new(favorites, config);
    app.set_command_sender(command_tx);

    let (mut terminal, guard) = setup_terminal()?;
    app.start(route);
    tracing::info!(route = %route, "Browser started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(app.poll_timeout(Instant::now(), tick_rate)) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Ok(AppEvent::ProductsLoaded { ticket, result }) => {
                app.on_products_loaded(ticket, result)
            }
            Ok(AppEvent::CategoriesLoaded(result)) => app.on_categories_loaded(result),
            Ok(AppEvent::ProductLoaded { id, result }) => app.on_product_loaded(id, result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        app.on_tick(Instant::now());
    }

    drop(guard);
    runtime.shutdown_background();
    tracing::info!("Browser closed");
    Ok(())
}

/// Serve [`UiCommand`]s until the UI drops its sender.
///
/// Each request runs in its own task, so a slow lookup never holds up a
/// refresh; ordering is settled on the UI side by fetch tickets.
pub async fn command_worker(
    mut commands: mpsc::Receiver<UiCommand>,
    source: Arc<dyn ProductSource>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        let source = Arc::clone(&source);
        let events = events.clone();
        tokio::spawn(async move {
            let event = match command {
                UiCommand::FetchProducts { ticket } => AppEvent::ProductsLoaded {
                    ticket,
                    result: source.products().await,
                },
                UiCommand::FetchCategories => AppEvent::CategoriesLoaded(source.categories().await),
                UiCommand::FetchProduct { id } => AppEvent::ProductLoaded {
                    id,
                    result: source.product(id).await,
                },
            };
            if events.send(event).is_err() {
                tracing::debug!("UI closed before response arrived");
            }
        });
    }
}
