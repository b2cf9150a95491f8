use crate::api::TodoApi;
use crate::config::Config;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{self, LogBuffer};
use crate::state::State;
use crate::ui::ThemeMode;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;
pub type ConfigSaveSender = std::sync::mpsc::Sender<ThemeMode>;
type ConfigSaveReceiver = std::sync::mpsc::Receiver<ThemeMode>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration, talking
    /// to the task collection at the given URL. Returns the result of the
    /// application execution.
    ///
    pub async fn start(config: Config, api_url: &str, log_level: LevelFilter) -> Result<()> {
        let log_buffer = LogBuffer::default();
        logger::init(log_buffer.clone(), log_level)?;

        info!("Starting application...");
        debug!("Using config file {:?}", config.file_path());
        let api = TodoApi::new(api_url)?;
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let (config_save_tx, config_save_rx) = std::sync::mpsc::channel::<ThemeMode>();
        let mut app = App {
            state: Arc::new(Mutex::new(State::new(
                tx.clone(),
                config_save_tx,
                config.theme,
                log_buffer,
            ))),
            config,
        };
        app.start_network(rx, api);
        let config_saver = app.start_config_saver(config_save_rx);
        let ui_result = app.start_ui(tx).await;

        // The saver must be done with the file before the final write
        {
            let mut state = app.state.lock().await;
            state.close_config_channel();
            app.config.theme = state.theme_mode();
        }
        if config_saver.join().is_err() {
            error!("Config saver thread panicked.");
        }
        if let Err(e) = app.config.save() {
            error!("Failed to save config on exit: {}", e);
        }
        ui_result?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a thread that persists every theme change it is sent. It ends
    /// once every sender is gone.
    ///
    fn start_config_saver(&self, receiver: ConfigSaveReceiver) -> JoinHandle<()> {
        let config = self.config.clone();
        std::thread::spawn(move || save_theme_changes(receiver, config))
    }

    /// Start a separate thread for asynchronous state mutations. Each event
    /// runs as its own task, so slow requests do not hold up later ones and
    /// the last reload to finish determines the list.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver, api: TodoApi) {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to create network runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async {
                let network_event_handler = NetworkEventHandler::new(cloned_state, api);
                while let Ok(network_event) = net_receiver.recv() {
                    let handler = network_event_handler.clone();
                    tokio::spawn(async move {
                        if let Err(e) = handler.handle(network_event).await {
                            error!("{:#}", e);
                        }
                    });
                }
            })
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&mut self, net_sender: NetworkEventSender) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        net_sender.send(NetworkEvent::Load)?;

        let terminal_event_handler = TerminalEventHandler::new();
        let result = loop {
            let mut state = self.state.lock().await;
            state.prune_messages(Instant::now());
            if let Err(e) = terminal.draw(|frame| crate::ui::render(frame, &mut state)) {
                break Err(e.into());
            }
            match terminal_event_handler.handle_next(&mut state) {
                Ok(true) => {}
                Ok(false) => {
                    debug!("Received application exit request.");
                    break Ok(());
                }
                Err(e) => break Err(e),
            }
        };

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}

/// Write every received theme to the config file until the channel closes.
///
fn save_theme_changes(receiver: ConfigSaveReceiver, mut config: Config) {
    while let Ok(theme) = receiver.recv() {
        config.theme = theme;
        match config.save() {
            Ok(()) => debug!("Saved {:?} theme preference.", theme),
            Err(e) => error!("Failed to save config: {}", e),
        }
    }
}
