use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use mailview_core::{update, AppState, Msg};
use mailview_engine::ReqwestMailApi;
use mailview_logging::{mail_debug, mail_info};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging;
use super::ui::input::{parse_command, Command, HELP};
use super::ui::render::render;

/// Everything the main loop reacts to.
pub enum AppEvent {
    Core(Msg),
    Input(Command),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::load(std::env::args_os().nth(1).map(PathBuf::from))
        .context("failed to load configuration")?;
    logging::initialize(&config);
    mail_info!("Starting mailview against {}", config.api_url);

    let api = ReqwestMailApi::new(config.api_settings())
        .with_context(|| format!("invalid mail store url {:?}", config.api_url))?;

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(Arc::new(api), event_tx.clone())
        .context("failed to start request engine")?;
    spawn_input_reader(event_tx)?;

    let mut controller = Controller::new(runner);
    println!("{HELP}");
    // The list is loaded as soon as the view exists.
    controller.dispatch(Msg::RefreshClicked)?;

    for event in event_rx {
        match event {
            AppEvent::Core(msg) => controller.dispatch(msg)?,
            AppEvent::Input(Command::Send(msg)) => controller.dispatch(msg)?,
            AppEvent::Input(Command::Select(index)) => controller.select(index)?,
            AppEvent::Input(Command::Help) => println!("{HELP}"),
            AppEvent::Input(Command::Unknown(text)) => {
                println!("Unknown command {text:?}\n{HELP}");
            }
            AppEvent::Input(Command::Quit) | AppEvent::InputClosed => break,
        }
    }

    mail_info!("Shutting down");
    Ok(())
}

struct Controller {
    state: AppState,
    runner: EffectRunner,
}

impl Controller {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        mail_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;
        self.runner.run(effects);

        if was_dirty {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "\n{}", render(&view))?;
            stdout.flush()?;
        }
        Ok(())
    }

    fn select(&mut self, index: usize) -> io::Result<()> {
        match self.state.message_at(index).cloned() {
            Some(message) => self.dispatch(Msg::MessageSelected(message)),
            None => {
                println!("No message #{}", index + 1);
                Ok(())
            }
        }
    }
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("mailview-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if let Some(command) = parse_command(&line) {
                    if event_tx.send(AppEvent::Input(command)).is_err() {
                        return;
                    }
                }
            }
            let _ = event_tx.send(AppEvent::InputClosed);
        })?;
    Ok(())
}
