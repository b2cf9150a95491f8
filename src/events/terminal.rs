use crate::state::{Focus, State, TaskFilter};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => error!("Failed to read terminal event: {}", e),
                    },
                    Ok(false) => {}
                    Err(e) => error!("Failed to poll terminal events: {}", e),
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(key, state)),
            Event::Tick => Ok(true),
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    match state.current_focus() {
        Focus::Edit => handle_edit_key(key, state),
        Focus::Input => handle_input_key(key, state),
        Focus::List => return handle_list_key(key, state),
    }
    true
}

/// Keys while an inline edit box is open.
///
fn handle_edit_key(key: KeyEvent, state: &mut State) {
    match key.code {
        // Leaving the box saves, like losing focus would
        KeyCode::Enter | KeyCode::Esc => {
            debug!("Processing save task event '{:?}'...", key);
            state.submit_edit();
        }
        // Step out without saving; the box stays open
        KeyCode::Tab => {
            state.focus_list();
        }
        KeyCode::Backspace => {
            state.remove_edit_char();
        }
        KeyCode::Char(c) if is_text_modifier(key.modifiers) => {
            state.add_edit_char(c);
        }
        _ => {}
    }
}

/// Keys while the new task input has focus.
///
fn handle_input_key(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Enter => {
            debug!("Processing add task event '{:?}'...", key);
            state.submit_new_task();
        }
        KeyCode::Backspace => {
            state.remove_new_task_char();
        }
        KeyCode::Tab | KeyCode::Esc => {
            state.focus_list();
        }
        KeyCode::Char(c) if is_text_modifier(key.modifiers) => {
            state.add_new_task_char(c);
        }
        _ => {}
    }
}

/// Keys while the task list has focus. Returns false if exit was requested.
///
fn handle_list_key(key: KeyEvent, state: &mut State) -> bool {
    let result = match key.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_task_index();
            Ok(())
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_task_index();
            Ok(())
        }
        KeyCode::Char(' ') | KeyCode::Char('c') => {
            debug!("Processing toggle complete event '{:?}'...", key);
            state.toggle_selected_task().map(|_| ())
        }
        KeyCode::Char('e') => {
            debug!("Processing start editing event '{:?}'...", key);
            state.start_editing_selected().map(|_| ())
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            debug!("Processing delete task event '{:?}'...", key);
            state.delete_selected_task().map(|_| ())
        }
        KeyCode::Char('1') => {
            state.set_task_filter(TaskFilter::All);
            Ok(())
        }
        KeyCode::Char('2') => {
            state.set_task_filter(TaskFilter::Active);
            Ok(())
        }
        KeyCode::Char('3') => {
            state.set_task_filter(TaskFilter::Completed);
            Ok(())
        }
        KeyCode::Char('f') => {
            state.next_task_filter();
            Ok(())
        }
        KeyCode::Char('t') => {
            state.toggle_theme();
            Ok(())
        }
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Tab => {
            state.focus_input();
            Ok(())
        }
        _ => Ok(()),
    };
    if let Err(e) = result {
        warn!("Ignoring '{:?}': {}", key.code, e);
    }
    true
}

fn is_text_modifier(modifiers: KeyModifiers) -> bool {
    modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT
}
