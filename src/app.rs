use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::Local;
use crossterm::event;
use ratatui::prelude::*;
use sa_store::api::StoreClient;

use crate::actions::{Action, ActionResult, apply_action};
use crate::constants::{EVENT_POLL_MS, RENDER_THROTTLE_MS};
use crate::events::handle_event;
use crate::state::{State, map_rows};
use crate::ui;
use crate::worker::{self, StoreEvent, StoreOp};

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// What the event loop must do after folding in a worker event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FollowUp {
    None,
    FetchList,
}

pub struct App {
    pub state: State,
    client: StoreClient,
    tx: Sender<StoreEvent>,
    /// Last render time for throttling
    last_render_ms: u64,
    /// Last spinner animation update time
    last_spinner_ms: u64,
}

impl App {
    pub fn new(state: State, client: StoreClient, tx: Sender<StoreEvent>) -> Self {
        Self { state, client, tx, last_render_ms: 0, last_spinner_ms: 0 }
    }

    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<StoreEvent>,
    ) -> io::Result<()> {
        // Load the table before the first frame goes up
        self.request_list();

        loop {
            let current_ms = now_ms();

            // === INPUT FIRST: process user input with minimal latency ===
            if event::poll(Duration::ZERO)? {
                let evt = event::read()?;

                let Some(action) = handle_event(&evt, &self.state) else {
                    break;
                };

                self.handle_action(action);

                // Render immediately after input for instant feedback
                if self.state.dirty {
                    terminal.draw(|frame| ui::render(frame, &self.state))?;
                    self.state.dirty = false;
                    self.last_render_ms = current_ms;
                }
            }

            // === BACKGROUND PROCESSING ===
            self.process_store_events(&rx);
            self.update_spinner_animation();

            // Render if dirty and enough time has passed (capped at ~28fps)
            if self.state.dirty
                && current_ms.saturating_sub(self.last_render_ms) >= RENDER_THROTTLE_MS
            {
                terminal.draw(|frame| ui::render(frame, &self.state))?;
                self.state.dirty = false;
                self.last_render_ms = current_ms;
            }

            // Wait for next event (with timeout to keep checking the worker channel)
            let _ = event::poll(Duration::from_millis(EVENT_POLL_MS))?;
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action) {
        // Any action triggers a re-render
        self.state.dirty = true;
        match apply_action(&mut self.state, action) {
            ActionResult::FetchList => self.request_list(),
            ActionResult::Create(payload) => {
                self.state.pending_mutations += 1;
                worker::submit_create(self.client.clone(), payload, self.tx.clone());
            }
            ActionResult::Update { id, payload } => {
                self.state.pending_mutations += 1;
                worker::submit_update(self.client.clone(), id, payload, self.tx.clone());
            }
            ActionResult::Delete(id) => {
                self.state.pending_mutations += 1;
                worker::submit_delete(self.client.clone(), id, self.tx.clone());
            }
            ActionResult::Nothing => {}
        }
    }

    fn request_list(&mut self) {
        self.state.loading = true;
        self.state.dirty = true;
        worker::fetch_list(self.client.clone(), self.tx.clone());
    }

    fn process_store_events(&mut self, rx: &Receiver<StoreEvent>) {
        while let Ok(evt) = rx.try_recv() {
            self.state.dirty = true;
            if apply_store_event(&mut self.state, evt) == FollowUp::FetchList {
                self.request_list();
            }
        }
    }

    /// Advance the spinner while any request is in flight.
    /// Throttled to 10fps (100ms) to avoid unnecessary re-renders.
    fn update_spinner_animation(&mut self) {
        let now = now_ms();
        if now.saturating_sub(self.last_spinner_ms) < 100 {
            return;
        }

        if self.state.busy() {
            self.last_spinner_ms = now;
            self.state.spinner_frame = self.state.spinner_frame.wrapping_add(1);
            self.state.dirty = true;
        }
    }
}

/// Fold a finished request into the state. Every completed mutation asks for
/// a reload, so the table only ever shows what the server confirmed.
pub fn apply_store_event(state: &mut State, event: StoreEvent) -> FollowUp {
    match event {
        StoreEvent::Rows(Ok(records)) => {
            state.loading = false;
            state.rows_stale = false;
            state.set_rows(map_rows(records));
            state.last_refresh = Some(Local::now());
            FollowUp::None
        }
        StoreEvent::Rows(Err(e)) => {
            state.loading = false;
            // Keep showing what we have, flagged as possibly out of date
            if !state.rows.is_empty() {
                state.rows_stale = true;
            }
            state.set_error(format!("Load failed: {}", e));
            FollowUp::None
        }
        StoreEvent::Mutation { op, outcome } => {
            state.pending_mutations = state.pending_mutations.saturating_sub(1);
            match outcome {
                Ok(()) => {
                    // A delete leaves any half-typed draft alone
                    if matches!(op, StoreOp::Create | StoreOp::Update) {
                        state.form.clear();
                    }
                    state.last_error = None;
                }
                Err(e) => {
                    state.set_error(format!("Failed to {}: {}", op.label(), e));
                }
            }
            FollowUp::FetchList
        }
    }
}
