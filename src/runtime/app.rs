//! Event loop
//!
//! Waits on two sources, terminal input and the materializer's redraw
//! signal. Each one becomes a `Msg`, goes through `update`, and the
//! returned `Cmd` is executed here. Nothing in this loop reads the input
//! stream, so a slow or endless pipe never stalls it.

use std::sync::Arc;

use crossbeam_channel::{select, Receiver};
use crossterm::event::Event;

use crate::cli::StartupConfig;
use crate::commands::Cmd;
use crate::error::Result;
use crate::keymap::{msg_from_event, Keymap};
use crate::messages::{AppMsg, Msg};
use crate::model::ViewerModel;
use crate::table::{Redraw, SessionHandle, TableGrid};
use crate::update::update;
use crate::view;

use super::terminal::Tui;

pub struct App {
    model: ViewerModel,
    keymap: Keymap,
    grid: Arc<TableGrid>,
    session: SessionHandle,
    redraws: Receiver<Redraw>,
    needs_redraw: bool,
}

impl App {
    pub fn new(
        config: &StartupConfig,
        grid: Arc<TableGrid>,
        session: SessionHandle,
        screen: (u16, u16),
    ) -> Self {
        let model = ViewerModel::new(
            &config.session,
            config.borders,
            config.read_ahead_pages,
            screen,
        );
        let redraws = session.session().redraws();
        Self {
            model,
            keymap: Keymap::with_defaults(),
            grid,
            session,
            redraws,
            needs_redraw: true,
        }
    }

    /// Run until the user quits, input events stop or the materializer dies
    ///
    /// A dead materializer is reported as an error once the loop has ended.
    pub fn run(mut self, terminal: &mut Tui, events: Receiver<Event>) -> Result<()> {
        // Lays out the first screen and publishes the first demand
        let (width, height) = self.model.screen;
        let mut running = self.dispatch(Msg::App(AppMsg::Resize(width, height)));

        'events: while running {
            if self.needs_redraw {
                terminal.draw(|frame| view::render(frame, &self.model, &self.grid))?;
                self.needs_redraw = false;
            }

            let msg = select! {
                recv(events) -> ev => match ev {
                    Ok(ev) => msg_from_event(&self.keymap, &ev),
                    Err(_) => {
                        tracing::warn!("terminal input closed");
                        break 'events;
                    }
                },
                recv(self.redraws) -> signal => signal.ok().map(Msg::Table),
            };

            if let Some(msg) = msg {
                running = self.dispatch(msg);
            }
        }

        tracing::info!(rows = self.model.materialized, "viewer exiting");
        self.session.shutdown()
    }

    /// Bring the model up to date with the session, then update
    fn dispatch(&mut self, msg: Msg) -> bool {
        let session = self.session.session();
        self.model.sync_table(
            session.materialized_rows(),
            self.grid.column_count(),
            session.stream_state().is_closed(),
        );

        match update(&mut self.model, msg) {
            Some(cmd) => self.process_cmd(cmd),
            None => true,
        }
    }

    /// Execute a command. Returns false once the viewer should exit.
    fn process_cmd(&mut self, cmd: Cmd) -> bool {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => self.needs_redraw = true,
            Cmd::PublishDemand(demand) => {
                self.session.publish(demand);
            }
            Cmd::CancelScan => {
                self.session.session().cancel();
            }
            Cmd::Quit => return false,
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    if !self.process_cmd(cmd) {
                        return false;
                    }
                }
            }
        }
        true
    }
}
