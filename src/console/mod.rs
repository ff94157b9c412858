//! # Console
//!
//! The line-oriented front end. Each input line is parsed into a [`Command`] and applied
//! to the [`InventoryView`]; results and the table go to the output writer.
//!
//! Failures from the store are printed as `error: ...` lines and the console keeps
//! reading. Only an I/O error on the output itself ends [`Console::run`] early.

pub mod command;
pub mod table;

pub use command::{Command, HELP};

use crate::inventory_actor::InventoryError;
use crate::model::StockChange;
use crate::view::InventoryView;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

/// Whether to keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console<W: Write> {
    view: InventoryView,
    out: W,
    prompt: bool,
}

impl<W: Write> Console<W> {
    pub fn new(view: InventoryView, out: W) -> Self {
        Self {
            view,
            out,
            prompt: false,
        }
    }

    /// Prints `> ` before each line is read.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn view(&self) -> &InventoryView {
        &self.view
    }

    pub fn into_parts(self) -> (InventoryView, W) {
        (self.view, self.out)
    }

    /// Reads commands from `input` until end of input or `quit`.
    pub async fn run<R>(&mut self, input: R) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if self.execute_line(&line).await? == Flow::Quit {
                break;
            }
        }
        self.out.flush()
    }

    /// Parses and runs one line.
    pub async fn execute_line(&mut self, line: &str) -> io::Result<Flow> {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command).await,
            Err(e) => {
                self.report(&e)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub async fn execute(&mut self, command: Command) -> io::Result<Flow> {
        debug!(?command, "Executing");
        match command {
            Command::Empty => {}
            Command::List => self.show_table()?,
            Command::Refresh => match self.view.refresh().await {
                Ok(_) => self.show_table()?,
                Err(e) => self.report(&e)?,
            },
            Command::Search(query) => {
                self.view.set_query(query);
                self.show_table()?;
            }
            Command::New { name, quantity } => {
                let draft = self.view.draft_mut();
                draft.name = name;
                if let Some(quantity) = quantity {
                    draft.quantity = quantity;
                }
                let result = self.view.submit_draft().await;
                *self.view.draft_mut() = Default::default();
                self.show_change(result)?;
            }
            Command::Step { name, amount } => match self.view.set_increment(&name, amount) {
                Ok(()) => writeln!(self.out, "increment for {} is {}", name.trim(), amount)?,
                Err(e) => self.report(&e)?,
            },
            Command::Add { name, amount } => {
                let amount = amount.unwrap_or_else(|| self.view.increment_for(&name));
                let result = self.view.add_item(&name, amount).await;
                self.show_change(result)?;
            }
            Command::Remove { name, amount } => {
                let amount = amount.unwrap_or_else(|| self.view.increment_for(&name));
                let result = self.view.remove_item(&name, amount).await;
                self.show_change(result)?;
            }
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn show_change(&mut self, result: Result<StockChange, InventoryError>) -> io::Result<()> {
        match result {
            Ok(change) => {
                writeln!(self.out, "{}", change)?;
                if change.reached_store() {
                    self.show_table()?;
                }
                Ok(())
            }
            Err(e) => self.report(&e),
        }
    }

    fn show_table(&mut self) -> io::Result<()> {
        let view = &self.view;
        table::render(&mut self.out, &view.visible(), |item| {
            view.increment_for(item.name.as_str())
        })?;
        if !view.query().is_empty() {
            writeln!(self.out, "(search: {:?})", view.query())?;
        }
        Ok(())
    }

    fn report(&mut self, e: &InventoryError) -> io::Result<()> {
        warn!(error = %e, "Command failed");
        writeln!(self.out, "error: {}", e)
    }
}
