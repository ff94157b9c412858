//! Parsing of console input lines.

use crate::inventory_actor::InventoryError;
use std::str::FromStr;

/// One console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line.
    Empty,
    List,
    Refresh,
    /// Sets the search text; the empty string clears it.
    Search(String),
    /// Fills and submits the "new item" form.
    New { name: String, quantity: Option<u64> },
    /// Sets a row's increment factor.
    Step { name: String, amount: u64 },
    /// Row Add; `None` means "use the increment factor".
    Add { name: String, amount: Option<u64> },
    /// Row Remove; `None` means "use the increment factor".
    Remove { name: String, amount: Option<u64> },
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  list                     show the inventory table (filtered by the current search)
  refresh                  reload the inventory from the store
  search [text]            filter rows by name, ignoring case; no text clears the filter
  new <name> [quantity]    add a new item (quantity defaults to 1)
  step <name> <amount>     set the row's increment factor
  add <name> [amount]      add stock (amount defaults to the increment factor)
  remove <name> [amount]   remove stock; the item is deleted when it reaches zero
  help                     show this message
  quit                     leave
names may contain spaces; a trailing whole number is read as the amount";

impl FromStr for Command {
    type Err = InventoryError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Command::Empty);
        };
        let args: Vec<&str> = words.collect();

        match verb.to_lowercase().as_str() {
            "list" | "ls" => Ok(Command::List),
            "refresh" => Ok(Command::Refresh),
            "search" | "find" => Ok(Command::Search(args.join(" "))),
            "new" => {
                let (name, quantity) = split_amount(&args, "new <name> [quantity]")?;
                Ok(Command::New { name, quantity })
            }
            "step" => match split_amount(&args, "step <name> <amount>")? {
                (name, Some(amount)) => Ok(Command::Step { name, amount }),
                (_, None) => Err(usage("step <name> <amount>")),
            },
            "add" => {
                let (name, amount) = split_amount(&args, "add <name> [amount]")?;
                Ok(Command::Add { name, amount })
            }
            "remove" | "rm" => {
                let (name, amount) = split_amount(&args, "remove <name> [amount]")?;
                Ok(Command::Remove { name, amount })
            }
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(InventoryError::InvalidInput(format!(
                "unknown command {:?}, try \"help\"",
                other
            ))),
        }
    }
}

/// Splits `args` into a name and an optional trailing amount.
fn split_amount(args: &[&str], usage_line: &str) -> Result<(String, Option<u64>), InventoryError> {
    let (name_words, amount) = match args.split_last() {
        Some((last, rest)) if !rest.is_empty() && looks_numeric(last) => {
            let amount = last.parse::<u64>().map_err(|_| {
                InventoryError::InvalidInput(format!(
                    "amount must be a whole number of zero or more, got {:?}",
                    last
                ))
            })?;
            (rest, Some(amount))
        }
        _ => (args, None),
    };

    if name_words.is_empty() {
        return Err(usage(usage_line));
    }
    Ok((name_words.join(" "), amount))
}

fn looks_numeric(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
}

fn usage(line: &str) -> InventoryError {
    InventoryError::InvalidInput(format!("usage: {}", line))
}
