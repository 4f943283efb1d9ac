//! Interactive menu shell
//!
//! One request per loop iteration: show the menu, read a choice, run the
//! matching flow, report any recoverable error and go back to the menu. The
//! loop ends only when the user picks Exit.

use std::io::{BufRead, Write};

use log::debug;

use crate::config::TrackerPaths;
use crate::display::format_expense_list;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{parse_date, Money, MoneyParseError};
use crate::reports::{by_category, by_period, total, Granularity};
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::storage::Storage;
use crate::store::ExpenseStore;

const MAIN_MENU: &str = "\n===== Personal Expense Tracker =====
1. Add Expense
2. View Summary
3. Delete Expense
4. Exit
";

const SUMMARY_MENU: &str = "\n---- Expense Summary ----
1. Total Spending
2. Spending by Category
3. Spending over Time (daily/monthly)
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Summary,
    Delete,
    Exit,
}

impl MenuChoice {
    fn parse(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::Add),
            "2" => Some(Self::Summary),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive console session
pub struct Shell<R, W> {
    input: R,
    output: W,
    store: ExpenseStore,
    storage: Storage,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Load the persisted expenses and build a shell around them
    ///
    /// Fails with `CorruptData` if the data file cannot be parsed; the file
    /// is not touched in that case.
    pub fn open(paths: &TrackerPaths, input: R, output: W) -> TrackerResult<Self> {
        let storage = Storage::new(paths.expenses_file());
        let store = ExpenseStore::from_expenses(storage.load()?);
        Ok(Self::new(input, output, store, storage))
    }

    pub fn new(input: R, output: W, store: ExpenseStore, storage: Storage) -> Self {
        Self {
            input,
            output,
            store,
            storage,
        }
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run the menu loop until the user exits
    ///
    /// Returns `InputClosed` if input ends first, and `Console` if the
    /// terminal itself fails.
    pub fn run(&mut self) -> TrackerResult<()> {
        loop {
            self.say(MAIN_MENU)?;
            let choice = self.prompt("Choose an option: ")?;

            let result = match MenuChoice::parse(&choice) {
                Some(MenuChoice::Add) => self.add_expense(),
                Some(MenuChoice::Summary) => self.view_summary(),
                Some(MenuChoice::Delete) => self.delete_expense(),
                Some(MenuChoice::Exit) => {
                    self.say("Exited successfully. Have a nice day!\n")?;
                    return Ok(());
                }
                None => Err(TrackerError::InvalidOption(choice)),
            };

            if let Err(err) = result {
                self.report(err)?;
            }
        }
    }

    fn add_expense(&mut self) -> TrackerResult<()> {
        let amount_text = self.prompt("Enter amount spent: ")?;
        let amount = parse_amount(&amount_text)?;

        let category = self.prompt("Enter category (Food, Transport, Entertainment, etc.): ")?;

        let date_text = self.prompt("Enter date (YYYY-MM-DD) or leave blank for today: ")?;
        let date = if date_text.is_empty() {
            None
        } else {
            Some(parse_date(&date_text).map_err(|e| TrackerError::InputValidation(e.to_string()))?)
        };

        let expense = ExpenseService::new(&mut self.store, &self.storage).add(
            CreateExpenseInput {
                amount,
                category,
                date,
            },
        )?;

        self.say(&format!("Expense added successfully: {}\n", expense))
    }

    fn view_summary(&mut self) -> TrackerResult<()> {
        if self.store.is_empty() {
            return self.say("No expenses recorded yet.\n");
        }

        self.say(SUMMARY_MENU)?;
        let choice = self.prompt("Choose an option: ")?;

        let text = match choice.as_str() {
            "1" => format!("\nTotal Spending: {}\n", total(self.store.all())?),
            "2" => format!(
                "\n{}",
                by_category(self.store.all())?.format_terminal("Spending by Category")
            ),
            "3" => {
                let granularity: Granularity =
                    self.prompt("View by (daily/monthly): ")?.parse()?;
                let breakdown = by_period(self.store.all(), granularity)?;
                format!(
                    "\n{}",
                    breakdown.format_terminal(&format!("Spending ({})", granularity))
                )
            }
            _ => return Err(TrackerError::InvalidOption(choice.clone())),
        };

        self.say(&text)
    }

    fn delete_expense(&mut self) -> TrackerResult<()> {
        if self.store.is_empty() {
            return self.say("No expenses to delete.\n");
        }

        let listing = format!("\n---- Expenses List ----\n{}", format_expense_list(&self.store));
        self.say(&listing)?;

        let position_text = self.prompt("\nEnter the expense number to delete: ")?;
        let number: i64 = position_text.parse().map_err(|_| {
            TrackerError::InputValidation(format!(
                "'{}' is not a valid number",
                position_text
            ))
        })?;
        let position = usize::try_from(number).map_err(|_| TrackerError::OutOfRange {
            position: number,
            size: self.store.len(),
        })?;

        let removed =
            ExpenseService::new(&mut self.store, &self.storage).delete(position)?;

        self.say(&format!("Deleted: {}\n", removed))
    }

    /// Print a recoverable error; anything else ends the session
    fn report(&mut self, err: TrackerError) -> TrackerResult<()> {
        if !err.is_recoverable() {
            return Err(err);
        }
        debug!("Request aborted: {:?}", err);

        let message = match &err {
            TrackerError::Io(_) | TrackerError::Json(_) => format!(
                "Could not save expenses: {}\nYour changes are kept for this session.\n",
                err
            ),
            _ => format!("{}\n", err),
        };
        self.say(&message)
    }

    fn say(&mut self, text: &str) -> TrackerResult<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| TrackerError::Console(e.to_string()))
    }

    /// Print a prompt and read one trimmed line
    fn prompt(&mut self, text: &str) -> TrackerResult<String> {
        self.say(text)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| TrackerError::Console(e.to_string()))?;
        if read == 0 {
            return Err(TrackerError::InputClosed);
        }

        Ok(line.trim().to_string())
    }
}

/// Parse a user-entered amount, which must be a positive number
fn parse_amount(text: &str) -> TrackerResult<Money> {
    let amount = Money::parse(text).map_err(|e| match e {
        MoneyParseError::InvalidFormat(_) => {
            TrackerError::InputValidation(format!("{}. Please enter a numeric amount", e))
        }
        MoneyParseError::OutOfRange(_) => TrackerError::InputValidation(e.to_string()),
    })?;
    if !amount.is_positive() {
        return Err(TrackerError::InputValidation(
            "amount must be greater than zero".into(),
        ));
    }
    Ok(amount)
}
