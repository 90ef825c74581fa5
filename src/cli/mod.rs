use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::application::{AppError, Teller};
use crate::domain::{parse_choice, Cents, MenuChoice};
use crate::observability;

const BANNER: &str = "********************";

/// Coffer - a tiny interactive bank account
#[derive(Parser)]
#[command(name = "coffer")]
#[command(about = "Show, deposit and withdraw from an in-memory account through a text menu")]
#[command(version)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        observability::init(self.verbose);

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let balance = Session::new(stdin.lock(), stdout.lock()).run()?;
        debug!(balance, "session ended");
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum State {
    MenuPrompt,
    Dispatch(String),
    Exit,
}

/// One interactive run of the menu loop over any line reader and writer.
///
/// The session owns the teller (and so the balance) for its whole lifetime.
/// Bad input never ends it; only choice 4 or end of input does.
pub struct Session<R, W> {
    input: R,
    output: W,
    teller: Teller,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            teller: Teller::new(),
        }
    }

    /// Run until exit and return the final balance.
    pub fn run(mut self) -> Result<Cents> {
        let mut state = State::MenuPrompt;
        while state != State::Exit {
            state = match state {
                State::MenuPrompt => self.prompt_menu()?,
                State::Dispatch(line) => self.dispatch(&line)?,
                State::Exit => State::Exit,
            };
        }
        self.output.flush().context("Failed to flush output")?;
        Ok(self.teller.balance())
    }

    fn prompt_menu(&mut self) -> Result<State> {
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output, "Enter your choice number:")?;
        writeln!(self.output, "{BANNER}")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{choice}")?;
        }
        self.output.flush().context("Failed to flush output")?;

        Ok(match self.read_line()? {
            Some(line) => State::Dispatch(line),
            None => {
                debug!("end of input at menu");
                State::Exit
            }
        })
    }

    fn dispatch(&mut self, line: &str) -> Result<State> {
        let choice = match parse_choice(line) {
            Ok(choice) => choice,
            Err(err) => {
                let err = AppError::from(err);
                debug!(input = line, error = ?err, "menu input rejected");
                writeln!(self.output, "{err}")?;
                return Ok(State::MenuPrompt);
            }
        };
        debug!(?choice, "dispatching");

        match choice {
            MenuChoice::ShowBalance => self.print_balance()?,
            MenuChoice::Deposit => {
                let Some(line) = self.prompt_amount("Enter amount to be deposited: ")? else {
                    return Ok(State::Exit);
                };
                let result = self.teller.deposit(&line);
                self.report(result)?;
            }
            MenuChoice::Withdraw => {
                let Some(line) = self.prompt_amount("How much: ")? else {
                    return Ok(State::Exit);
                };
                let result = self.teller.withdraw(&line);
                self.report(result)?;
            }
            MenuChoice::Exit => return Ok(State::Exit),
        }
        Ok(State::MenuPrompt)
    }

    fn prompt_amount(&mut self, prompt: &str) -> Result<Option<String>> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush().context("Failed to flush output")?;
        let line = self.read_line()?;
        if line.is_none() {
            debug!("end of input at amount prompt, operation cancelled");
        }
        Ok(line)
    }

    fn report(&mut self, result: Result<Cents, AppError>) -> Result<()> {
        if let Err(err) = result {
            debug!(error = ?err, "operation rejected");
            writeln!(self.output, "{err}")?;
        }
        self.print_balance()
    }

    fn print_balance(&mut self) -> Result<()> {
        writeln!(self.output, "Your balance is: {}", self.teller.show_balance())?;
        Ok(())
    }

    /// Read one line without its terminator. `None` means input is closed.
    /// Bytes that are not UTF-8 are replaced, so such lines fail to parse.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
