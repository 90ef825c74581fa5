// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use coffer::{Cents, Session};

/// Output and final balance of one scripted session
pub struct Transcript {
    pub output: String,
    pub balance: Cents,
}

impl Transcript {
    /// Number of times the menu was printed
    pub fn menu_count(&self) -> usize {
        self.output.matches("4. Exit\n").count()
    }

    /// Every "Your balance is: ..." amount, in order
    pub fn balances(&self) -> Vec<&str> {
        self.output
            .lines()
            .filter_map(|line| line.strip_prefix("Your balance is: "))
            .collect()
    }

    pub fn last_balance(&self) -> Option<&str> {
        self.balances().last().copied()
    }
}

/// Helper to run a session over the given input lines
pub fn run_script(lines: &[&str]) -> Result<Transcript> {
    let mut input = lines.join("\n");
    input.push('\n');
    run_raw(&input)
}

/// Helper to run a session over raw input bytes
pub fn run_raw(input: &str) -> Result<Transcript> {
    let mut output = Vec::new();
    let balance = Session::new(input.as_bytes(), &mut output).run()?;
    Ok(Transcript {
        output: String::from_utf8(output)?,
        balance,
    })
}
