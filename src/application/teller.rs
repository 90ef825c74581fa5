use tracing::debug;

use crate::domain::{format_currency, parse_amount, Account, Cents};

use super::AppError;

/// Render a balance for display, e.g. `$150.50`.
pub fn show_balance(balance: Cents) -> String {
    format_currency(balance)
}

/// Validate a deposit line and return the amount to add.
pub fn deposit_amount(input: &str) -> Result<Cents, AppError> {
    Ok(Account::check_deposit(parse_amount(input)?)?)
}

/// Validate a withdrawal line against the current balance and return the
/// amount to subtract.
pub fn withdrawal_amount(input: &str, balance: Cents) -> Result<Cents, AppError> {
    Ok(Account::check_withdrawal(parse_amount(input)?, balance)?)
}

/// Owns the account and applies validated operations to it.
/// This is the interface the interactive session talks to.
#[derive(Debug, Default)]
pub struct Teller {
    account: Account,
}

impl Teller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Cents {
        self.account.balance()
    }

    pub fn show_balance(&self) -> String {
        show_balance(self.balance())
    }

    /// Deposit the amount on `input`. Returns the new balance.
    pub fn deposit(&mut self, input: &str) -> Result<Cents, AppError> {
        let amount = parse_amount(input)?;
        let balance = self.account.deposit(amount)?;
        debug!(amount = amount.value, balance, "deposit accepted");
        Ok(balance)
    }

    /// Withdraw the amount on `input`. Returns the new balance.
    pub fn withdraw(&mut self, input: &str) -> Result<Cents, AppError> {
        let amount = parse_amount(input)?;
        let balance = self.account.withdraw(amount)?;
        debug!(amount = amount.value, balance, "withdrawal accepted");
        Ok(balance)
    }
}
