use thiserror::Error;

use super::{Amount, AmountError, Cents, MAX_AMOUNT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("deposit must be positive")]
    NonPositive,

    #[error("deposit rounds to zero cents")]
    BelowOneCent,

    #[error("withdrawal cannot be negative")]
    Negative,

    #[error("insufficient funds: balance {balance}")]
    InsufficientFunds { balance: Cents },

    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error("balance would exceed {max} cents", max = MAX_AMOUNT)]
    Overflow,
}

/// The single in-memory account. Starts empty and never goes negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    balance: Cents,
}

impl Account {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    /// Validate a deposit and return the cents to add.
    /// Checks the sign, then the range, then that at least one cent remains.
    pub fn check_deposit(amount: Amount) -> Result<Cents, AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::NonPositive);
        }
        let cents = amount.to_cents()?;
        if cents == 0 {
            return Err(AccountError::BelowOneCent);
        }
        Ok(cents)
    }

    /// Validate a withdrawal against `balance` and return the cents to subtract.
    /// Checks the sign, then the funds on the unrounded amount, then the range.
    pub fn check_withdrawal(amount: Amount, balance: Cents) -> Result<Cents, AccountError> {
        if amount.is_negative() {
            return Err(AccountError::Negative);
        }
        if amount.exceeds(balance) {
            return Err(AccountError::InsufficientFunds { balance });
        }
        Ok(amount.to_cents()?)
    }

    /// Add `amount`. Returns the new balance.
    pub fn deposit(&mut self, amount: Amount) -> Result<Cents, AccountError> {
        let cents = Self::check_deposit(amount)?;
        let balance = self
            .balance
            .checked_add(cents)
            .filter(|b| *b <= MAX_AMOUNT)
            .ok_or(AccountError::Overflow)?;
        self.balance = balance;
        Ok(balance)
    }

    /// Subtract `amount`. Withdrawing more than the balance is refused,
    /// withdrawing exactly the balance empties the account.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Cents, AccountError> {
        let cents = Self::check_withdrawal(amount, self.balance)?;
        self.balance -= cents;
        Ok(self.balance)
    }
}
