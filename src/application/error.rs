use thiserror::Error;

use crate::domain::{format_currency, AccountError, AmountError, Cents, ChoiceError};

/// Every recoverable failure of a menu iteration. The `Display` text is shown
/// to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid input. Please enter a number.")]
    InvalidInput,

    #[error("Invalid choice")]
    InvalidChoice(i64),

    #[error("Invalid input. Please enter a valid number.")]
    InvalidAmount,

    #[error("Amount must be positive.")]
    NonPositiveDeposit,

    #[error("Amount must be at least $0.01.")]
    BelowOneCent,

    #[error("Amount cannot be negative.")]
    NegativeWithdrawal,

    #[error("Insufficient funds! You only have {}", format_currency(*available))]
    InsufficientFunds { available: Cents },

    #[error("Amount is too large.")]
    AmountOutOfRange,
}

impl From<ChoiceError> for AppError {
    fn from(err: ChoiceError) -> Self {
        match err {
            ChoiceError::NotANumber => AppError::InvalidInput,
            ChoiceError::Unknown(n) => AppError::InvalidChoice(n),
        }
    }
}

impl From<AmountError> for AppError {
    fn from(err: AmountError) -> Self {
        match err {
            AmountError::InvalidFormat => AppError::InvalidAmount,
            AmountError::OutOfRange => AppError::AmountOutOfRange,
        }
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::NonPositive => AppError::NonPositiveDeposit,
            AccountError::BelowOneCent => AppError::BelowOneCent,
            AccountError::Negative => AppError::NegativeWithdrawal,
            AccountError::InsufficientFunds { balance } => {
                AppError::InsufficientFunds { available: balance }
            }
            AccountError::Amount(err) => err.into(),
            AccountError::Overflow => AppError::AmountOutOfRange,
        }
    }
}
