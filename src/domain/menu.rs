use thiserror::Error;

/// One of the four operations offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowBalance,
    Deposit,
    Withdraw,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::ShowBalance,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> i64 {
        match self {
            MenuChoice::ShowBalance => 1,
            MenuChoice::Deposit => 2,
            MenuChoice::Withdraw => 3,
            MenuChoice::Exit => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ShowBalance => "Show balance",
            MenuChoice::Deposit => "Deposit Money",
            MenuChoice::Withdraw => "Withdraw Money",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn from_number(n: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.number() == n)
    }
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("not an integer")]
    NotANumber,

    #[error("no menu entry {0}")]
    Unknown(i64),
}

/// Parse a full line as a menu choice. The line must be an integer literal
/// (digits with an optional leading `-`) and nothing else.
pub fn parse_choice(input: &str) -> Result<MenuChoice, ChoiceError> {
    if input.starts_with('+') {
        return Err(ChoiceError::NotANumber);
    }
    let n: i64 = input.parse().map_err(|_| ChoiceError::NotANumber)?;
    MenuChoice::from_number(n).ok_or(ChoiceError::Unknown(n))
}
