use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BankError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("the amount informed is invalid")]
    InvalidAmount,

    #[error("the amount would overflow the account balance")]
    AmountTooLarge,

    #[error("insufficient balance")]
    InsufficientFunds,

    #[error("amount exceeds the withdrawal limit of R$ {limit:.2}")]
    LimitExceeded { limit: Decimal },

    #[error("maximum number of withdrawals ({max}) reached")]
    TooManyWithdrawals { max: u32 },

    #[error("CPF must contain 11 digits")]
    InvalidCpf,

    #[error("a user with this CPF is already registered")]
    DuplicateCpf,

    #[error("user not found, register the user first")]
    UserNotFound,

    #[error("account {0} not found")]
    AccountNotFound(u32),
}
