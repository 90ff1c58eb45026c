//! Console simulation of a small bank: users, checking accounts, deposits,
//! withdrawals and statements, all held in a [`Bank`] session.

pub mod account;
pub mod bank;
pub mod console;
pub mod cpf;
pub mod error;
pub mod user;

pub use account::{Account, Limits, Statement, Transaction, TransactionKind};
pub use bank::Bank;
pub use console::Console;
pub use cpf::Cpf;
pub use error::{BankError, Result};
pub use user::{Address, User};
