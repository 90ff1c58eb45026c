use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::account::{Account, Limits, Statement};
use crate::cpf::Cpf;
use crate::error::{BankError, Result};
use crate::user::User;

pub const DEFAULT_AGENCY: &str = "0001";

/// Session state: every user and account lives here for the lifetime of one run.
#[derive(Debug, Clone)]
pub struct Bank {
    agency: String,
    limits: Limits,
    users: Vec<User>,
    accounts: Vec<Account>,
}

impl Default for Bank {
    fn default() -> Self {
        Self::new(DEFAULT_AGENCY, Limits::default())
    }
}

impl Bank {
    pub fn new(agency: impl Into<String>, limits: Limits) -> Self {
        Self {
            agency: agency.into(),
            limits,
            users: Vec::new(),
            accounts: Vec::new(),
        }
    }

    pub fn agency(&self) -> &str {
        &self.agency
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn find_user(&self, cpf: &Cpf) -> Option<&User> {
        self.users.iter().find(|user| &user.cpf == cpf)
    }

    pub fn register_user(&mut self, user: User) -> Result<&User> {
        if self.find_user(&user.cpf).is_some() {
            return Err(BankError::DuplicateCpf);
        }

        tracing::debug!(cpf = %user.cpf, "Registering user");
        self.users.push(user);
        Ok(&self.users[self.users.len() - 1])
    }

    /// Opens a checking account for an existing user. Numbers start at 1.
    pub fn open_account(&mut self, cpf: &Cpf) -> Result<&Account> {
        if self.find_user(cpf).is_none() {
            return Err(BankError::UserNotFound);
        }

        let number = self.accounts.len() as u32 + 1;
        tracing::debug!(account = number, cpf = %cpf, "Opening account");
        self.accounts
            .push(Account::new(self.agency.clone(), number, cpf.clone()));

        Ok(&self.accounts[self.accounts.len() - 1])
    }

    pub fn account(&self, number: u32) -> Result<&Account> {
        self.accounts
            .iter()
            .find(|account| account.number() == number)
            .ok_or(BankError::AccountNotFound(number))
    }

    fn account_mut(&mut self, number: u32) -> Result<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or(BankError::AccountNotFound(number))
    }

    pub fn holder(&self, account: &Account) -> Option<&User> {
        self.find_user(account.holder())
    }

    pub fn deposit(&mut self, number: u32, amount: Decimal, at: NaiveDateTime) -> Result<Decimal> {
        let balance = self.account_mut(number)?.deposit(amount, at)?;
        tracing::debug!(account = number, %amount, %balance, "Deposit");
        Ok(balance)
    }

    pub fn statement(&self, number: u32) -> Result<Statement<'_>> {
        Ok(self.account(number)?.statement())
    }

    pub fn withdraw(&mut self, number: u32, amount: Decimal, at: NaiveDateTime) -> Result<Decimal> {
        let limits = self.limits;
        let balance = self.account_mut(number)?.withdraw(amount, &limits, at)?;
        tracing::debug!(account = number, %amount, %balance, "Withdrawal");
        Ok(balance)
    }
}
