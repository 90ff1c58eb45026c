use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt;

use crate::cpf::Cpf;
use crate::error::{BankError, Result};

const RULE_WIDTH: usize = 50;

/// Withdrawal rules applied to every account of a bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub per_withdrawal: Decimal,
    pub max_withdrawals: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            per_withdrawal: Decimal::from(500),
            max_withdrawals: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit:",
            Self::Withdrawal => "Withdrawal:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub at: NaiveDateTime,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12}R$ {:>10}  [{}]",
            self.kind.label(),
            format!("{:.2}", self.amount),
            self.at.format("%d/%m/%Y %H:%M")
        )
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    agency: String,
    number: u32,
    holder: Cpf,
    balance: Decimal,
    statement: Vec<Transaction>,
    withdrawals: u32,
}

impl Account {
    pub fn new(agency: impl Into<String>, number: u32, holder: Cpf) -> Self {
        Self {
            agency: agency.into(),
            number,
            holder,
            balance: Decimal::ZERO,
            statement: Vec::new(),
            withdrawals: 0,
        }
    }

    pub fn agency(&self) -> &str {
        &self.agency
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn holder(&self) -> &Cpf {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.statement
    }

    pub fn withdrawals(&self) -> u32 {
        self.withdrawals
    }

    /// Returns the new balance.
    pub fn deposit(&mut self, amount: Decimal, at: NaiveDateTime) -> Result<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount);
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(BankError::AmountTooLarge)?;
        self.statement.push(Transaction {
            kind: TransactionKind::Deposit,
            amount,
            at,
        });

        Ok(self.balance)
    }

    /// Returns the new balance. Checks run in a fixed order: balance, per-withdrawal
    /// limit, withdrawal count, then the amount itself.
    pub fn withdraw(&mut self, amount: Decimal, limits: &Limits, at: NaiveDateTime) -> Result<Decimal> {
        if amount > self.balance {
            return Err(BankError::InsufficientFunds);
        }
        if amount > limits.per_withdrawal {
            return Err(BankError::LimitExceeded {
                limit: limits.per_withdrawal,
            });
        }
        if self.withdrawals >= limits.max_withdrawals {
            return Err(BankError::TooManyWithdrawals {
                max: limits.max_withdrawals,
            });
        }
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount);
        }

        self.balance -= amount;
        self.withdrawals += 1;
        self.statement.push(Transaction {
            kind: TransactionKind::Withdrawal,
            amount,
            at,
        });

        Ok(self.balance)
    }

    pub fn statement(&self) -> Statement<'_> {
        Statement { account: self }
    }
}

/// Printable statement of an account.
pub struct Statement<'a> {
    account: &'a Account,
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "{:^width$}", "STATEMENT", width = RULE_WIDTH)?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;

        if self.account.statement.is_empty() {
            writeln!(f, "No transactions recorded.")?;
        } else {
            for transaction in &self.account.statement {
                writeln!(f, "{}", transaction)?;
            }
        }

        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(
            f,
            "Current balance: R$ {:>10}",
            format!("{:.2}", self.account.balance)
        )?;
        write!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}
