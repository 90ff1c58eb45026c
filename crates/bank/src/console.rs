use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;

use crate::bank::Bank;
use crate::cpf::Cpf;
use crate::error::BankError;
use crate::user::{Address, User};

const RULE_WIDTH: usize = 50;

const MENU: &str = "
+------------------------------------------------+
|               BANKING SYSTEM                   |
+------------------------------------------------+
|  [d]  Deposit                                  |
|  [s]  Withdraw                                 |
|  [e]  Statement                                |
|  [nu] New user                                 |
|  [nc] New account                              |
|  [lc] List accounts                            |
|  [lu] List users                               |
|  [q]  Quit                                     |
+------------------------------------------------+
=> ";

const USER_FIELDS: [&str; 7] = [
    "Full name: ",
    "Birth date (dd/mm/yyyy): ",
    "\n--- Address ---\nStreet: ",
    "Number: ",
    "District: ",
    "City: ",
    "State (abbreviation): ",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Deposit,
    Withdraw,
    Statement,
    NewUser,
    NewAccount,
    ListAccounts,
    ListUsers,
    Quit,
}

impl MenuOption {
    /// Options that act on the selected account.
    fn needs_account(self) -> bool {
        matches!(self, Self::Deposit | Self::Withdraw | Self::Statement)
    }
}

impl FromStr for MenuOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" => Ok(Self::Deposit),
            "s" => Ok(Self::Withdraw),
            "e" => Ok(Self::Statement),
            "nu" => Ok(Self::NewUser),
            "nc" => Ok(Self::NewAccount),
            "lc" => Ok(Self::ListAccounts),
            "lu" => Ok(Self::ListUsers),
            "q" => Ok(Self::Quit),
            other => Err(format!("unknown option '{}'", other)),
        }
    }
}

/// Accepts `10.50`, `10,50` and exponent forms such as `1e3`.
fn parse_amount(input: &str) -> Option<Decimal> {
    let normalized = input.trim().replace(',', ".");
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Interactive menu loop over any line-based input and output.
pub struct Console<R, W> {
    bank: Bank,
    input: R,
    output: W,
    current: Option<u32>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(bank: Bank, input: R, output: W) -> Self {
        Self {
            bank,
            input,
            output,
            current: None,
        }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Number of the account banking operations currently act on.
    pub fn current_account(&self) -> Option<u32> {
        self.current
    }

    pub fn into_parts(self) -> (Bank, W) {
        (self.bank, self.output)
    }

    /// Runs until the user quits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(line) = self.prompt(MENU)? else {
                tracing::debug!("Input closed, leaving");
                break;
            };

            match line.parse::<MenuOption>() {
                Ok(MenuOption::Quit) => break,
                Ok(option) => self.dispatch(option)?,
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected menu input");
                    writeln!(
                        self.output,
                        "\nInvalid operation! Please select a valid option."
                    )?;
                }
            }
        }

        writeln!(self.output, "\nThank you for using our system. Goodbye!")?;
        self.output.flush()
    }

    fn dispatch(&mut self, option: MenuOption) -> io::Result<()> {
        if option.needs_account() && self.current.is_none() && !self.select_account()? {
            return Ok(());
        }

        match option {
            MenuOption::Deposit => self.deposit(),
            MenuOption::Withdraw => self.withdraw(),
            MenuOption::Statement => self.statement(),
            MenuOption::NewUser => self.new_user(),
            MenuOption::NewAccount => self.new_account(),
            MenuOption::ListAccounts => self.list_accounts(),
            MenuOption::ListUsers => self.list_users(),
            MenuOption::Quit => Ok(()),
        }
    }

    /// Writes `label` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output, "\n{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.output, "{:^width$}", title, width = RULE_WIDTH)?;
        writeln!(self.output, "{}", "=".repeat(RULE_WIDTH))
    }

    fn failed(&mut self, error: &BankError) -> io::Result<()> {
        writeln!(self.output, "\nOperation failed! {}.", error)
    }

    /// Returns whether an account is selected afterwards.
    fn select_account(&mut self) -> io::Result<bool> {
        if self.bank.accounts().is_empty() {
            writeln!(
                self.output,
                "\nNo accounts registered! Open an account first."
            )?;
            return Ok(false);
        }

        writeln!(self.output, "\n--- Select an account ---")?;
        let Some(input) = self.prompt("Account number: ")? else {
            return Ok(false);
        };

        let Ok(number) = input.parse::<u32>() else {
            writeln!(self.output, "\nInvalid account number: '{}'.", input)?;
            return Ok(false);
        };

        let account = match self.bank.account(number) {
            Ok(account) => account,
            Err(e) => {
                self.failed(&e)?;
                return Ok(false);
            }
        };

        let holder = self
            .bank
            .holder(account)
            .map(|user| user.name.clone())
            .unwrap_or_default();
        writeln!(self.output, "\nSelected account: {} - {}", number, holder)?;
        self.current = Some(number);

        Ok(true)
    }

    fn read_amount(&mut self, label: &str) -> io::Result<Option<Decimal>> {
        let Some(input) = self.prompt(label)? else {
            return Ok(None);
        };

        match parse_amount(&input) {
            Some(amount) => Ok(Some(amount)),
            None => {
                writeln!(self.output, "\nInvalid amount: '{}'.", input)?;
                Ok(None)
            }
        }
    }

    fn deposit(&mut self) -> io::Result<()> {
        let Some(number) = self.current else {
            return Ok(());
        };
        let Some(amount) = self.read_amount("\nDeposit amount: R$ ")? else {
            return Ok(());
        };

        match self.bank.deposit(number, amount, now()) {
            Ok(_) => writeln!(
                self.output,
                "\nDeposit of R$ {:.2} completed successfully!",
                amount
            ),
            Err(e) => self.failed(&e),
        }
    }

    fn withdraw(&mut self) -> io::Result<()> {
        let Some(number) = self.current else {
            return Ok(());
        };
        let Some(amount) = self.read_amount("\nWithdrawal amount: R$ ")? else {
            return Ok(());
        };

        match self.bank.withdraw(number, amount, now()) {
            Ok(_) => writeln!(
                self.output,
                "\nWithdrawal of R$ {:.2} completed successfully!",
                amount
            ),
            Err(e) => self.failed(&e),
        }
    }

    fn statement(&mut self) -> io::Result<()> {
        let Some(number) = self.current else {
            return Ok(());
        };

        match self.bank.statement(number) {
            Ok(statement) => writeln!(self.output, "\n{}", statement),
            Err(e) => self.failed(&e),
        }
    }

    fn new_user(&mut self) -> io::Result<()> {
        self.header("NEW USER")?;

        let Some(input) = self.prompt("CPF (numbers only): ")? else {
            return Ok(());
        };
        let cpf = match Cpf::parse(&input) {
            Ok(cpf) => cpf,
            Err(e) => return self.failed(&e),
        };
        if self.bank.find_user(&cpf).is_some() {
            return self.failed(&BankError::DuplicateCpf);
        }

        let mut answers: [String; 7] = Default::default();
        for (answer, label) in answers.iter_mut().zip(USER_FIELDS) {
            match self.prompt(label)? {
                Some(line) => *answer = line,
                None => return Ok(()),
            }
        }

        let [name, birth_date, street, number, district, city, state] = answers;
        let user = User {
            name,
            birth_date,
            cpf,
            address: Address::new(street, number, district, city, &state),
        };

        match self.bank.register_user(user) {
            Ok(user) => writeln!(self.output, "\nUser {} registered successfully!", user.name),
            Err(e) => self.failed(&e),
        }
    }

    fn new_account(&mut self) -> io::Result<()> {
        self.header("NEW CHECKING ACCOUNT")?;

        let Some(input) = self.prompt("User CPF: ")? else {
            return Ok(());
        };
        let cpf = match Cpf::parse(&input) {
            Ok(cpf) => cpf,
            Err(e) => return self.failed(&e),
        };

        let (agency, number) = match self.bank.open_account(&cpf) {
            Ok(account) => (account.agency().to_string(), account.number()),
            Err(e) => return self.failed(&e),
        };
        let holder = self
            .bank
            .find_user(&cpf)
            .map(|user| user.name.clone())
            .unwrap_or_default();

        writeln!(self.output, "\nAccount created successfully!")?;
        writeln!(self.output, "Agency: {}", agency)?;
        writeln!(self.output, "Account: {}", number)?;
        writeln!(self.output, "Holder: {}", holder)
    }

    fn list_accounts(&mut self) -> io::Result<()> {
        self.header("REGISTERED ACCOUNTS")?;

        if self.bank.accounts().is_empty() {
            return writeln!(self.output, "No accounts registered.");
        }

        for account in self.bank.accounts() {
            let holder = self
                .bank
                .holder(account)
                .map(|user| user.name.as_str())
                .unwrap_or_default();

            writeln!(
                self.output,
                "\nAgency: {} | Account: {}",
                account.agency(),
                account.number()
            )?;
            writeln!(self.output, "Holder: {}", holder)?;
            writeln!(self.output, "CPF: {}", account.holder())?;
            writeln!(self.output, "Balance: R$ {:.2}", account.balance())?;
            writeln!(self.output, "{}", "-".repeat(RULE_WIDTH))?;
        }

        Ok(())
    }

    fn list_users(&mut self) -> io::Result<()> {
        self.header("REGISTERED USERS")?;

        if self.bank.users().is_empty() {
            return writeln!(self.output, "No users registered.");
        }

        for user in self.bank.users() {
            writeln!(self.output, "\nName: {}", user.name)?;
            writeln!(self.output, "CPF: {}", user.cpf)?;
            writeln!(self.output, "Birth date: {}", user.birth_date)?;
            writeln!(self.output, "Address: {}", user.address)?;
            writeln!(self.output, "{}", "-".repeat(RULE_WIDTH))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(bank: Bank, script: &str) -> (Bank, String) {
        let mut console = Console::new(bank, Cursor::new(script.as_bytes()), Vec::new());
        console.run().unwrap();

        let (bank, output) = console.into_parts();
        (bank, String::from_utf8(output).unwrap())
    }

    const NEW_USER: &str = "nu\n123.456.789-01\nAna Souza\n10/02/1990\nRua A\n10\nCentro\nNatal\nrn\n";

    #[test]
    fn test_menu_option_parsing() {
        assert_eq!("D".parse::<MenuOption>(), Ok(MenuOption::Deposit));
        assert_eq!(" nu ".parse::<MenuOption>(), Ok(MenuOption::NewUser));
        assert_eq!("LC".parse::<MenuOption>(), Ok(MenuOption::ListAccounts));
        assert_eq!("q".parse::<MenuOption>(), Ok(MenuOption::Quit));
        assert!("x".parse::<MenuOption>().is_err());
        assert!("".parse::<MenuOption>().is_err());
    }

    #[test]
    fn test_parse_amount_accepts_comma() {
        assert_eq!(parse_amount("10,50"), Some(Decimal::new(1050, 2)));
        assert_eq!(parse_amount(" 7.25 "), Some(Decimal::new(725, 2)));
        assert_eq!(parse_amount("1e3"), Some(Decimal::from(1000)));
        assert_eq!(parse_amount("2,5E2"), Some(Decimal::from(250)));
        assert_eq!(parse_amount("ten"), None);
        assert_eq!(parse_amount("1e"), None);
    }

    #[test]
    fn test_end_of_input_quits() {
        let (_, output) = run_script(Bank::default(), "");
        assert!(output.contains("Goodbye"));
    }

    #[test]
    fn test_invalid_option_keeps_running() {
        let (_, output) = run_script(Bank::default(), "zz\nq\n");

        assert!(output.contains("Invalid operation!"));
        assert!(output.contains("Goodbye"));
    }

    #[test]
    fn test_banking_without_accounts() {
        let (_, output) = run_script(Bank::default(), "d\nq\n");
        assert!(output.contains("No accounts registered! Open an account first."));
    }

    #[test]
    fn test_full_session() {
        let script = format!("{NEW_USER}nc\n12345678901\nd\n1\n150,50\ns\n50\ne\nq\n");
        let (bank, output) = run_script(Bank::default(), &script);

        assert_eq!(bank.users().len(), 1);
        assert_eq!(bank.users()[0].address.state, "RN");
        assert_eq!(bank.account(1).unwrap().balance(), Decimal::new(10050, 2));

        assert!(output.contains("User Ana Souza registered successfully!"));
        assert!(output.contains("Agency: 0001"));
        assert!(output.contains("Selected account: 1 - Ana Souza"));
        assert!(output.contains("Deposit of R$ 150.50 completed successfully!"));
        assert!(output.contains("Withdrawal of R$ 50.00 completed successfully!"));
        assert!(output.contains("Current balance: R$     100.50"));
    }

    #[test]
    fn test_selection_is_kept_between_operations() {
        let script = format!("{NEW_USER}nc\n12345678901\nd\n1\n10\nd\n5\nq\n");
        let mut console = Console::new(Bank::default(), Cursor::new(script.into_bytes()), Vec::new());
        console.run().unwrap();

        assert_eq!(console.current_account(), Some(1));
        assert_eq!(
            console.bank().account(1).unwrap().balance(),
            Decimal::from(15)
        );
    }

    #[test]
    fn test_bad_numbers_do_not_crash() {
        let script = format!("{NEW_USER}nc\n12345678901\nd\nabc\nd\n1\nlots\nq\n");
        let (bank, output) = run_script(Bank::default(), &script);

        assert!(output.contains("Invalid account number: 'abc'."));
        assert!(output.contains("Invalid amount: 'lots'."));
        assert!(bank.account(1).unwrap().transactions().is_empty());
    }

    #[test]
    fn test_rejected_operations_are_reported() {
        let script = format!("{NEW_USER}nu\n12345678901\nnc\n99999999999\nnc\n12345678901\ns\n1\n10\nd\n-5\nq\n");
        let (bank, output) = run_script(Bank::default(), &script);

        assert!(output.contains("a user with this CPF is already registered"));
        assert!(output.contains("user not found, register the user first"));
        assert!(output.contains("insufficient balance"));
        assert!(output.contains("the amount informed is invalid"));
        assert_eq!(bank.accounts().len(), 1);
    }

    #[test]
    fn test_huge_deposits_do_not_crash() {
        let script = format!(
            "{NEW_USER}nc\n12345678901\nd\n1\n79228162514264337593543950335\nd\n79228162514264337593543950335\nq\n"
        );
        let (bank, output) = run_script(Bank::default(), &script);

        assert!(output.contains("the amount would overflow the account balance"));
        assert!(output.contains("Goodbye"));
        assert_eq!(bank.account(1).unwrap().balance(), Decimal::MAX);
        assert_eq!(bank.account(1).unwrap().transactions().len(), 1);
    }

    #[test]
    fn test_listings() {
        let (_, empty) = run_script(Bank::default(), "lu\nlc\nq\n");
        assert!(empty.contains("No users registered."));
        assert!(empty.contains("No accounts registered."));

        let script = format!("{NEW_USER}nc\n12345678901\nlu\nlc\nq\n");
        let (_, output) = run_script(Bank::default(), &script);

        assert!(output.contains("CPF: 123.456.789-01"));
        assert!(output.contains("Address: Rua A, 10 - Centro - Natal/RN"));
        assert!(output.contains("Agency: 0001 | Account: 1"));
        assert!(output.contains("Balance: R$ 0.00"));
    }
}
