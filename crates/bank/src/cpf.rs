use std::fmt;
use std::str::FromStr;

use crate::error::BankError;

/// Brazilian taxpayer id, kept as its 11 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    pub const LENGTH: usize = 11;

    /// Strips punctuation and checks the digit count.
    pub fn parse(input: &str) -> Result<Self, BankError> {
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();

        if digits.len() == Self::LENGTH {
            Ok(Self(digits))
        } else {
            Err(BankError::InvalidCpf)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Cpf {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formats as `000.000.000-00`.
impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(f, "{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
    }
}
