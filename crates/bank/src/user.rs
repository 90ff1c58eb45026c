use std::fmt;

use crate::cpf::Cpf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    /// Two-letter state code, upper case
    pub state: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        district: impl Into<String>,
        city: impl Into<String>,
        state: &str,
    ) -> Self {
        Self {
            street: street.into(),
            number: number.into(),
            district: district.into(),
            city: city.into(),
            state: state.trim().to_uppercase(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} - {} - {}/{}",
            self.street, self.number, self.district, self.city, self.state
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    /// As typed by the user, `dd/mm/yyyy`
    pub birth_date: String,
    pub cpf: Cpf,
    pub address: Address,
}
