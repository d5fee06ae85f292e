use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub mod error;
pub mod registry;
#[cfg(test)]
mod tests;

pub use error::Error;
use error::ErrorKind;
pub use registry::StatusName;

type Result<T> = std::result::Result<T, Error>;

impl Display for StatusName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for StatusName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match Self::parse(name) {
            Some(status) => Ok(status),
            None => Err(Error::new(
                &format!("unrecognized status name {name}"),
                ErrorKind::UnknownName,
            )),
        }
    }
}

impl TryFrom<u16> for StatusName {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self> {
        match Self::from_code(code) {
            Some(status) => Ok(status),
            None => Err(Error::new(
                &format!("unregistered status code {code}"),
                ErrorKind::UnknownCode,
            )),
        }
    }
}

impl From<StatusName> for u16 {
    fn from(status: StatusName) -> Self {
        status.code()
    }
}
