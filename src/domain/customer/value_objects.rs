use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Customer Value Objects
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("Street is required")]
    EmptyStreet,

    #[error("Number must be greater than zero")]
    InvalidNumber,

    #[error("Zip is required")]
    EmptyZip,

    #[error("City is required")]
    EmptyCity,
}

/// Customer address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, AddressError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), AddressError> {
        if self.street.is_empty() {
            return Err(AddressError::EmptyStreet);
        }
        if self.number == 0 {
            return Err(AddressError::InvalidNumber);
        }
        if self.zip.is_empty() {
            return Err(AddressError::EmptyZip);
        }
        if self.city.is_empty() {
            return Err(AddressError::EmptyCity);
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_display() {
        let address = Address::new("Street 1", 123, "13330-250", "São Paulo").unwrap();
        assert_eq!(address.to_string(), "Street 1, 123, 13330-250 São Paulo");
    }

    #[test]
    fn test_address_requires_every_field() {
        assert_eq!(Address::new("", 1, "z", "c"), Err(AddressError::EmptyStreet));
        assert_eq!(Address::new("s", 0, "z", "c"), Err(AddressError::InvalidNumber));
        assert_eq!(Address::new("s", 1, "", "c"), Err(AddressError::EmptyZip));
        assert_eq!(Address::new("s", 1, "z", ""), Err(AddressError::EmptyCity));
    }

    #[test]
    fn test_address_error_messages() {
        assert_eq!(AddressError::EmptyStreet.to_string(), "Street is required");
        assert_eq!(AddressError::EmptyCity.to_string(), "City is required");
    }
}
