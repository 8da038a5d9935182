// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Validity
//!

/// Used to indicate the synchronous validity of something (i.e. the aspects of
/// validity that can be checked straight away, such as its format)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValiditySynchronous {
    Valid,
    Invalid(String),
}

impl ValiditySynchronous {
    /// Why it's invalid (`None` if valid)
    pub fn invalid_msg(&self) -> Option<&str> {
        match self {
            ValiditySynchronous::Invalid(invalid_msg) => Some(invalid_msg),
            ValiditySynchronous::Valid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValiditySynchronous::Valid)
    }
}

/// Implementing types can be validated in their structure/format/etc.  For
/// example, the text typed into a date input may or may not be a date.
pub trait ValidSynchronous {
    /// Is the data synchronously valid
    fn is_valid_synchronous(&self) -> bool {
        self.validity_synchronous().is_valid()
    }

    /// Re-run the synchronous validation checks
    fn update_validity_synchronous(&mut self);

    /// Get the synchronous validity ([`ValiditySynchronous`])
    fn validity_synchronous(&self) -> ValiditySynchronous;
}
