//! Strongly-typed business codes
//!
//! Records are identified by a composite key of a site and a business code.
//! Newtype wrappers keep a company code from being passed where an employee
//! code or a site id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_code {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a code from any string-like value
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the code as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the code is empty or whitespace only
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// Consumes the wrapper and returns the inner string
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_code!(SiteId);
define_code!(CompanyCode);
define_code!(EmployeeCode);

/// Composite identity of a stored record: a site plus a business code
///
/// Both halves are plain strings so the store layer can stay generic over
/// record types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    pub site_id: String,
    pub code: String,
}

impl RecordKey {
    /// Creates a key from a site and a business code
    pub fn new(site_id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            code: code.into(),
        }
    }

    /// Returns true if either half of the key is blank
    pub fn is_incomplete(&self) -> bool {
        self.site_id.trim().is_empty() || self.code.trim().is_empty()
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.site_id, self.code)
    }
}
