//! Strongly-typed identifiers for domain entities
//!
//! Every id in this system is assigned by the backend and treated as an
//! opaque string on this side of the wire; the client never mints or
//! interprets one. Newtype wrappers keep an `InvoiceId` from being handed
//! to a function expecting a `ClientId`.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a server-assigned identifier
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the raw identifier
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier is empty
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
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

// Invoicing domain identifiers
define_id!(InvoiceId);
define_id!(PaymentId);
define_id!(RecurringRuleId);

// Party domain identifiers
define_id!(ClientId);
define_id!(UserId);

// Catalog domain identifiers
define_id!(ProductId);
define_id!(CategoryId);
