//! Soft-delete visibility
//!
//! Categories and products are never physically removed: deletion stamps
//! `deletedAt` and list endpoints hide stamped records unless the caller
//! asks for them. Restore clears the stamp. Visibility is a query concern,
//! not a separate archive table.

use serde::{Deserialize, Serialize};

/// Which records a list request should return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Only records without a `deletedAt` stamp
    ActiveOnly,
    /// Stamped records included
    IncludeDeleted,
}

impl Visibility {
    /// Value for the `includeDeleted` query parameter
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Visibility::ActiveOnly => "false",
            Visibility::IncludeDeleted => "true",
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::ActiveOnly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_values() {
        assert_eq!(Visibility::ActiveOnly.as_query_value(), "false");
        assert_eq!(Visibility::IncludeDeleted.as_query_value(), "true");
    }

    #[test]
    fn test_default_hides_deleted() {
        assert_eq!(Visibility::default(), Visibility::ActiveOnly);
    }
}
