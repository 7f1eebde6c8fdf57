//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities across the invoicing
//! system. Fixtures are consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A common IDR invoice total
    pub fn idr_invoice_total() -> Money {
        Money::new(dec!(100000), Currency::IDR)
    }

    /// A partial payment against [`Self::idr_invoice_total`]
    pub fn idr_partial_payment() -> Money {
        Money::new(dec!(30000), Currency::IDR)
    }

    /// A zero amount
    pub fn idr_zero() -> Money {
        Money::zero(Currency::IDR)
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }
}

/// Fixture for calendar test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The reference "today" used by date-sensitive tests
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// One day before [`Self::today`]
    pub fn yesterday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    /// Inside the default 7-day due-soon window
    pub fn in_three_days() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
    }

    /// Still inside the window
    pub fn in_five_days() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    /// Beyond the default window
    pub fn in_ten_days() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 25).unwrap()
    }
}

/// Fixture for identifier strings
pub struct IdFixtures;

impl IdFixtures {
    pub fn invoice_id() -> &'static str {
        "inv_01hxyztest0001"
    }

    pub fn client_id() -> &'static str {
        "cl_01hxyztest0001"
    }

    pub fn payment_id() -> &'static str {
        "pay_01hxyztest0001"
    }

    /// A fresh random id in the backend's opaque format
    pub fn random() -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}

/// Fixture for display strings
pub struct StringFixtures;

static INVOICE_NUMBER: Lazy<String> = Lazy::new(|| "INV-2024-0001".to_string());

impl StringFixtures {
    pub fn invoice_number() -> &'static str {
        &INVOICE_NUMBER
    }

    pub fn client_name() -> &'static str {
        "Acme Studio"
    }

    pub fn client_email() -> &'static str {
        "billing@acme.example"
    }
}

/// Randomized-but-plausible data for volume tests
pub struct FakeData;

impl FakeData {
    /// A client draft with a generated name and email
    pub fn client_draft() -> domain_party::ClientDraft {
        use fake::faker::company::en::CompanyName;
        use fake::faker::internet::en::SafeEmail;
        use fake::Fake;

        let name: String = CompanyName().fake();
        let email: String = SafeEmail().fake();
        domain_party::ClientDraft::new(name).with_email(email)
    }

    /// A product draft with a generated name
    pub fn product_draft() -> domain_catalog::ProductDraft {
        use fake::faker::lorem::en::Word;
        use fake::Fake;

        let name: String = Word().fake();
        domain_catalog::ProductDraft::new(name, rust_decimal::Decimal::from(50_000))
    }
}
