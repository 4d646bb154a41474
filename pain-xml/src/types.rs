//! Domain model, independent of any wire format

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A participant in a payment: name, postal address and bank coordinates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Name
    pub name: String,

    /// Street name, optionally with building number
    pub street: String,

    /// Postal code
    pub postal_code: String,

    /// Town name
    pub place: String,

    /// ISO 3166 alpha-2 country code
    pub country: String,

    /// International Bank Account Number (passed through unvalidated)
    pub iban: String,

    /// Bank Identifier Code (passed through unvalidated, may be empty)
    pub bic: String,
}

impl Party {
    /// Create a party with a name and bank coordinates only
    pub fn new(name: impl Into<String>, iban: impl Into<String>, bic: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iban: iban.into(),
            bic: bic.into(),
            ..Default::default()
        }
    }

    /// Set the postal address
    pub fn with_address(
        mut self,
        street: impl Into<String>,
        postal_code: impl Into<String>,
        place: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        self.street = street.into();
        self.postal_code = postal_code.into();
        self.place = place.into();
        self.country = country.into();
        self
    }
}

/// A single collection (direct debit) or payment (credit transfer)
///
/// The optional identifiers fall back to the legacy reuse policy when unset:
/// the counterparty name doubles as end-to-end id and remittance text, the
/// order party's IBAN as mandate id and the execution date as mandate
/// signature date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The other side of the payment (debtor for direct debit, creditor for
    /// credit transfer)
    pub counterparty: Party,

    /// ISO 4217 currency code
    pub currency: String,

    /// Amount, non-negative
    pub amount: Decimal,

    /// End-to-end reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_to_end_id: Option<String>,

    /// Unstructured remittance text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remittance_info: Option<String>,

    /// Direct debit mandate reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,

    /// Direct debit mandate signature date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandate_signature_date: Option<NaiveDate>,
}

impl Transaction {
    /// Create a transaction using the legacy identifier policy
    pub fn new(counterparty: Party, currency: impl Into<String>, amount: Decimal) -> Self {
        Self {
            counterparty,
            currency: currency.into(),
            amount,
            end_to_end_id: None,
            remittance_info: None,
            mandate_id: None,
            mandate_signature_date: None,
        }
    }

    /// Set an explicit end-to-end reference
    pub fn with_end_to_end_id(mut self, id: impl Into<String>) -> Self {
        self.end_to_end_id = Some(id.into());
        self
    }

    /// Set explicit remittance text
    pub fn with_remittance_info(mut self, text: impl Into<String>) -> Self {
        self.remittance_info = Some(text.into());
        self
    }

    /// Set an explicit mandate reference and signature date
    pub fn with_mandate(mut self, id: impl Into<String>, signed_on: NaiveDate) -> Self {
        self.mandate_id = Some(id.into());
        self.mandate_signature_date = Some(signed_on);
        self
    }
}

/// A batch of transactions executed on one date on behalf of one party
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Requested collection (direct debit) or execution (credit transfer) date
    pub execution_date: NaiveDate,

    /// Transactions in submission order
    pub transactions: Vec<Transaction>,

    /// Creditor for direct debit, debtor for credit transfer
    pub party: Party,

    /// Creation timestamp read from a parsed document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

impl Order {
    /// Create an order
    pub fn new(execution_date: NaiveDate, party: Party, transactions: Vec<Transaction>) -> Self {
        Self {
            execution_date,
            transactions,
            party,
            created_at: None,
        }
    }
}
