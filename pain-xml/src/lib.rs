//! SEPA pain message transformation
//!
//! Converts payment orders to ISO 20022 pain documents and back.
//!
//! # Supported Messages
//!
//! - **pain.001.001.03**: Customer Credit Transfer Initiation
//! - **pain.008.001.02**: Customer Direct Debit Initiation
//! - **pain.008.001.08**: Customer Direct Debit Initiation (`BICFI` agents)
//!
//! # Pipeline
//!
//! 1. **Build**: [`DocumentBuilder`] turns an [`Order`] into a [`Document`],
//!    deriving identifiers, counts and control sums
//! 2. **Encode**: [`to_xml_string`] writes the document as XML text
//! 3. **Parse**: [`from_xml_str`] reads XML text back into a [`Document`]
//! 4. **Extract**: [`to_order`] recovers the [`Order`] from a document
//!
//! Amounts travel as [`rust_decimal::Decimal`] and are rendered with exactly
//! two fraction digits, so control sums never drift.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use pain_xml::{
//!     to_document, to_order, to_xml_string, Order, Party, SchemaVersion, Transaction,
//! };
//! use rust_decimal::Decimal;
//!
//! fn main() -> pain_xml::Result<()> {
//!     let order = Order::new(
//!         NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
//!         Party::new("Jane Doe", "DE09876543210987654321", "GENODEF1M02"),
//!         vec![Transaction::new(
//!             Party::new("John Doe", "DE12345678901234567890", "GENODEF1M01"),
//!             "EUR",
//!             Decimal::new(10000, 2),
//!         )],
//!     );
//!
//!     let document = to_document(&order, SchemaVersion::Pain008V02)?;
//!     let xml = to_xml_string(&document, true)?;
//!     assert!(xml.contains("<CtrlSum>100.00</CtrlSum>"));
//!
//!     let recovered = to_order(&document)?;
//!     assert_eq!(recovered.transactions[0].amount, order.transactions[0].amount);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod builder;
pub mod codec;
pub mod config;
pub mod control_sum;
pub mod document;
pub mod error;
pub mod id;
pub mod reverse;
pub mod types;
pub mod xml;

pub use builder::{to_document, DocumentBuilder};
pub use codec::{
    parse_amount, parse_date, parse_timestamp, render_amount, render_date, render_timestamp,
};
pub use config::{Config, CreationTime};
pub use control_sum::{compute_control_sum, sum_amounts};
pub use document::{Document, Initiation, MessageKind, SchemaVersion};
pub use error::{Error, FormatError, FormatKind, RandomnessError, Result};
pub use id::{new_id, IdGenerator, SecureIdGenerator};
pub use reverse::to_order;
pub use types::{Order, Party, Transaction};
pub use xml::{from_xml_bytes, from_xml_str, to_xml_string};
