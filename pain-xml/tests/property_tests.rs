//! Property-based tests for transformation invariants
//!
//! These tests use proptest to verify:
//! - Round trip: order → document → XML → document → order keeps the payload
//! - Amount codec: rendering and parsing are inverse for two-digit amounts
//! - Control sum: header totals equal the exact sum of the transactions
//! - Identifiers: always 15 characters from [0-9a-z]

use chrono::NaiveDate;
use pain_xml::{
    compute_control_sum, from_xml_str, new_id, parse_amount, render_amount, to_order,
    to_xml_string, Config, DocumentBuilder, Order, Party, SchemaVersion, Transaction,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating amounts with two fraction digits
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_00i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn version_strategy() -> impl Strategy<Value = SchemaVersion> {
    prop_oneof![
        Just(SchemaVersion::Pain001V03),
        Just(SchemaVersion::Pain008V02),
        Just(SchemaVersion::Pain008V08),
    ]
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy for generating parties; the BIC may be empty
fn party_strategy() -> impl Strategy<Value = Party> {
    (
        "[A-Z][a-z]{1,10} [A-Z][a-z]{1,12}",
        "[A-Z]{2}[0-9]{2}[0-9A-Z]{12,26}",
        prop_oneof![Just(String::new()), "[A-Z]{6}[A-Z0-9]{2}([A-Z0-9]{3})?"],
        prop::option::of((
            "[A-Z][a-z]{2,12} [0-9]{1,3}",
            "[0-9]{4,5}",
            "[A-Z][a-z]{2,12}",
            "[A-Z]{2}",
        )),
    )
        .prop_map(|(name, iban, bic, address)| {
            let party = Party::new(name, iban, bic);
            match address {
                Some((street, postal_code, place, country)) => {
                    party.with_address(street, postal_code, place, country)
                }
                None => party,
            }
        })
}

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (
        party_strategy(),
        prop_oneof![Just("EUR"), Just("CHF"), Just("SEK")],
        amount_strategy(),
    )
        .prop_map(|(counterparty, currency, amount)| {
            Transaction::new(counterparty, currency, amount)
        })
}

fn order_strategy() -> impl Strategy<Value = Order> {
    (
        date_strategy(),
        party_strategy(),
        prop::collection::vec(transaction_strategy(), 1..8),
    )
        .prop_map(|(date, party, transactions)| Order::new(date, party, transactions))
}

fn build(order: &Order, version: SchemaVersion) -> pain_xml::Document {
    DocumentBuilder::new(Config::for_version(version))
        .build(order)
        .unwrap()
}

proptest! {
    /// Property: the payload of an order survives the full XML round trip
    #[test]
    fn prop_order_survives_xml_round_trip(
        order in order_strategy(),
        version in version_strategy(),
    ) {
        let document = build(&order, version);
        let xml = to_xml_string(&document, true).unwrap();
        let parsed = from_xml_str(&xml).unwrap();
        prop_assert_eq!(&parsed, &document);

        let recovered = to_order(&parsed).unwrap();
        prop_assert_eq!(recovered.execution_date, order.execution_date);
        prop_assert_eq!(&recovered.party, &order.party);
        prop_assert_eq!(recovered.transactions.len(), order.transactions.len());

        for (got, want) in recovered.transactions.iter().zip(&order.transactions) {
            prop_assert_eq!(&got.counterparty, &want.counterparty);
            prop_assert_eq!(&got.currency, &want.currency);
            prop_assert_eq!(got.amount, want.amount);
        }
    }

    /// Property: header totals match the transactions at both levels
    #[test]
    fn prop_header_totals(order in order_strategy(), version in version_strategy()) {
        let document = build(&order, version);
        let header = document.group_header();

        let expected: Decimal = order.transactions.iter().map(|tx| tx.amount).sum();
        let control_sum = compute_control_sum(&order.transactions).unwrap();
        prop_assert_eq!(header.control_sum.clone(), Some(render_amount(expected).unwrap()));
        prop_assert_eq!(header.control_sum.clone(), Some(control_sum));
        prop_assert_eq!(
            header.number_of_transactions.clone(),
            order.transactions.len().to_string()
        );
        prop_assert_eq!(document.transaction_count(), order.transactions.len());
    }

    /// Property: explicit identifiers are carried through unchanged
    #[test]
    fn prop_explicit_identifiers_preserved(
        order in order_strategy(),
        reference in "[A-Z0-9-]{1,35}",
        text in "[A-Za-z0-9]{1,20}( [A-Za-z0-9]{1,20}){0,3}",
        mandate in "[A-Z0-9]{1,35}",
        signed_on in date_strategy(),
    ) {
        let mut order = order;
        for tx in &mut order.transactions {
            *tx = tx
                .clone()
                .with_end_to_end_id(reference.clone())
                .with_remittance_info(text.clone())
                .with_mandate(mandate.clone(), signed_on);
        }

        let document = build(&order, SchemaVersion::Pain008V08);
        let recovered = to_order(&document).unwrap();

        for tx in &recovered.transactions {
            prop_assert_eq!(tx.end_to_end_id.as_deref(), Some(reference.as_str()));
            prop_assert_eq!(tx.remittance_info.as_deref(), Some(text.as_str()));
            prop_assert_eq!(tx.mandate_id.as_deref(), Some(mandate.as_str()));
            prop_assert_eq!(tx.mandate_signature_date, Some(signed_on));
        }
    }

    /// Property: pretty and compact output describe the same document
    #[test]
    fn prop_pretty_and_compact_agree(order in order_strategy(), version in version_strategy()) {
        let document = build(&order, version);
        let pretty = from_xml_str(&to_xml_string(&document, true).unwrap()).unwrap();
        let compact = from_xml_str(&to_xml_string(&document, false).unwrap()).unwrap();
        prop_assert_eq!(&pretty, &compact);
    }

    /// Property: rendering then parsing a two-digit amount is the identity
    #[test]
    fn prop_amount_codec_inverse(amount in amount_strategy()) {
        let rendered = render_amount(amount).unwrap();
        prop_assert_eq!(rendered.split('.').nth(1).map(str::len), Some(2));
        prop_assert_eq!(parse_amount(&rendered).unwrap(), amount);
    }

    /// Property: rendering rounds any scale to two fraction digits
    #[test]
    fn prop_amount_rendering_rounds(mantissa in 0i64..1_000_000_000i64, scale in 0u32..8) {
        let amount = Decimal::new(mantissa, scale);
        let parsed = parse_amount(&render_amount(amount).unwrap()).unwrap();
        prop_assert!((parsed - amount).abs() <= Decimal::new(5, 3));
    }

    /// Property: identifiers have a fixed length and alphabet
    #[test]
    fn prop_identifier_shape(_round in 0u8..32) {
        let id = new_id().unwrap();
        prop_assert_eq!(id.len(), 15);
        prop_assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
