//! End-to-end tests: order to XML text and back

use chrono::NaiveDate;
use pain_xml::{
    from_xml_bytes, from_xml_str, to_document, to_order, to_xml_string, Config, CreationTime,
    DocumentBuilder, Error, FormatKind, Order, Party, SchemaVersion, Transaction,
};
use rust_decimal::Decimal;

fn john_and_jane() -> Order {
    Order::new(
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
        Party::new("Jane Doe", "DE09876543210987654321", "GENODEF1M02")
            .with_address("Main Street 2", "54321", "Big City", "DE"),
        vec![Transaction::new(
            Party::new("John Doe", "DE12345678901234567890", "GENODEF1M01")
                .with_address("Main Street 1", "12345", "Small Town", "DE"),
            "EUR",
            Decimal::new(10000, 2),
        )],
    )
}

#[test]
fn test_direct_debit_document() {
    let config = Config {
        creation_time: CreationTime::ExecutionDate,
        ..Config::for_version(SchemaVersion::Pain008V02)
    };
    let document = DocumentBuilder::new(config).build(&john_and_jane()).unwrap();
    let xml = to_xml_string(&document, true).unwrap();

    assert!(xml.contains("<CreDtTm>2024-03-07T00:00:00</CreDtTm>"));
    assert!(xml.contains("<NbOfTxs>1</NbOfTxs>"));
    assert!(xml.contains("<CtrlSum>100.00</CtrlSum>"));
    assert!(xml.contains("<PmtMtd>DD</PmtMtd>"));
    assert!(xml.contains("<ReqdColltnDt>2024-03-07</ReqdColltnDt>"));
    assert!(xml.contains("<SeqTp>FRST</SeqTp>"));
    assert!(xml.contains("<MndtId>DE09876543210987654321</MndtId>"));
    assert!(xml.contains("<DtOfSgntr>2024-03-07</DtOfSgntr>"));
    assert!(xml.contains("<EndToEndId>John Doe</EndToEndId>"));
    assert!(xml.contains("<Ustrd>John Doe</Ustrd>"));
    assert!(xml.contains("<TwnNm>Small Town</TwnNm>"));
    assert!(xml.contains("\n        <InstdAmt Ccy=\"EUR\">100.00</InstdAmt>\n"));

    let order = to_order(&from_xml_str(&xml).unwrap()).unwrap();
    assert_eq!(order.execution_date, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
    assert_eq!(order.party, john_and_jane().party);
    assert_eq!(order.transactions.len(), 1);

    let tx = &order.transactions[0];
    assert_eq!(tx.counterparty.name, "John Doe");
    assert_eq!(tx.counterparty.iban, "DE12345678901234567890");
    assert_eq!(tx.counterparty.bic, "GENODEF1M01");
    assert_eq!(tx.currency, "EUR");
    assert_eq!(tx.amount, Decimal::new(10000, 2));
}

#[test]
fn test_credit_transfer_document() {
    let document = to_document(&john_and_jane(), SchemaVersion::Pain001V03).unwrap();
    let xml = to_xml_string(&document, false).unwrap();

    assert!(xml.contains(r#"xmlns="urn:iso:std:iso:20022:tech:xsd:pain.001.001.03""#));
    assert!(xml.contains("<PmtMtd>TRF</PmtMtd>"));
    assert!(xml.contains("<ReqdExctnDt>2024-03-07</ReqdExctnDt>"));
    assert!(xml.contains("<Dbtr><Nm>Jane Doe</Nm>"));
    assert!(!xml.contains("<MndtRltdInf>"));
    assert!(!xml.contains("<SeqTp>"));

    let order = to_order(&from_xml_bytes(xml.as_bytes()).unwrap()).unwrap();
    assert_eq!(order.party.name, "Jane Doe");
    assert_eq!(order.transactions[0].counterparty.name, "John Doe");
    assert_eq!(order.transactions[0].mandate_id, None);
}

#[test]
fn test_large_batch_control_sum() {
    let mut order = john_and_jane();
    let template = order.transactions[0].clone();
    order.transactions = (1..=250)
        .map(|cents| Transaction {
            amount: Decimal::new(cents, 2),
            ..template.clone()
        })
        .collect();

    let document = to_document(&order, SchemaVersion::Pain008V08).unwrap();
    let header = document.group_header();
    // 1 + 2 + ... + 250 cents
    assert_eq!(header.control_sum.as_deref(), Some("313.75"));
    assert_eq!(header.number_of_transactions, "250");

    let xml = to_xml_string(&document, true).unwrap();
    let recovered = to_order(&from_xml_str(&xml).unwrap()).unwrap();
    assert_eq!(recovered.transactions.len(), 250);
    assert_eq!(recovered.transactions[249].amount, Decimal::new(250, 2));
}

#[test]
fn test_malformed_creation_time_in_xml() {
    let document = to_document(&john_and_jane(), SchemaVersion::Pain008V02).unwrap();
    let xml = to_xml_string(&document, true).unwrap();
    let created = document.group_header().creation_date_time.clone();
    let tampered = xml.replace(&created, "07.03.2024 09:15");

    let parsed = from_xml_str(&tampered).unwrap();
    match to_order(&parsed) {
        Err(Error::Conversion { field, source }) => {
            assert_eq!(field, "GrpHdr/CreDtTm");
            assert_eq!(source.kind, FormatKind::Timestamp);
            assert_eq!(source.value, "07.03.2024 09:15");
        }
        other => panic!("expected conversion error, got {other:?}"),
    }
}

#[test]
fn test_malformed_amount_in_xml() {
    let document = to_document(&john_and_jane(), SchemaVersion::Pain008V02).unwrap();
    let xml = to_xml_string(&document, true).unwrap();
    let tampered = xml.replace(r#"Ccy="EUR">100.00<"#, r#"Ccy="EUR">1,000.00<"#);

    let err = to_order(&from_xml_str(&tampered).unwrap()).unwrap_err();
    assert!(matches!(
        err,
        Error::Conversion { ref field, .. } if field == "PmtInf[0]/DrctDbtTxInf[0]/InstdAmt"
    ));
}

#[test]
fn test_identifiers_are_unique_per_document() {
    let order = john_and_jane();
    let a = to_document(&order, SchemaVersion::Pain008V02).unwrap();
    let b = to_document(&order, SchemaVersion::Pain008V02).unwrap();
    assert_ne!(a.group_header().message_id, b.group_header().message_id);
}
