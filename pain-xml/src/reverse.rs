//! Reverse transformation: pain [`Document`] to domain [`Order`]
//!
//! Values are trusted as given: stated `NbOfTxs` and `CtrlSum` are not
//! cross-checked against the transaction nodes, and currencies are not
//! compared. Any malformed amount, date or timestamp aborts the whole
//! conversion; a partially populated order is never returned.

use crate::codec::{parse_amount, parse_date, parse_timestamp};
use crate::document::*;
use crate::types::{Order, Party, Transaction};
use crate::{Error, Result};

/// Extract the order carried by `document`
///
/// Multiple `PmtInf` blocks are flattened in document order; the order party
/// and execution date come from the first block.
pub fn to_order(document: &Document) -> Result<Order> {
    let header = document.group_header();
    let created_at = parse_timestamp(&header.creation_date_time)
        .map_err(|e| Error::conversion("GrpHdr/CreDtTm", e))?;

    let order = match &document.initiation {
        Initiation::DirectDebit(dd) => direct_debit_order(dd)?,
        Initiation::CreditTransfer(ct) => credit_transfer_order(ct)?,
    };

    tracing::debug!(
        "Converted document {} into order with {} transactions",
        header.message_id,
        order.transactions.len()
    );

    Ok(Order {
        created_at: Some(created_at),
        ..order
    })
}

fn direct_debit_order(dd: &CustomerDirectDebitInitiation) -> Result<Order> {
    let first = dd
        .payment_information
        .first()
        .ok_or_else(|| missing_payment_information(&dd.group_header))?;

    let execution_date = parse_date(&first.requested_collection_date)
        .map_err(|e| Error::conversion("PmtInf[0]/ReqdColltnDt", e))?;
    let order_party = party(&first.creditor, &first.creditor_account, Some(&first.creditor_agent));

    let mut transactions = Vec::new();
    for (p, pmt) in dd.payment_information.iter().enumerate() {
        for (t, tx) in pmt.transactions.iter().enumerate() {
            let path = format!("PmtInf[{}]/DrctDbtTxInf[{}]", p, t);
            let amount = parse_amount(&tx.instructed_amount.value)
                .map_err(|e| Error::conversion(format!("{}/InstdAmt", path), e))?;

            let mandate = &tx.direct_debit_transaction.mandate_related_information;
            let mandate_signature_date = parse_date(&mandate.date_of_signature)
                .map_err(|e| {
                    Error::conversion(format!("{}/DrctDbtTx/MndtRltdInf/DtOfSgntr", path), e)
                })?;

            transactions.push(Transaction {
                counterparty: party(&tx.debtor, &tx.debtor_account, Some(&tx.debtor_agent)),
                currency: tx.instructed_amount.currency.clone(),
                amount,
                end_to_end_id: Some(tx.payment_identification.end_to_end_id.clone()),
                remittance_info: tx
                    .remittance_information
                    .as_ref()
                    .map(RemittanceInformation::text),
                mandate_id: Some(mandate.mandate_id.clone()),
                mandate_signature_date: Some(mandate_signature_date),
            });
        }
    }

    Ok(Order::new(execution_date, order_party, transactions))
}

fn credit_transfer_order(ct: &CustomerCreditTransferInitiation) -> Result<Order> {
    let first = ct
        .payment_information
        .first()
        .ok_or_else(|| missing_payment_information(&ct.group_header))?;

    let execution_date = parse_date(&first.requested_execution_date)
        .map_err(|e| Error::conversion("PmtInf[0]/ReqdExctnDt", e))?;
    let order_party = party(&first.debtor, &first.debtor_account, Some(&first.debtor_agent));

    let mut transactions = Vec::new();
    for (p, pmt) in ct.payment_information.iter().enumerate() {
        for (t, tx) in pmt.transactions.iter().enumerate() {
            let instructed = &tx.amount.instructed_amount;
            let path = format!("PmtInf[{}]/CdtTrfTxInf[{}]/Amt/InstdAmt", p, t);
            let amount =
                parse_amount(&instructed.value).map_err(|e| Error::conversion(path, e))?;

            transactions.push(Transaction {
                counterparty: party(
                    &tx.creditor,
                    &tx.creditor_account,
                    tx.creditor_agent.as_ref(),
                ),
                currency: instructed.currency.clone(),
                amount,
                end_to_end_id: Some(tx.payment_identification.end_to_end_id.clone()),
                remittance_info: tx
                    .remittance_information
                    .as_ref()
                    .map(RemittanceInformation::text),
                mandate_id: None,
                mandate_signature_date: None,
            });
        }
    }

    Ok(Order::new(execution_date, order_party, transactions))
}

// The execution date lives on PmtInf, so a document without one has no date.
fn missing_payment_information(header: &GroupHeader) -> Error {
    tracing::warn!("Document {} has no PmtInf block", header.message_id);
    Error::MissingElement("PmtInf")
}

fn party(
    identification: &PartyIdentification,
    account: &CashAccount,
    agent: Option<&Agent>,
) -> Party {
    let address = identification.postal_address.clone().unwrap_or_default();
    let street = match address.street_name {
        Some(street) => street,
        None => address.address_lines.join(" "),
    };

    Party {
        name: identification.name.clone().unwrap_or_default(),
        street,
        postal_code: address.post_code.unwrap_or_default(),
        place: address.town_name.unwrap_or_default(),
        country: address.country.unwrap_or_default(),
        iban: account.id.iban.clone().unwrap_or_default(),
        bic: agent.and_then(Agent::bic).unwrap_or_default().to_string(),
    }
}
