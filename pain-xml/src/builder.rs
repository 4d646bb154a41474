//! Forward transformation: domain [`Order`] to pain [`Document`]
//!
//! The builder derives everything a bank expects beyond the raw order:
//! identifiers, transaction counts, control sums at both header levels,
//! timestamps and the scheme constants from [`Config`].
//!
//! Where the domain model leaves a field open, the legacy reuse policy
//! applies: the counterparty name becomes end-to-end id and remittance text,
//! the order party's IBAN becomes mandate id and creditor scheme id, and the
//! execution date becomes the mandate signature date.

use crate::codec::{render_amount, render_date, render_timestamp};
use crate::config::{Config, CreationTime};
use crate::control_sum::compute_control_sum;
use crate::document::*;
use crate::error::FormatError;
use crate::id::{IdGenerator, SecureIdGenerator};
use crate::types::{Order, Party, Transaction};
use crate::xml::to_xml_string;
use crate::{Error, Result};
use chrono::{Local, NaiveDateTime, NaiveTime};
use std::sync::Arc;

/// Builds pain documents from orders
pub struct DocumentBuilder {
    config: Config,
    id_generator: Arc<dyn IdGenerator>,
    creation_time: Option<NaiveDateTime>,
}

impl std::fmt::Debug for DocumentBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentBuilder")
            .field("config", &self.config)
            .field("creation_time", &self.creation_time)
            .finish_non_exhaustive()
    }
}

impl DocumentBuilder {
    /// Create a builder drawing identifiers from the OS CSPRNG
    pub fn new(config: Config) -> Self {
        Self {
            config,
            id_generator: Arc::new(SecureIdGenerator),
            creation_time: None,
        }
    }

    /// Use a different identifier source
    pub fn with_id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    /// Pin the creation timestamp instead of applying the configured policy
    pub fn with_creation_time(mut self, creation_time: NaiveDateTime) -> Self {
        self.creation_time = Some(creation_time);
        self
    }

    /// Builder configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the document for `order`
    ///
    /// Fails if identifier generation fails ([`Error::Generation`]), if the
    /// control sum overflows ([`Error::Overflow`]) or if an amount cannot be
    /// rendered with two fractional digits ([`Error::Format`]).
    pub fn build(&self, order: &Order) -> Result<Document> {
        let version = self.config.schema_version;
        let control_sum = compute_control_sum(&order.transactions)?;

        let message_id = self.generate_id("message id")?;
        let payment_info_id = format!(
            "{}{}",
            self.config.payment_info_id_prefix,
            self.generate_id("payment information id")?
        );

        let number_of_transactions = order.transactions.len().to_string();

        let group_header = GroupHeader {
            message_id: message_id.clone(),
            creation_date_time: render_timestamp(self.resolve_creation_time(order)),
            number_of_transactions: number_of_transactions.clone(),
            control_sum: Some(control_sum.clone()),
            initiating_party: PartyIdentification {
                name: non_empty(&order.party.name),
                postal_address: None,
            },
        };

        let initiation = match version.kind() {
            MessageKind::DirectDebit => {
                let transactions = order
                    .transactions
                    .iter()
                    .map(|tx| direct_debit_transaction(order, tx, version))
                    .collect::<std::result::Result<Vec<_>, _>>()?;

                Initiation::DirectDebit(CustomerDirectDebitInitiation {
                    group_header,
                    payment_information: vec![DirectDebitPaymentInformation {
                        payment_information_id: payment_info_id,
                        payment_method: version.payment_method().to_string(),
                        batch_booking: self.config.batch_booking,
                        number_of_transactions: Some(number_of_transactions),
                        control_sum: Some(control_sum),
                        payment_type_information: self.payment_type_information(version.kind()),
                        requested_collection_date: render_date(order.execution_date),
                        creditor: party_identification(&order.party),
                        creditor_account: CashAccount::iban(order.party.iban.clone()),
                        creditor_agent: Agent::from_bic(&order.party.bic, version),
                        charge_bearer: self.charge_bearer(),
                        creditor_scheme_identification: Some(
                            self.creditor_scheme_identification(order),
                        ),
                        transactions,
                    }],
                })
            }
            MessageKind::CreditTransfer => {
                let transactions = order
                    .transactions
                    .iter()
                    .map(|tx| credit_transfer_transaction(tx, version))
                    .collect::<std::result::Result<Vec<_>, _>>()?;

                Initiation::CreditTransfer(CustomerCreditTransferInitiation {
                    group_header,
                    payment_information: vec![CreditTransferPaymentInformation {
                        payment_information_id: payment_info_id,
                        payment_method: version.payment_method().to_string(),
                        batch_booking: self.config.batch_booking,
                        number_of_transactions: Some(number_of_transactions),
                        control_sum: Some(control_sum),
                        payment_type_information: self.payment_type_information(version.kind()),
                        requested_execution_date: render_date(order.execution_date),
                        debtor: party_identification(&order.party),
                        debtor_account: CashAccount::iban(order.party.iban.clone()),
                        debtor_agent: Agent::from_bic(&order.party.bic, version),
                        charge_bearer: self.charge_bearer(),
                        transactions,
                    }],
                })
            }
        };

        tracing::info!(
            "Built {} document {} with {} transactions",
            version,
            message_id,
            order.transactions.len()
        );

        Ok(Document::new(version, initiation))
    }

    /// Build the document for `order` and serialize it, indenting per
    /// [`Config::pretty_print`]
    pub fn build_xml(&self, order: &Order) -> Result<String> {
        let document = self.build(order)?;
        to_xml_string(&document, self.config.pretty_print)
    }

    fn generate_id(&self, field: &'static str) -> Result<String> {
        self.id_generator.new_id().map_err(|source| {
            tracing::error!("Identifier generation failed for {}: {}", field, source);
            Error::Generation { field, source }
        })
    }

    fn resolve_creation_time(&self, order: &Order) -> NaiveDateTime {
        if let Some(pinned) = self.creation_time {
            return pinned;
        }
        match self.config.creation_time {
            CreationTime::Now => Local::now().naive_local(),
            CreationTime::ExecutionDate => order.execution_date.and_time(NaiveTime::MIN),
        }
    }

    fn charge_bearer(&self) -> Option<String> {
        self.config.charge_bearer.as_deref().and_then(non_empty)
    }

    fn payment_type_information(&self, kind: MessageKind) -> Option<PaymentTypeInformation> {
        let mut info = PaymentTypeInformation {
            service_level: non_empty(&self.config.service_level).map(Code::cd),
            ..Default::default()
        };

        if kind == MessageKind::DirectDebit {
            info.local_instrument = non_empty(&self.config.local_instrument).map(Code::cd);
            info.sequence_type = non_empty(&self.config.sequence_type);
        }

        if info == PaymentTypeInformation::default() {
            None
        } else {
            Some(info)
        }
    }

    fn creditor_scheme_identification(&self, order: &Order) -> SchemeIdentification {
        let creditor_id = self
            .config
            .creditor_scheme_id
            .clone()
            .unwrap_or_else(|| order.party.iban.clone());
        let mut scheme = SchemeIdentification::new(creditor_id, self.config.scheme_name.clone());
        if self.config.scheme_name.is_empty() {
            scheme.id.private_identification.other.scheme_name = None;
        }
        scheme
    }
}

/// Build a document with the default configuration for `version`
pub fn to_document(order: &Order, version: SchemaVersion) -> Result<Document> {
    DocumentBuilder::new(Config::for_version(version)).build(order)
}

fn direct_debit_transaction(
    order: &Order,
    tx: &Transaction,
    version: SchemaVersion,
) -> std::result::Result<DirectDebitTransactionInformation, FormatError> {
    let mandate_id = tx
        .mandate_id
        .clone()
        .unwrap_or_else(|| order.party.iban.clone());
    let signed_on = tx.mandate_signature_date.unwrap_or(order.execution_date);

    Ok(DirectDebitTransactionInformation {
        payment_identification: payment_identification(tx),
        instructed_amount: instructed_amount(tx)?,
        direct_debit_transaction: DirectDebitTransaction {
            mandate_related_information: MandateRelatedInformation {
                mandate_id,
                date_of_signature: render_date(signed_on),
            },
        },
        debtor_agent: Agent::from_bic(&tx.counterparty.bic, version),
        debtor: party_identification(&tx.counterparty),
        debtor_account: CashAccount::iban(tx.counterparty.iban.clone()),
        remittance_information: remittance_information(tx),
    })
}

fn credit_transfer_transaction(
    tx: &Transaction,
    version: SchemaVersion,
) -> std::result::Result<CreditTransferTransactionInformation, FormatError> {
    // CdtrAgt is optional for IBAN-only SEPA transfers
    let creditor_agent =
        non_empty(&tx.counterparty.bic).map(|bic| Agent::from_bic(&bic, version));

    Ok(CreditTransferTransactionInformation {
        payment_identification: payment_identification(tx),
        amount: AmountType {
            instructed_amount: instructed_amount(tx)?,
        },
        creditor_agent,
        creditor: party_identification(&tx.counterparty),
        creditor_account: CashAccount::iban(tx.counterparty.iban.clone()),
        remittance_information: remittance_information(tx),
    })
}

fn payment_identification(tx: &Transaction) -> PaymentIdentification {
    let end_to_end_id = tx
        .end_to_end_id
        .as_deref()
        .and_then(non_empty)
        .or_else(|| non_empty(&tx.counterparty.name))
        .unwrap_or_else(|| NOT_PROVIDED.to_string());

    PaymentIdentification {
        instruction_id: None,
        end_to_end_id,
    }
}

fn instructed_amount(tx: &Transaction) -> std::result::Result<CurrencyAndAmount, FormatError> {
    Ok(CurrencyAndAmount {
        currency: tx.currency.clone(),
        value: render_amount(tx.amount)?,
    })
}

fn remittance_information(tx: &Transaction) -> Option<RemittanceInformation> {
    let text = tx
        .remittance_info
        .as_deref()
        .unwrap_or(tx.counterparty.name.as_str());
    non_empty(text).map(|text| RemittanceInformation {
        unstructured: vec![text],
    })
}

fn party_identification(party: &Party) -> PartyIdentification {
    let address = PostalAddress {
        street_name: non_empty(&party.street),
        post_code: non_empty(&party.postal_code),
        town_name: non_empty(&party.place),
        country: non_empty(&party.country),
        address_lines: Vec::new(),
    };

    PartyIdentification {
        name: non_empty(&party.name),
        postal_address: if address.is_empty() { None } else { Some(address) },
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
