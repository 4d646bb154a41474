//! Typed ISO 20022 pain document model
//!
//! One tree serves pain.001.001.03 (credit transfer) and pain.008.001.02 /
//! pain.008.001.08 (direct debit). Version differences are expressed through
//! [`SchemaVersion`] rather than duplicated struct sets. Every field maps to
//! its XML tag explicitly via `#[serde(rename = ...)]`; optional elements are
//! skipped when absent so no empty element is ever written.
//!
//! # Example Output
//!
//! ```xml
//! <Document xmlns="urn:iso:std:iso:20022:tech:xsd:pain.008.001.02">
//!   <CstmrDrctDbtInitn>
//!     <GrpHdr>
//!       <MsgId>k3j9x0c2m1q8z7a</MsgId>
//!       <CreDtTm>2024-03-07T09:15:00</CreDtTm>
//!       <NbOfTxs>1</NbOfTxs>
//!       <CtrlSum>100.00</CtrlSum>
//!       <InitgPty><Nm>Jane Doe</Nm></InitgPty>
//!     </GrpHdr>
//!     <PmtInf>...</PmtInf>
//!   </CstmrDrctDbtInitn>
//! </Document>
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Agent identification used when no BIC is known (SEPA IBAN-only rule)
pub const NOT_PROVIDED: &str = "NOTPROVIDED";

/// Message family of a schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// pain.001 Customer Credit Transfer Initiation
    CreditTransfer,
    /// pain.008 Customer Direct Debit Initiation
    DirectDebit,
}

/// Supported pain schema versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaVersion {
    /// pain.001.001.03
    #[serde(rename = "pain.001.001.03")]
    Pain001V03,
    /// pain.008.001.02
    #[serde(rename = "pain.008.001.02")]
    Pain008V02,
    /// pain.008.001.08
    #[serde(rename = "pain.008.001.08")]
    Pain008V08,
}

const NAMESPACE_PREFIX: &str = "urn:iso:std:iso:20022:tech:xsd:";

impl SchemaVersion {
    /// All supported versions
    pub const ALL: [SchemaVersion; 3] = [
        SchemaVersion::Pain001V03,
        SchemaVersion::Pain008V02,
        SchemaVersion::Pain008V08,
    ];

    /// Message identifier, e.g. `pain.008.001.02`
    pub fn message_id(&self) -> &'static str {
        match self {
            SchemaVersion::Pain001V03 => "pain.001.001.03",
            SchemaVersion::Pain008V02 => "pain.008.001.02",
            SchemaVersion::Pain008V08 => "pain.008.001.08",
        }
    }

    /// Value of the `xmlns` attribute on `Document`
    pub fn namespace(&self) -> String {
        format!("{}{}", NAMESPACE_PREFIX, self.message_id())
    }

    /// Resolve a version from a `Document` namespace URN
    pub fn from_namespace(ns: &str) -> Result<Self> {
        ns.trim()
            .strip_prefix(NAMESPACE_PREFIX)
            .and_then(|id| SchemaVersion::ALL.into_iter().find(|v| v.message_id() == id))
            .ok_or_else(|| Error::UnsupportedNamespace(ns.to_string()))
    }

    /// Credit transfer or direct debit
    pub fn kind(&self) -> MessageKind {
        match self {
            SchemaVersion::Pain001V03 => MessageKind::CreditTransfer,
            SchemaVersion::Pain008V02 | SchemaVersion::Pain008V08 => MessageKind::DirectDebit,
        }
    }

    /// `PmtMtd` code: `TRF` for credit transfer, `DD` for direct debit
    pub fn payment_method(&self) -> &'static str {
        match self.kind() {
            MessageKind::CreditTransfer => "TRF",
            MessageKind::DirectDebit => "DD",
        }
    }

    /// Whether agents carry `BICFI` (newer schemas) instead of `BIC`
    pub fn uses_bicfi(&self) -> bool {
        matches!(self, SchemaVersion::Pain008V08)
    }
}

impl std::fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message_id())
    }
}

impl std::str::FromStr for SchemaVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SchemaVersion::ALL
            .into_iter()
            .find(|v| v.message_id() == s)
            .ok_or_else(|| Error::Config(format!("Unknown schema version: {}", s)))
    }
}

/// Root `Document` element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Document")]
pub struct Document {
    /// Namespace URN naming the schema version
    #[serde(rename = "@xmlns")]
    pub xmlns: String,

    /// Credit transfer or direct debit body
    #[serde(rename = "$value")]
    pub initiation: Initiation,
}

/// Message body, named after the initiation element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Initiation {
    /// pain.001 body
    #[serde(rename = "CstmrCdtTrfInitn")]
    CreditTransfer(CustomerCreditTransferInitiation),

    /// pain.008 body
    #[serde(rename = "CstmrDrctDbtInitn")]
    DirectDebit(CustomerDirectDebitInitiation),
}

impl Document {
    /// Wrap an initiation under the namespace of `version`
    pub fn new(version: SchemaVersion, initiation: Initiation) -> Self {
        Self {
            xmlns: version.namespace(),
            initiation,
        }
    }

    /// Schema version declared by the namespace
    pub fn schema_version(&self) -> Result<SchemaVersion> {
        SchemaVersion::from_namespace(&self.xmlns)
    }

    /// Group header of either message family
    pub fn group_header(&self) -> &GroupHeader {
        match &self.initiation {
            Initiation::CreditTransfer(ct) => &ct.group_header,
            Initiation::DirectDebit(dd) => &dd.group_header,
        }
    }

    /// Number of transaction nodes actually present (ignores `NbOfTxs`)
    pub fn transaction_count(&self) -> usize {
        match &self.initiation {
            Initiation::CreditTransfer(ct) => ct
                .payment_information
                .iter()
                .map(|p| p.transactions.len())
                .sum(),
            Initiation::DirectDebit(dd) => dd
                .payment_information
                .iter()
                .map(|p| p.transactions.len())
                .sum(),
        }
    }
}

/// `CstmrCdtTrfInitn`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreditTransferInitiation {
    /// Message-level identification and totals
    #[serde(rename = "GrpHdr")]
    pub group_header: GroupHeader,

    /// Payment blocks, in document order
    #[serde(rename = "PmtInf", default)]
    pub payment_information: Vec<CreditTransferPaymentInformation>,
}

/// `CstmrDrctDbtInitn`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDirectDebitInitiation {
    /// Message-level identification and totals
    #[serde(rename = "GrpHdr")]
    pub group_header: GroupHeader,

    /// Payment blocks, in document order
    #[serde(rename = "PmtInf", default)]
    pub payment_information: Vec<DirectDebitPaymentInformation>,
}

/// `GrpHdr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupHeader {
    /// Unique message identifier
    #[serde(rename = "MsgId")]
    pub message_id: String,

    /// Creation timestamp, `YYYY-MM-DDTHH:MM:SS`
    #[serde(rename = "CreDtTm")]
    pub creation_date_time: String,

    /// Transaction count as decimal text
    #[serde(rename = "NbOfTxs")]
    pub number_of_transactions: String,

    /// Sum of instructed amounts in wire form
    #[serde(rename = "CtrlSum", skip_serializing_if = "Option::is_none")]
    pub control_sum: Option<String>,

    /// Party that created the message
    #[serde(rename = "InitgPty")]
    pub initiating_party: PartyIdentification,
}

/// `PmtInf` of a pain.001 message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditTransferPaymentInformation {
    /// Identifier of this payment block
    #[serde(rename = "PmtInfId")]
    pub payment_information_id: String,

    /// `TRF` or `DD`
    #[serde(rename = "PmtMtd")]
    pub payment_method: String,

    /// Book the block as one entry (`true`) or per transaction
    #[serde(rename = "BtchBookg", skip_serializing_if = "Option::is_none")]
    pub batch_booking: Option<bool>,

    /// Transaction count as decimal text
    #[serde(rename = "NbOfTxs", skip_serializing_if = "Option::is_none")]
    pub number_of_transactions: Option<String>,

    /// Sum of instructed amounts in wire form
    #[serde(rename = "CtrlSum", skip_serializing_if = "Option::is_none")]
    pub control_sum: Option<String>,

    /// Service level, instrument and sequence
    #[serde(rename = "PmtTpInf", skip_serializing_if = "Option::is_none")]
    pub payment_type_information: Option<PaymentTypeInformation>,

    /// Date the debtor account is debited
    #[serde(rename = "ReqdExctnDt")]
    pub requested_execution_date: String,

    /// Debtor name and address
    #[serde(rename = "Dbtr")]
    pub debtor: PartyIdentification,

    /// Debtor IBAN
    #[serde(rename = "DbtrAcct")]
    pub debtor_account: CashAccount,

    /// Debtor bank
    #[serde(rename = "DbtrAgt")]
    pub debtor_agent: Agent,

    /// Charge bearer code, e.g. `SLEV`
    #[serde(rename = "ChrgBr", skip_serializing_if = "Option::is_none")]
    pub charge_bearer: Option<String>,

    /// `CdtTrfTxInf` entries
    #[serde(rename = "CdtTrfTxInf", default)]
    pub transactions: Vec<CreditTransferTransactionInformation>,
}

/// `PmtInf` of a pain.008 message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectDebitPaymentInformation {
    /// Identifier of this payment block
    #[serde(rename = "PmtInfId")]
    pub payment_information_id: String,

    /// `TRF` or `DD`
    #[serde(rename = "PmtMtd")]
    pub payment_method: String,

    /// Book the block as one entry (`true`) or per transaction
    #[serde(rename = "BtchBookg", skip_serializing_if = "Option::is_none")]
    pub batch_booking: Option<bool>,

    /// Transaction count as decimal text
    #[serde(rename = "NbOfTxs", skip_serializing_if = "Option::is_none")]
    pub number_of_transactions: Option<String>,

    /// Sum of instructed amounts in wire form
    #[serde(rename = "CtrlSum", skip_serializing_if = "Option::is_none")]
    pub control_sum: Option<String>,

    /// Service level, instrument and sequence
    #[serde(rename = "PmtTpInf", skip_serializing_if = "Option::is_none")]
    pub payment_type_information: Option<PaymentTypeInformation>,

    /// Date the debtor account is collected from
    #[serde(rename = "ReqdColltnDt")]
    pub requested_collection_date: String,

    /// Creditor name and address
    #[serde(rename = "Cdtr")]
    pub creditor: PartyIdentification,

    /// Creditor IBAN
    #[serde(rename = "CdtrAcct")]
    pub creditor_account: CashAccount,

    /// Creditor bank
    #[serde(rename = "CdtrAgt")]
    pub creditor_agent: Agent,

    /// Charge bearer code, e.g. `SLEV`
    #[serde(rename = "ChrgBr", skip_serializing_if = "Option::is_none")]
    pub charge_bearer: Option<String>,

    /// SEPA creditor identifier
    #[serde(rename = "CdtrSchmeId", skip_serializing_if = "Option::is_none")]
    pub creditor_scheme_identification: Option<SchemeIdentification>,

    /// `DrctDbtTxInf` entries
    #[serde(rename = "DrctDbtTxInf", default)]
    pub transactions: Vec<DirectDebitTransactionInformation>,
}

/// `PmtTpInf`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentTypeInformation {
    /// `NORM` or `HIGH`
    #[serde(rename = "InstrPrty", skip_serializing_if = "Option::is_none")]
    pub instruction_priority: Option<String>,

    /// Usually `SEPA`
    #[serde(rename = "SvcLvl", skip_serializing_if = "Option::is_none")]
    pub service_level: Option<Code>,

    /// `CORE`, `B2B` or `COR1`
    #[serde(rename = "LclInstrm", skip_serializing_if = "Option::is_none")]
    pub local_instrument: Option<Code>,

    /// Sequence type; direct debit only
    #[serde(rename = "SeqTp", skip_serializing_if = "Option::is_none")]
    pub sequence_type: Option<String>,

    /// Purpose of the whole block
    #[serde(rename = "CtgyPurp", skip_serializing_if = "Option::is_none")]
    pub category_purpose: Option<Code>,
}

/// Code-or-proprietary choice (`SvcLvl`, `LclInstrm`, `CtgyPurp`, `SchmeNm`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Code {
    /// External code list value
    #[serde(rename = "Cd", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Free-form scheme value
    #[serde(rename = "Prtry", skip_serializing_if = "Option::is_none")]
    pub proprietary: Option<String>,
}

impl Code {
    /// `<Cd>` variant
    pub fn cd(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            proprietary: None,
        }
    }

    /// `<Prtry>` variant
    pub fn prtry(proprietary: impl Into<String>) -> Self {
        Self {
            code: None,
            proprietary: Some(proprietary.into()),
        }
    }
}

/// Party name and address (`InitgPty`, `Cdtr`, `Dbtr`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartyIdentification {
    /// Display name
    #[serde(rename = "Nm", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Structured or line-based address
    #[serde(rename = "PstlAdr", skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress>,
}

/// `PstlAdr`, in XSD element order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostalAddress {
    /// Street
    #[serde(rename = "StrtNm", skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,

    /// Post code
    #[serde(rename = "PstCd", skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,

    /// Town
    #[serde(rename = "TwnNm", skip_serializing_if = "Option::is_none")]
    pub town_name: Option<String>,

    /// ISO 3166 alpha-2 country code
    #[serde(rename = "Ctry", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Unstructured address lines
    #[serde(rename = "AdrLine", default, skip_serializing_if = "Vec::is_empty")]
    pub address_lines: Vec<String>,
}

impl PostalAddress {
    /// True when no component is present
    pub fn is_empty(&self) -> bool {
        self.street_name.is_none()
            && self.post_code.is_none()
            && self.town_name.is_none()
            && self.country.is_none()
            && self.address_lines.is_empty()
    }
}

/// `CdtrAcct` / `DbtrAcct`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashAccount {
    /// Account identification
    #[serde(rename = "Id")]
    pub id: AccountIdentification,

    /// Account currency, if stated
    #[serde(rename = "Ccy", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl CashAccount {
    /// Account identified by IBAN
    pub fn iban(iban: impl Into<String>) -> Self {
        Self {
            id: AccountIdentification {
                iban: Some(iban.into()),
                other: None,
            },
            currency: None,
        }
    }
}

/// Account `Id` choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountIdentification {
    /// IBAN
    #[serde(rename = "IBAN", skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,

    /// Non-IBAN account number
    #[serde(rename = "Othr", skip_serializing_if = "Option::is_none")]
    pub other: Option<GenericIdentification>,
}

/// `Othr` with a plain `Id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericIdentification {
    /// Identifier text
    #[serde(rename = "Id")]
    pub id: String,
}

/// Financial institution agent (`CdtrAgt`, `DbtrAgt`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Institution identification
    #[serde(rename = "FinInstnId")]
    pub financial_institution_id: FinancialInstitutionIdentification,
}

/// `FinInstnId`; `BIC` and `BICFI` are the same value under different schemas
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialInstitutionIdentification {
    /// BIC under pain.008.001.08
    #[serde(rename = "BICFI", skip_serializing_if = "Option::is_none")]
    pub bicfi: Option<String>,

    /// BIC under pain.001.001.03 and pain.008.001.02
    #[serde(rename = "BIC", skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,

    /// `NOTPROVIDED` when no BIC is known
    #[serde(rename = "Othr", skip_serializing_if = "Option::is_none")]
    pub other: Option<GenericIdentification>,
}

impl Agent {
    /// Agent for `bic` under the tag `version` expects; an empty BIC becomes
    /// `Othr/Id = NOTPROVIDED`
    pub fn from_bic(bic: &str, version: SchemaVersion) -> Self {
        let mut fin = FinancialInstitutionIdentification::default();
        if bic.is_empty() {
            fin.other = Some(GenericIdentification {
                id: NOT_PROVIDED.to_string(),
            });
        } else if version.uses_bicfi() {
            fin.bicfi = Some(bic.to_string());
        } else {
            fin.bic = Some(bic.to_string());
        }
        Self {
            financial_institution_id: fin,
        }
    }

    /// BIC under either tag, if any
    pub fn bic(&self) -> Option<&str> {
        let fin = &self.financial_institution_id;
        fin.bicfi.as_deref().or(fin.bic.as_deref())
    }
}

/// `CdtrSchmeId`: Id/PrvtId/Othr
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemeIdentification {
    /// Identification choice
    #[serde(rename = "Id")]
    pub id: SchemeIdentificationId,
}

/// `Id` of a creditor scheme identification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemeIdentificationId {
    /// Private identification
    #[serde(rename = "PrvtId")]
    pub private_identification: PrivateIdentification,
}

/// `PrvtId`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrivateIdentification {
    /// Identifier with scheme name
    #[serde(rename = "Othr")]
    pub other: SchemeOther,
}

/// `Othr` carrying the creditor identifier and its scheme name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemeOther {
    /// Creditor identifier
    #[serde(rename = "Id")]
    pub id: String,

    /// Scheme name, `Prtry` = "SEPA"
    #[serde(rename = "SchmeNm", skip_serializing_if = "Option::is_none")]
    pub scheme_name: Option<Code>,
}

impl SchemeIdentification {
    /// Creditor identifier under a proprietary scheme name (e.g. "SEPA")
    pub fn new(id: impl Into<String>, scheme_name: impl Into<String>) -> Self {
        Self {
            id: SchemeIdentificationId {
                private_identification: PrivateIdentification {
                    other: SchemeOther {
                        id: id.into(),
                        scheme_name: Some(Code::prtry(scheme_name)),
                    },
                },
            },
        }
    }

    /// The creditor identifier
    pub fn creditor_id(&self) -> &str {
        &self.id.private_identification.other.id
    }
}

/// `PmtId`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentIdentification {
    /// Point-to-point reference
    #[serde(rename = "InstrId", skip_serializing_if = "Option::is_none")]
    pub instruction_id: Option<String>,

    /// Reference passed unchanged to the counterparty
    #[serde(rename = "EndToEndId")]
    pub end_to_end_id: String,
}

/// Amount with `Ccy` attribute, text kept in wire form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyAndAmount {
    /// ISO 4217 currency code
    #[serde(rename = "@Ccy")]
    pub currency: String,

    /// Amount text with two fraction digits
    #[serde(rename = "$text")]
    pub value: String,
}

/// `Amt` wrapper of a credit transfer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmountType {
    /// Amount and currency to transfer
    #[serde(rename = "InstdAmt")]
    pub instructed_amount: CurrencyAndAmount,
}

/// `RmtInf`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemittanceInformation {
    /// Free-text lines
    #[serde(rename = "Ustrd", default, skip_serializing_if = "Vec::is_empty")]
    pub unstructured: Vec<String>,
}

impl RemittanceInformation {
    /// Unstructured lines joined by a single space
    pub fn text(&self) -> String {
        self.unstructured.join(" ")
    }
}

/// `CdtTrfTxInf`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditTransferTransactionInformation {
    /// Instruction and end-to-end references
    #[serde(rename = "PmtId")]
    pub payment_identification: PaymentIdentification,

    /// Instructed amount wrapper
    #[serde(rename = "Amt")]
    pub amount: AmountType,

    /// Creditor bank
    #[serde(rename = "CdtrAgt", skip_serializing_if = "Option::is_none")]
    pub creditor_agent: Option<Agent>,

    /// Creditor name and address
    #[serde(rename = "Cdtr")]
    pub creditor: PartyIdentification,

    /// Creditor IBAN
    #[serde(rename = "CdtrAcct")]
    pub creditor_account: CashAccount,

    /// Remittance text
    #[serde(rename = "RmtInf", skip_serializing_if = "Option::is_none")]
    pub remittance_information: Option<RemittanceInformation>,
}

/// `DrctDbtTxInf`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectDebitTransactionInformation {
    /// Instruction and end-to-end references
    #[serde(rename = "PmtId")]
    pub payment_identification: PaymentIdentification,

    /// Amount and currency to transfer
    #[serde(rename = "InstdAmt")]
    pub instructed_amount: CurrencyAndAmount,

    /// Mandate data
    #[serde(rename = "DrctDbtTx")]
    pub direct_debit_transaction: DirectDebitTransaction,

    /// Debtor bank
    #[serde(rename = "DbtrAgt")]
    pub debtor_agent: Agent,

    /// Debtor name and address
    #[serde(rename = "Dbtr")]
    pub debtor: PartyIdentification,

    /// Debtor IBAN
    #[serde(rename = "DbtrAcct")]
    pub debtor_account: CashAccount,

    /// Remittance text
    #[serde(rename = "RmtInf", skip_serializing_if = "Option::is_none")]
    pub remittance_information: Option<RemittanceInformation>,
}

/// `DrctDbtTx`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectDebitTransaction {
    /// Mandate reference and signature date
    #[serde(rename = "MndtRltdInf")]
    pub mandate_related_information: MandateRelatedInformation,
}

/// `MndtRltdInf`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MandateRelatedInformation {
    /// Mandate reference
    #[serde(rename = "MndtId")]
    pub mandate_id: String,

    /// Mandate signature date, `YYYY-MM-DD`
    #[serde(rename = "DtOfSgntr")]
    pub date_of_signature: String,
}
