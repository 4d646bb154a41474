//! Configuration for document generation

use crate::document::SchemaVersion;
use serde::{Deserialize, Serialize};

/// Where the group header creation timestamp comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationTime {
    /// Local clock at build time
    Now,
    /// Execution date at 00:00:00
    ExecutionDate,
}

/// Document builder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target message version
    pub schema_version: SchemaVersion,

    /// Service level code (`PmtTpInf/SvcLvl/Cd`)
    pub service_level: String,

    /// Local instrument code for direct debits (`PmtTpInf/LclInstrm/Cd`)
    pub local_instrument: String,

    /// Sequence type for direct debits (`PmtTpInf/SeqTp`)
    pub sequence_type: String,

    /// Proprietary scheme name of the creditor identifier
    pub scheme_name: String,

    /// Creditor scheme identifier; the order party's IBAN when unset
    pub creditor_scheme_id: Option<String>,

    /// Prepended to the generated payment-information id
    pub payment_info_id_prefix: String,

    /// `BtchBookg` flag; omitted when unset
    pub batch_booking: Option<bool>,

    /// `ChrgBr` code; omitted when unset
    pub charge_bearer: Option<String>,

    /// Creation timestamp policy
    pub creation_time: CreationTime,

    /// Indent serialized XML
    pub pretty_print: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: SchemaVersion::Pain008V02,
            service_level: "SEPA".to_string(),
            local_instrument: "Core".to_string(),
            sequence_type: "FRST".to_string(),
            scheme_name: "SEPA".to_string(),
            creditor_scheme_id: None,
            payment_info_id_prefix: String::new(),
            batch_booking: None,
            charge_bearer: Some("SLEV".to_string()),
            creation_time: CreationTime::Now,
            pretty_print: true,
        }
    }
}

impl Config {
    /// Default configuration for a given message version
    pub fn for_version(schema_version: SchemaVersion) -> Self {
        Self {
            schema_version,
            ..Default::default()
        }
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    ///
    /// Every field can be overridden by a `PAIN_*` variable named after it,
    /// e.g. `PAIN_SCHEMA_VERSION` or `PAIN_CREATION_TIME`. An empty
    /// `PAIN_CREDITOR_SCHEME_ID` or `PAIN_CHARGE_BEARER` clears the field.
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(version) = std::env::var("PAIN_SCHEMA_VERSION") {
            config.schema_version = version.parse()?;
        }

        if let Ok(service_level) = std::env::var("PAIN_SERVICE_LEVEL") {
            config.service_level = service_level;
        }

        if let Ok(local_instrument) = std::env::var("PAIN_LOCAL_INSTRUMENT") {
            config.local_instrument = local_instrument;
        }

        if let Ok(sequence_type) = std::env::var("PAIN_SEQUENCE_TYPE") {
            config.sequence_type = sequence_type;
        }

        if let Ok(scheme_name) = std::env::var("PAIN_SCHEME_NAME") {
            config.scheme_name = scheme_name;
        }

        if let Ok(id) = std::env::var("PAIN_CREDITOR_SCHEME_ID") {
            config.creditor_scheme_id = Some(id).filter(|id| !id.is_empty());
        }

        if let Ok(prefix) = std::env::var("PAIN_PAYMENT_INFO_ID_PREFIX") {
            config.payment_info_id_prefix = prefix;
        }

        if let Some(flag) = env_flag("PAIN_BATCH_BOOKING")? {
            config.batch_booking = Some(flag);
        }

        if let Ok(code) = std::env::var("PAIN_CHARGE_BEARER") {
            config.charge_bearer = Some(code).filter(|code| !code.is_empty());
        }

        if let Ok(policy) = std::env::var("PAIN_CREATION_TIME") {
            config.creation_time = policy.parse()?;
        }

        if let Some(flag) = env_flag("PAIN_PRETTY_PRINT")? {
            config.pretty_print = flag;
        }

        Ok(config)
    }
}

impl std::str::FromStr for CreationTime {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "now" => Ok(CreationTime::Now),
            "execution_date" => Ok(CreationTime::ExecutionDate),
            other => Err(crate::Error::Config(format!(
                "Unknown creation time policy: {}",
                other
            ))),
        }
    }
}

fn env_flag(name: &str) -> crate::Result<Option<bool>> {
    match std::env::var(name) {
        Ok(flag) => flag.parse::<bool>().map(Some).map_err(|_| {
            crate::Error::Config(format!("{} must be true or false, got {}", name, flag))
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.service_level, "SEPA");
        assert_eq!(config.local_instrument, "Core");
        assert_eq!(config.sequence_type, "FRST");
        assert_eq!(config.creation_time, CreationTime::Now);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
schema_version = "pain.001.001.03"
payment_info_id_prefix = "Incasso SDD"
batch_booking = true
creation_time = "execution_date"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.schema_version, SchemaVersion::Pain001V03);
        assert_eq!(config.payment_info_id_prefix, "Incasso SDD");
        assert_eq!(config.batch_booking, Some(true));
        assert_eq!(config.creation_time, CreationTime::ExecutionDate);
        // unspecified keys keep their defaults
        assert_eq!(config.sequence_type, "FRST");
    }

    const ENV_VARS: [&str; 11] = [
        "PAIN_SCHEMA_VERSION",
        "PAIN_SERVICE_LEVEL",
        "PAIN_LOCAL_INSTRUMENT",
        "PAIN_SEQUENCE_TYPE",
        "PAIN_SCHEME_NAME",
        "PAIN_CREDITOR_SCHEME_ID",
        "PAIN_PAYMENT_INFO_ID_PREFIX",
        "PAIN_BATCH_BOOKING",
        "PAIN_CHARGE_BEARER",
        "PAIN_CREATION_TIME",
        "PAIN_PRETTY_PRINT",
    ];

    fn clear_env() {
        for name in ENV_VARS {
            std::env::remove_var(name);
        }
    }

    // Single test so the process-wide environment is never shared between
    // concurrently running cases.
    #[test]
    fn test_from_env() {
        clear_env();
        assert_eq!(Config::from_env().unwrap(), Config::default());

        let values = [
            ("PAIN_SCHEMA_VERSION", "pain.008.001.08"),
            ("PAIN_SERVICE_LEVEL", "NURG"),
            ("PAIN_LOCAL_INSTRUMENT", "B2B"),
            ("PAIN_SEQUENCE_TYPE", "RCUR"),
            ("PAIN_SCHEME_NAME", "SEPA-B2B"),
            ("PAIN_CREDITOR_SCHEME_ID", "DE98ZZZ09999999999"),
            ("PAIN_PAYMENT_INFO_ID_PREFIX", "Incasso SDD"),
            ("PAIN_BATCH_BOOKING", "false"),
            ("PAIN_CHARGE_BEARER", ""),
            ("PAIN_CREATION_TIME", "execution_date"),
            ("PAIN_PRETTY_PRINT", "false"),
        ];
        for (name, value) in values {
            std::env::set_var(name, value);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.schema_version, SchemaVersion::Pain008V08);
        assert_eq!(config.service_level, "NURG");
        assert_eq!(config.local_instrument, "B2B");
        assert_eq!(config.sequence_type, "RCUR");
        assert_eq!(config.scheme_name, "SEPA-B2B");
        assert_eq!(config.creditor_scheme_id.as_deref(), Some("DE98ZZZ09999999999"));
        assert_eq!(config.payment_info_id_prefix, "Incasso SDD");
        assert_eq!(config.batch_booking, Some(false));
        assert_eq!(config.charge_bearer, None);
        assert_eq!(config.creation_time, CreationTime::ExecutionDate);
        assert!(!config.pretty_print);

        std::env::set_var("PAIN_BATCH_BOOKING", "yes");
        match Config::from_env() {
            Err(crate::Error::Config(msg)) => assert!(msg.contains("PAIN_BATCH_BOOKING")),
            other => panic!("unexpected result: {other:?}"),
        }
        std::env::set_var("PAIN_BATCH_BOOKING", "true");

        std::env::set_var("PAIN_CREATION_TIME", "tomorrow");
        assert!(matches!(Config::from_env(), Err(crate::Error::Config(_))));
        std::env::set_var("PAIN_CREATION_TIME", "now");

        std::env::set_var("PAIN_SCHEMA_VERSION", "pain.001.001.09");
        assert!(matches!(Config::from_env(), Err(crate::Error::Config(_))));

        clear_env();
    }

    #[test]
    fn test_creation_time_from_str() {
        assert_eq!("now".parse::<CreationTime>().unwrap(), CreationTime::Now);
        assert_eq!(
            "execution_date".parse::<CreationTime>().unwrap(),
            CreationTime::ExecutionDate
        );
        assert!("Now".parse::<CreationTime>().is_err());
    }

    #[test]
    fn test_from_file_rejects_unknown_version() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"schema_version = "pain.002.001.03""#).unwrap();
        assert!(matches!(Config::from_file(file.path()), Err(crate::Error::Config(_))));
    }
}
