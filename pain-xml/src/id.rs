//! Message and payment-information identifiers

use crate::error::RandomnessError;
use rand::rngs::OsRng;
use rand::RngCore;

/// Length of every generated identifier
pub const ID_LENGTH: usize = 15;

/// Symbols an identifier is drawn from
pub const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// Largest multiple of 36 that fits in a byte; bytes at or above it are
// rejected so every symbol stays equally likely.
const REJECTION_BOUND: u8 = 252;

/// Source of fresh identifiers for the document builder
pub trait IdGenerator: Send + Sync {
    /// Produce a new identifier
    fn new_id(&self) -> Result<String, RandomnessError>;
}

/// Draws identifiers from the operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureIdGenerator;

impl IdGenerator for SecureIdGenerator {
    fn new_id(&self) -> Result<String, RandomnessError> {
        let mut id = String::with_capacity(ID_LENGTH);
        let mut buf = [0u8; ID_LENGTH * 2];

        while id.len() < ID_LENGTH {
            OsRng
                .try_fill_bytes(&mut buf)
                .map_err(|e| RandomnessError(e.to_string()))?;

            for byte in buf.iter().copied().filter(|b| *b < REJECTION_BOUND) {
                if id.len() == ID_LENGTH {
                    break;
                }
                id.push(ID_ALPHABET[(byte % 36) as usize] as char);
            }
        }

        Ok(id)
    }
}

/// Generate an identifier with [`SecureIdGenerator`]
pub fn new_id() -> Result<String, RandomnessError> {
    SecureIdGenerator.new_id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_shape() {
        let id = new_id().unwrap();
        assert_eq!(id.len(), ID_LENGTH);
        assert!(id.bytes().all(|b| ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_ids_do_not_repeat() {
        let ids: HashSet<String> = (0..10_000).map(|_| new_id().unwrap()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_generator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SecureIdGenerator>();
    }
}
