//! Passcode generation.

use rand::rngs::OsRng;
use rand::Rng;

use crate::config::template::default_client_config;
use crate::config::types::ClientConfig;
use crate::constants::{PASSCODE_ALPHABET, PASSCODE_LENGTH};

/// Generate a random 20-character passcode from `A-Z a-z 0-9 - _`.
///
/// The passcode doubles as an authentication secret, so it is drawn from the
/// OS entropy source.
pub fn generate_passcode() -> String {
    let mut rng = OsRng;
    (0..PASSCODE_LENGTH)
        .map(|_| {
            let index = rng.gen_range(0..PASSCODE_ALPHABET.len());
            PASSCODE_ALPHABET[index] as char
        })
        .collect()
}

/// Generate a passcode together with a fresh default configuration whose
/// default secret slot holds that passcode.
pub fn generate_passcode_and_config() -> (String, ClientConfig) {
    let passcode = generate_passcode();
    let config = default_client_config(&passcode);
    (passcode, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_SECRET_SLOT;

    #[test]
    fn test_passcode_length_and_alphabet() {
        for _ in 0..100 {
            let passcode = generate_passcode();
            assert_eq!(passcode.len(), PASSCODE_LENGTH);
            assert!(passcode.bytes().all(|b| PASSCODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_passcode_and_config_agree() {
        let (passcode, config) = generate_passcode_and_config();
        assert_eq!(passcode.len(), PASSCODE_LENGTH);
        assert_eq!(config.secrets[DEFAULT_SECRET_SLOT], passcode);
    }
}
