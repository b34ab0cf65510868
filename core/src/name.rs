use crate::{constants::NAME_LEN, error::VaultError};

/// Encodes a vault name into its fixed-size on-chain form, right-padded with spaces
pub fn encode_name(name: &str) -> Result<[u8; NAME_LEN], VaultError> {
    let bytes = name.as_bytes();
    if bytes.len() > NAME_LEN {
        return Err(VaultError::NameTooLong(name.to_string()));
    }

    let mut encoded = [b' '; NAME_LEN];
    encoded[..bytes.len()].copy_from_slice(bytes);
    Ok(encoded)
}

pub fn decode_name(encoded: &[u8; NAME_LEN]) -> String {
    String::from_utf8_lossy(encoded)
        .trim_matches(|c: char| c.is_whitespace() || c == '\0')
        .to_string()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_encode_name_pads_with_spaces() {
        let encoded = encode_name("alpha").unwrap();
        assert_eq!(&encoded[..5], b"alpha");
        assert!(encoded[5..].iter().all(|b| *b == b' '));
    }

    #[test]
    fn test_decode_name_trims_padding() {
        let encoded = encode_name("supercharger vault").unwrap();
        assert_eq!(decode_name(&encoded), "supercharger vault");

        let mut zero_padded = [0u8; NAME_LEN];
        zero_padded[..3].copy_from_slice(b"jlp");
        assert_eq!(decode_name(&zero_padded), "jlp");
    }

    #[test]
    fn test_encode_name_max_length() {
        let name = "a".repeat(NAME_LEN);
        assert_eq!(encode_name(&name).unwrap(), [b'a'; NAME_LEN]);

        let too_long = "a".repeat(NAME_LEN + 1);
        assert_matches!(encode_name(&too_long), Err(VaultError::NameTooLong(_)));
    }
}
