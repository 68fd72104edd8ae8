//! Stable command identifiers derived from the component name.
//!
//! The host persists menu customisations keyed by these values, so the
//! derivation must never change for an existing revision.

use uuid::Uuid;

use crate::slot::IdentifierScheme;

/// MD5 of `component_name` plus the scheme's encoding of `index`, laid out as a host GUID.
pub fn command_identifier(component_name: &str, index: u32, scheme: IdentifierScheme) -> Uuid {
    let mut input = component_name.as_bytes().to_vec();
    match scheme {
        IdentifierScheme::RawIndex => input.extend_from_slice(&index.to_le_bytes()),
        IdentifierScheme::DecimalSuffix => input.extend_from_slice(index.to_string().as_bytes()),
    }
    digest_to_guid(md5::compute(&input))
}

// GUIDs are filled from the digest bytes in memory order, so the first three
// fields read back little-endian.
fn digest_to_guid(digest: md5::Digest) -> Uuid {
    Uuid::from_bytes_le(digest.0)
}

#[cfg(test)]
mod tests {
    use super::command_identifier;
    use crate::slot::IdentifierScheme;
    use std::collections::HashSet;

    #[test]
    fn test_identifier_is_deterministic() {
        let first = command_identifier("Play Track", 7, IdentifierScheme::DecimalSuffix);
        let second = command_identifier("Play Track", 7, IdentifierScheme::DecimalSuffix);
        assert_eq!(first, second);
    }

    #[test]
    fn test_decimal_identifier_matches_md5_of_concatenated_name() {
        let digest = md5::compute(b"Play Track12");
        let expected = uuid::Uuid::from_bytes_le(digest.0);
        assert_eq!(
            command_identifier("Play Track", 12, IdentifierScheme::DecimalSuffix),
            expected
        );
    }

    #[test]
    fn test_raw_identifier_hashes_little_endian_index() {
        let mut input = b"Play Track".to_vec();
        input.extend_from_slice(&[3, 0, 0, 0]);
        let expected = uuid::Uuid::from_bytes_le(md5::compute(&input).0);
        assert_eq!(
            command_identifier("Play Track", 3, IdentifierScheme::RawIndex),
            expected
        );
    }

    #[test]
    fn test_schemes_produce_different_identifiers() {
        assert_ne!(
            command_identifier("Play Track", 0, IdentifierScheme::RawIndex),
            command_identifier("Play Track", 0, IdentifierScheme::DecimalSuffix)
        );
    }

    #[test]
    fn test_identifiers_are_unique_across_slots() {
        for scheme in [IdentifierScheme::RawIndex, IdentifierScheme::DecimalSuffix] {
            let ids: HashSet<_> = (0..33)
                .map(|index| command_identifier("Play Track", index, scheme))
                .collect();
            assert_eq!(ids.len(), 33);
        }
    }

    #[test]
    fn test_component_name_changes_identifier() {
        assert_ne!(
            command_identifier("Play Track", 1, IdentifierScheme::DecimalSuffix),
            command_identifier("Play Tracks", 1, IdentifierScheme::DecimalSuffix)
        );
    }
}
