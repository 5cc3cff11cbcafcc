//! Content address function for rules
//!
//! The identity of a rule is SHA-256 over a canonical encoding of its fields
//! in the fixed order `kind`, `name`, `expected_exists`. Each field is
//! written as a one-byte type tag followed by its value; strings carry a
//! big-endian `u64` byte length so adjacent fields cannot run together.
//!
//! The encoding is part of the on-disk format: record file names are the hex
//! digest, and changing anything here orphans every stored record.

use sha2::{Digest, Sha256};

use super::rule::Rule;

/// File extension of rule records.
pub const RECORD_EXTENSION: &str = "yaml";

const TAG_STRING: u8 = b's';
const TAG_BOOL: u8 = b'b';

/// Deterministic identity of a rule's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId([u8; 32]);

impl RuleId {
    /// Lowercase hex rendering (64 characters).
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Record file name: `<hex>.yaml`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.to_hex(), RECORD_EXTENSION)
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn update_str(hasher: &mut Sha256, value: &str) {
    hasher.update([TAG_STRING]);
    hasher.update((value.len() as u64).to_be_bytes());
    hasher.update(value.as_bytes());
}

fn update_bool(hasher: &mut Sha256, value: bool) {
    hasher.update([TAG_BOOL, u8::from(value)]);
}

/// Compute the content address of `rule`.
pub fn address_of(rule: &Rule) -> RuleId {
    let mut hasher = Sha256::new();
    update_str(&mut hasher, rule.kind().as_str());
    update_str(&mut hasher, rule.name());
    update_bool(&mut hasher, rule.expected_exists());
    RuleId(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_value() {
        let rule = Rule::new("bucket", "Flower");
        assert_eq!(
            address_of(&rule).to_hex(),
            "b551d6cce844a703e4ce99a54b71fac9790e037c3d25f250dc6c861c0f1247b3"
        );
    }

    #[test]
    fn expectation_is_part_of_identity() {
        let mut rule = Rule::new("bucket", "Flower");
        rule.mark_not_exists();
        assert_eq!(
            address_of(&rule).to_hex(),
            "d1c989252f5158d05288794ef7cf31782eb887ca7f6cc393c5cd22b574455a65"
        );
    }

    #[test]
    fn field_boundaries_are_unambiguous() {
        let a = Rule::new("bucketF", "lower");
        let b = Rule::new("bucket", "Flower");
        assert_ne!(address_of(&a), address_of(&b));
    }

    #[test]
    fn file_name_uses_record_extension() {
        let id = address_of(&Rule::new("bucket", "Flower"));
        let name = id.file_name();
        assert!(name.ends_with(".yaml"));
        assert_eq!(name.len(), 64 + ".yaml".len());
    }

    proptest! {
        #[test]
        fn equal_fields_give_equal_ids(kind in "\\PC*", name in "\\PC*", exists in any::<bool>()) {
            let mut a = Rule::new(kind.clone(), name.clone());
            let mut b = Rule::new(kind, name);
            if !exists {
                a.mark_not_exists();
                b.mark_not_exists();
            }
            prop_assert_eq!(address_of(&a), address_of(&b));
        }

        #[test]
        fn different_fields_give_different_ids(
            kind in "[a-z]{1,8}",
            name_a in "\\PC{1,16}",
            name_b in "\\PC{1,16}",
        ) {
            prop_assume!(name_a != name_b);
            let a = Rule::new(kind.clone(), name_a);
            let b = Rule::new(kind, name_b);
            prop_assert_ne!(address_of(&a), address_of(&b));
        }

        #[test]
        fn hex_is_lowercase_and_fixed_width(kind in "\\PC*", name in "\\PC*") {
            let hex = address_of(&Rule::new(kind, name)).to_hex();
            prop_assert_eq!(hex.len(), 64);
            prop_assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }
}
