//! Device family table.
//!
//! Xilinx part numbers open with a family code (`XC6V`, `XC7K`, `XC7A`, ...).
//! Each recognized family owns one directory of generated IP cores.

use serde::{Deserialize, Serialize};

/// Number of leading device characters that identify a family.
pub const FAMILY_CODE_LEN: usize = 4;

/// A device family and the IP-core directory built for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlatformFamily {
    /// Family code, compared case-insensitively (e.g., "XC7K").
    pub code: String,
    /// Human-readable family name (e.g., "Kintex-7").
    pub name: String,
    /// IP-core directory, relative to the design root.
    pub ip_cores: String,
}

impl PlatformFamily {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        ip_cores: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            ip_cores: ip_cores.into(),
        }
    }

    /// Virtex-6 (ML605).
    pub fn virtex6() -> Self {
        Self::new("XC6V", "Virtex-6", "platform/virtex6/ip_cores")
    }

    /// Kintex-7 (KC705).
    pub fn kintex7() -> Self {
        Self::new("XC7K", "Kintex-7", "platform/kintex7/ip_cores")
    }

    /// Artix-7 (AFC).
    pub fn artix7() -> Self {
        Self::new("XC7A", "Artix-7", "platform/artix7/ip_cores")
    }

    /// Families with generated IP cores in the reference design.
    pub fn builtin() -> Vec<Self> {
        vec![Self::virtex6(), Self::kintex7(), Self::artix7()]
    }

    /// Whether this family's code equals an already-normalized device prefix.
    pub fn matches(&self, prefix: &str) -> bool {
        self.code.to_uppercase() == prefix
    }
}

/// Normalized family prefix of a device string.
///
/// Takes the first [`FAMILY_CODE_LEN`] characters and uppercases them.
/// Devices shorter than that have no prefix and never match a family.
pub fn family_prefix(device: &str) -> Option<String> {
    let prefix: String = device.chars().take(FAMILY_CODE_LEN).collect();
    if prefix.chars().count() < FAMILY_CODE_LEN {
        return None;
    }
    Some(prefix.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_uppercased() {
        assert_eq!(family_prefix("xc6vlx240t").as_deref(), Some("XC6V"));
        assert_eq!(family_prefix("Xc7K325t").as_deref(), Some("XC7K"));
    }

    #[test]
    fn prefix_of_exact_length_device() {
        assert_eq!(family_prefix("xc7a").as_deref(), Some("XC7A"));
    }

    #[test]
    fn short_device_has_no_prefix() {
        assert!(family_prefix("").is_none());
        assert!(family_prefix("xc7").is_none());
    }

    #[test]
    fn prefix_counts_characters_not_bytes() {
        // Multi-byte characters must not split or panic.
        assert_eq!(family_prefix("äöüßx").as_deref(), Some("ÄÖÜSS"));
        assert!(family_prefix("äö").is_none());
    }

    #[test]
    fn builtin_codes_are_disjoint() {
        let families = PlatformFamily::builtin();
        for (i, a) in families.iter().enumerate() {
            for b in &families[i + 1..] {
                assert_ne!(a.code.to_uppercase(), b.code.to_uppercase());
            }
        }
    }

    #[test]
    fn lowercase_code_still_matches() {
        let family = PlatformFamily::new("xc7k", "Kintex-7", "platform/kintex7/ip_cores");
        assert!(family.matches("XC7K"));
        assert!(!family.matches("XC7A"));
    }
}
