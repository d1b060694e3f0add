use std::fmt;

use serde::Serialize;

/// Request body for one (account, unit) lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterDetailsRequest<'a> {
    pub intl_open_id: &'a str,
    pub name_codes: [u32; 1],
    pub nikke_area_id: u32,
}

impl<'a> CharacterDetailsRequest<'a> {
    pub fn new(account_id: &'a str, unit_code: u32, area_id: u32) -> Self {
        Self {
            intl_open_id: account_id,
            name_codes: [unit_code],
            nikke_area_id: area_id,
        }
    }
}

/// Session cookie for the upstream site. Held in memory for one run only;
/// formatting never reveals the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for a blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}
