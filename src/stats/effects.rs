//! State-effect indirection table: effect id -> (stat kind, raw magnitude).
//!
//! The upstream API describes every gear option roll once in `state_effects` and
//! gear slots only carry the effect id. Magnitudes use the API's fixed-point
//! convention (hundredths) and are kept unscaled here.

use std::collections::HashMap;

use serde_json::Value;

/// Category of a stat modifier. Only the first three are accumulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatKind {
    /// `StatAtk`
    Attack,
    /// `IncElementDmg`
    ElementalDamage,
    /// `StatAmmoLoad`
    MaxAmmo,
    /// Any other function type (or a missing one). Recorded but never summed.
    Other(String),
}

impl StatKind {
    pub fn from_function_type(tag: Option<&str>) -> Self {
        match tag {
            Some("StatAtk") => Self::Attack,
            Some("IncElementDmg") => Self::ElementalDamage,
            Some("StatAmmoLoad") => Self::MaxAmmo,
            Some(other) => Self::Other(other.to_string()),
            None => Self::Other(String::new()),
        }
    }

    pub fn is_tracked(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectDescriptor {
    pub kind: StatKind,
    pub magnitude: i128,
}

/// Effect descriptors keyed by the textual effect id.
#[derive(Debug, Clone, Default)]
pub struct EffectTable {
    by_id: HashMap<String, EffectDescriptor>,
}

impl EffectTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `state_effects` array of a response.
    ///
    /// Each function-detail record overwrites the descriptor of its entry, and a
    /// repeated id overwrites the earlier entry, so the last record seen wins.
    /// Entries whose id is not a JSON string are not indexed.
    pub fn from_state_effects(state_effects: &Value) -> Self {
        let mut table = Self::new();
        let Some(entries) = state_effects.as_array() else {
            return table;
        };

        for entry in entries {
            let Some(id) = entry.get("id").and_then(Value::as_str) else {
                continue;
            };
            let Some(details) = entry.get("function_details").and_then(Value::as_array) else {
                continue;
            };
            for detail in details {
                let kind =
                    StatKind::from_function_type(detail.get("function_type").and_then(Value::as_str));
                let magnitude = parse_magnitude(detail.get("function_value"));
                table.insert(id, EffectDescriptor { kind, magnitude });
            }
        }

        table
    }

    pub fn insert(&mut self, id: &str, descriptor: EffectDescriptor) {
        self.by_id.insert(id.to_string(), descriptor);
    }

    pub fn get(&self, id: &str) -> Option<&EffectDescriptor> {
        self.by_id.get(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Parse a raw `function_value`. Integers pass through, floats truncate toward
/// zero, numeric strings are parsed after trimming; everything else is 0.
pub fn parse_magnitude(raw: Option<&Value>) -> i128 {
    match raw {
        Some(Value::Number(n)) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i128))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i128>().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_magnitude_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_magnitude(Some(&json!(1000))), 1000);
        assert_eq!(parse_magnitude(Some(&json!("1000"))), 1000);
        assert_eq!(parse_magnitude(Some(&json!(" -25 "))), -25);
        assert_eq!(parse_magnitude(Some(&json!(12.9))), 12);
        assert_eq!(parse_magnitude(Some(&json!(u64::MAX))), i128::from(u64::MAX));
        assert_eq!(
            parse_magnitude(Some(&json!("9223372036854775808"))),
            9_223_372_036_854_775_808
        );
        assert_eq!(parse_magnitude(Some(&json!("12.5"))), 0);
        assert_eq!(parse_magnitude(Some(&json!("abc"))), 0);
        assert_eq!(parse_magnitude(Some(&json!(null))), 0);
        assert_eq!(parse_magnitude(None), 0);
    }

    #[test]
    fn last_function_detail_wins_within_entry() {
        let effects = json!([
            {"id": "9", "function_details": [
                {"function_type": "StatAtk", "function_value": "100"},
                {"function_type": "StatAmmoLoad", "function_value": "4200"}
            ]}
        ]);
        let table = EffectTable::from_state_effects(&effects);
        assert_eq!(
            table.get("9"),
            Some(&EffectDescriptor {
                kind: StatKind::MaxAmmo,
                magnitude: 4200
            })
        );
    }

    #[test]
    fn repeated_id_overwrites_earlier_entry() {
        let effects = json!([
            {"id": "3", "function_details": [{"function_type": "StatAtk", "function_value": 1}]},
            {"id": "3", "function_details": [{"function_type": "IncElementDmg", "function_value": 2}]}
        ]);
        let table = EffectTable::from_state_effects(&effects);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("3").map(|d| &d.kind), Some(&StatKind::ElementalDamage));
    }

    #[test]
    fn untracked_kinds_are_recorded_as_other() {
        let effects = json!([
            {"id": "4", "function_details": [{"function_type": "StatDef", "function_value": "700"}]}
        ]);
        let table = EffectTable::from_state_effects(&effects);
        let descriptor = table.get("4").expect("entry should be recorded");
        assert_eq!(descriptor.kind, StatKind::Other("StatDef".to_string()));
        assert!(!descriptor.kind.is_tracked());
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let effects = json!([
            {"id": 5, "function_details": [{"function_type": "StatAtk", "function_value": 1}]},
            {"function_details": [{"function_type": "StatAtk", "function_value": 1}]},
            {"id": "6"},
            {"id": "7", "function_details": []},
            "not an object"
        ]);
        assert!(EffectTable::from_state_effects(&effects).is_empty());
        assert!(EffectTable::from_state_effects(&json!({"id": "1"})).is_empty());
    }
}
