//! Per-unit stat extraction from a `GetUserCharacterDetails` response.

use serde::Serialize;
use serde_json::Value;

use crate::stats::effects::{EffectDescriptor, EffectTable, StatKind};
use crate::stats::gear::{slot_reference, GearSlot};

/// Raw (unscaled) sums of the tracked stats over the twelve gear slots.
/// Sums saturate at the `i128` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatTotals {
    pub attack: i128,
    pub elemental_damage: i128,
    pub max_ammo: i128,
}

impl StatTotals {
    pub fn apply(&mut self, descriptor: &EffectDescriptor) {
        let total = match descriptor.kind {
            StatKind::Attack => &mut self.attack,
            StatKind::ElementalDamage => &mut self.elemental_damage,
            StatKind::MaxAmmo => &mut self.max_ammo,
            StatKind::Other(_) => return,
        };
        *total = total.saturating_add(descriptor.magnitude);
    }

    pub fn formatted(&self) -> FormattedTotals {
        FormattedTotals {
            attack: scaled_text(self.attack),
            elemental_damage: scaled_text(self.elemental_damage),
            max_ammo: scaled_text(self.max_ammo),
        }
    }
}

/// Totals scaled by 1/100 and rendered with two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedTotals {
    #[serde(rename = "Attack")]
    pub attack: String,
    #[serde(rename = "ElementalDamage")]
    pub elemental_damage: String,
    #[serde(rename = "MaxAmmo")]
    pub max_ammo: String,
}

/// Render `raw / 100` with exactly two fractional digits.
pub fn scaled_text(raw: i128) -> String {
    let sign = if raw < 0 { "-" } else { "" };
    let abs = raw.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Sum the tracked stats referenced by the first character record's gear slots.
///
/// A missing response, a missing `data` object, or any malformed piece inside it
/// contributes nothing; this never fails. Only `character_details[0]` is read.
/// Slots referencing the same effect id each contribute in full.
pub fn extract_stat_totals(response: Option<&Value>) -> StatTotals {
    let mut totals = StatTotals::default();
    let Some(data) = response.and_then(|r| r.get("data")) else {
        return totals;
    };

    let table = data
        .get("state_effects")
        .map(EffectTable::from_state_effects)
        .unwrap_or_default();
    if table.is_empty() {
        return totals;
    }

    let Some(character) = data
        .get("character_details")
        .and_then(Value::as_array)
        .and_then(|records| records.first())
    else {
        return totals;
    };

    for slot in GearSlot::ALL {
        let Some(effect_id) = slot_reference(character, slot) else {
            continue;
        };
        if let Some(descriptor) = table.get(&effect_id) {
            totals.apply(descriptor);
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scaled_text_always_has_two_decimals() {
        assert_eq!(scaled_text(0), "0.00");
        assert_eq!(scaled_text(100), "1.00");
        assert_eq!(scaled_text(5), "0.05");
        assert_eq!(scaled_text(1234), "12.34");
        assert_eq!(scaled_text(-5), "-0.05");
        assert_eq!(scaled_text(-1250), "-12.50");
        assert_eq!(scaled_text(i128::MIN), "-1701411834604692317316873037158841057.28");
    }

    #[test]
    fn missing_response_yields_zero_totals() {
        let totals = extract_stat_totals(None);
        assert_eq!(totals, StatTotals::default());
        assert_eq!(totals.formatted().attack, "0.00");
    }

    #[test]
    fn non_object_data_is_ignored() {
        let response = json!({"code": 0, "data": "oops"});
        assert_eq!(extract_stat_totals(Some(&response)), StatTotals::default());
    }

    #[test]
    fn other_kinds_do_not_contribute() {
        let response = json!({"data": {
            "state_effects": [
                {"id": "1", "function_details": [{"function_type": "StatDef", "function_value": "900"}]}
            ],
            "character_details": [{"arm_equip_option1_id": "1"}]
        }});
        assert_eq!(extract_stat_totals(Some(&response)), StatTotals::default());
    }

    #[test]
    fn only_first_character_record_is_read() {
        let response = json!({"data": {
            "state_effects": [
                {"id": "1", "function_details": [{"function_type": "StatAtk", "function_value": "100"}]},
                {"id": "2", "function_details": [{"function_type": "StatAtk", "function_value": "9900"}]}
            ],
            "character_details": [
                {"arm_equip_option1_id": "1"},
                {"arm_equip_option1_id": "2"}
            ]
        }});
        assert_eq!(extract_stat_totals(Some(&response)).attack, 100);
    }
}
