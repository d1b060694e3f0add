//! The twelve gear option slots on a character record (4 pieces x 3 options).

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GearSlot {
    ArmOption1,
    ArmOption2,
    ArmOption3,
    LegOption1,
    LegOption2,
    LegOption3,
    HeadOption1,
    HeadOption2,
    HeadOption3,
    TorsoOption1,
    TorsoOption2,
    TorsoOption3,
}

impl GearSlot {
    pub const ALL: [GearSlot; 12] = [
        Self::ArmOption1,
        Self::ArmOption2,
        Self::ArmOption3,
        Self::LegOption1,
        Self::LegOption2,
        Self::LegOption3,
        Self::HeadOption1,
        Self::HeadOption2,
        Self::HeadOption3,
        Self::TorsoOption1,
        Self::TorsoOption2,
        Self::TorsoOption3,
    ];

    /// Field name on a `character_details` record.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::ArmOption1 => "arm_equip_option1_id",
            Self::ArmOption2 => "arm_equip_option2_id",
            Self::ArmOption3 => "arm_equip_option3_id",
            Self::LegOption1 => "leg_equip_option1_id",
            Self::LegOption2 => "leg_equip_option2_id",
            Self::LegOption3 => "leg_equip_option3_id",
            Self::HeadOption1 => "head_equip_option1_id",
            Self::HeadOption2 => "head_equip_option2_id",
            Self::HeadOption3 => "head_equip_option3_id",
            Self::TorsoOption1 => "torso_equip_option1_id",
            Self::TorsoOption2 => "torso_equip_option2_id",
            Self::TorsoOption3 => "torso_equip_option3_id",
        }
    }
}

/// Effect id referenced by `slot`, in the textual form the effect table is keyed by.
/// Null, missing, and non-scalar values yield `None`.
pub fn slot_reference(character: &Value, slot: GearSlot) -> Option<String> {
    match character.get(slot.field_name())? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
