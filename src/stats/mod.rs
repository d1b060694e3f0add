pub mod effects;
pub mod extract;
pub mod gear;

pub use effects::{parse_magnitude, EffectDescriptor, EffectTable, StatKind};
pub use extract::{extract_stat_totals, scaled_text, FormattedTotals, StatTotals};
pub use gear::{slot_reference, GearSlot};
