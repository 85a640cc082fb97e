use std::collections::HashMap;

/// Name of the only intent that asks for an energy reading.
pub const ENERGY_QUERY_INTENT: &str = "GetEnergyData";

/// Slot carrying the spoken category phrase, e.g. "steam production".
pub const POWER_SOURCE_SLOT: &str = "PowerSource";

/// A recognized utterance handed over by the voice platform.
///
/// Built once per request and dropped when the turn completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Intent {
    pub name: Option<String>,
    pub slots: HashMap<String, String>,
}

impl Intent {
    /// Creates an intent with the given name and no slots.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            slots: HashMap::new(),
        }
    }

    /// Adds a slot value, replacing any previous value for the same slot.
    pub fn with_slot(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(slot.into(), value.into());
        self
    }

    /// The spoken power source phrase, or an empty phrase when the slot is missing.
    pub fn power_source(&self) -> &str {
        self.slots
            .get(POWER_SOURCE_SLOT)
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_source_present() {
        let intent = Intent::new(ENERGY_QUERY_INTENT).with_slot(POWER_SOURCE_SLOT, "steam production");
        assert_eq!(intent.power_source(), "steam production");
    }

    #[test]
    fn test_power_source_missing_is_empty() {
        let intent = Intent::new(ENERGY_QUERY_INTENT).with_slot("Other", "value");
        assert_eq!(intent.power_source(), "");
        assert_eq!(Intent::default().power_source(), "");
    }

    #[test]
    fn test_with_slot_replaces_value() {
        let intent = Intent::new(ENERGY_QUERY_INTENT)
            .with_slot(POWER_SOURCE_SLOT, "water production")
            .with_slot(POWER_SOURCE_SLOT, "electricity demand");
        assert_eq!(intent.slots.len(), 1);
        assert_eq!(intent.power_source(), "electricity demand");
    }
}
