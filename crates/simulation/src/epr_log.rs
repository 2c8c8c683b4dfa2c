//! Session-scoped EPR telemetry log.
//!
//! Every completed detection appends one [`EprLogEntry`]. The log lives only
//! as long as the process; export is a JSON-lines dump for inspection.

use bevy::prelude::*;

use crate::detection::EprLogEntry;

#[derive(Resource, Debug, Default, Clone)]
pub struct EprLog {
    pub entries: Vec<EprLogEntry>,
}

impl EprLog {
    pub fn push(&mut self, entry: EprLogEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_co2_g(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| u64::from(e.estimated_co2_g))
            .sum()
    }

    pub fn recyclable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.recyclable).count()
    }

    /// Fraction of logged items that were recyclable, `0.0` when empty.
    pub fn recyclable_share(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.recyclable_count() as f64 / self.entries.len() as f64
    }

    /// One JSON object per line, oldest first.
    pub fn to_json_lines(&self) -> Result<String, serde_json::Error> {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&serde_json::to_string(entry)?);
            out.push('\n');
        }
        Ok(out)
    }
}

pub struct EprLogPlugin;

impl Plugin for EprLogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EprLog>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MaterialType, ShapeType, WasteGroup};

    fn entry(material: MaterialType, group: WasteGroup, co2: u32) -> EprLogEntry {
        EprLogEntry {
            brand: None,
            category: material,
            shape: ShapeType::Other,
            group,
            recyclable: group == WasteGroup::Recyclable,
            estimated_co2_g: co2,
            timestamp: 1,
        }
    }

    #[test]
    fn test_empty_log_totals() {
        let log = EprLog::default();
        assert!(log.is_empty());
        assert_eq!(log.total_co2_g(), 0);
        assert_eq!(log.recyclable_share(), 0.0);
        assert_eq!(log.to_json_lines().unwrap(), "");
    }

    #[test]
    fn test_totals_and_share() {
        let mut log = EprLog::default();
        log.push(entry(MaterialType::Metal, WasteGroup::Recyclable, 170));
        log.push(entry(MaterialType::Plastic, WasteGroup::Residual, 82));
        assert_eq!(log.len(), 2);
        assert_eq!(log.total_co2_g(), 252);
        assert_eq!(log.recyclable_count(), 1);
        assert_eq!(log.recyclable_share(), 0.5);
    }

    #[test]
    fn test_json_lines_export() {
        let mut log = EprLog::default();
        log.push(entry(MaterialType::Glass, WasteGroup::Recyclable, 86));
        log.push(entry(MaterialType::Organic, WasteGroup::Organic, 5));
        let dump = log.to_json_lines().unwrap();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["category"], "glass");
        assert_eq!(first["estimated_co2_g"], 86);
        assert!(first["brand"].is_null());
    }
}
