//! Layout of the `data.yml` document.
//!
//! ```yaml
//! pendingRevives:
//! - 3f0c5b1e-8d3a-4c59-9a43-0f6f1b2c7d11
//! cooldowns:
//!   world:10:64:-3: 1760000000000
//! ```

use std::collections::BTreeMap;

use hardcore_revival_core::position::AltarKey;
use hardcore_revival_core::repository::StoreSnapshot;
use serde::Serialize;
use serde_yaml::Value;
use uuid::Uuid;

/// Top-level key holding the pending revival list.
pub const PENDING_REVIVES_KEY: &str = "pendingRevives";

/// Top-level key holding the cooldown mapping.
pub const COOLDOWNS_KEY: &str = "cooldowns";

/// Serialised form of the store.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DataFile<'a> {
    pending_revives: Vec<String>,
    cooldowns: BTreeMap<&'a str, i64>,
}

/// Renders a snapshot as a YAML document.
///
/// # Errors
///
/// Returns the serializer error; with string keys and integer values this
/// does not happen in practice.
pub fn render(snapshot: &StoreSnapshot) -> Result<String, serde_yaml::Error> {
    let document = DataFile {
        pending_revives: snapshot
            .pending_revivals
            .iter()
            .map(Uuid::to_string)
            .collect(),
        cooldowns: snapshot
            .cooldowns
            .iter()
            .map(|(key, millis)| (key.as_str(), *millis))
            .collect(),
    };
    serde_yaml::to_string(&document)
}

/// Reads a YAML document into a snapshot, skipping anything malformed.
/// Returns `None` only when the text is not YAML at all.
#[must_use]
pub fn parse_lenient(source: &str) -> Option<StoreSnapshot> {
    let root: Value = serde_yaml::from_str(source).ok()?;
    let mut snapshot = StoreSnapshot::default();

    if let Some(Value::Sequence(entries)) = root.get(PENDING_REVIVES_KEY) {
        snapshot.pending_revivals = entries
            .iter()
            .filter_map(Value::as_str)
            .filter_map(|raw| Uuid::parse_str(raw.trim()).ok())
            .collect();
    }

    if let Some(Value::Mapping(entries)) = root.get(COOLDOWNS_KEY) {
        snapshot.cooldowns = entries
            .iter()
            .filter_map(|(key, value)| Some((AltarKey::from_raw(key.as_str()?), value.as_i64()?)))
            .collect();
    }

    Some(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_renders_both_sections() {
        let rendered = render(&StoreSnapshot::default()).unwrap();

        assert_eq!(rendered, "pendingRevives: []\ncooldowns: {}\n");
    }

    #[test]
    fn test_parse_skips_invalid_entries() {
        let valid = Uuid::new_v4();
        let source = format!(
            "pendingRevives:\n- {valid}\n- not-a-uuid\n- 42\n\
             cooldowns:\n  world:0:64:0: 1760000000000\n  world:5:64:5: yesterday\n"
        );

        let snapshot = parse_lenient(&source).unwrap();

        assert_eq!(snapshot.pending_revivals.len(), 1);
        assert!(snapshot.pending_revivals.contains(&valid));
        assert_eq!(snapshot.cooldowns.len(), 1);
        assert_eq!(
            snapshot.cooldowns.get(&AltarKey::from_raw("world:0:64:0")),
            Some(&1_760_000_000_000)
        );
    }

    #[test]
    fn test_parse_tolerates_missing_sections() {
        let snapshot = parse_lenient("somethingElse: true\n").unwrap();

        assert_eq!(snapshot, StoreSnapshot::default());
    }

    #[test]
    fn test_parse_rejects_non_yaml() {
        assert!(parse_lenient("pendingRevives: [unterminated").is_none());
    }
}
