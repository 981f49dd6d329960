//! JSON representation of the board
//!
//! ```json
//! {
//!   "sections": {
//!     "Today's Tasks": [
//!       { "id": 1, "content": "Write report", "completed": false, "priority": "Medium" }
//!     ],
//!     "Archive": []
//!   },
//!   "next_id": 2
//! }
//! ```
//!
//! Sections are written in display order. On read, missing sections are
//! empty and missing `completed`/`priority` fields take their defaults;
//! everything else that does not fit is reported as corruption.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use whiteboard_domain::{Board, Item, ItemId, Priority, Section};

#[derive(Debug, Serialize, Deserialize)]
struct ItemRecord {
    id: u64,
    content: String,
    #[serde(default)]
    completed: bool,
    #[serde(default, with = "priority_name")]
    priority: Priority,
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.value(),
            content: item.content.clone(),
            completed: item.completed,
            priority: item.priority,
        }
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item {
            id: ItemId::new(record.id),
            content: record.content,
            completed: record.completed,
            priority: record.priority,
        }
    }
}

mod priority_name {
    use super::*;

    pub fn serialize<S: Serializer>(priority: &Priority, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(priority.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Priority, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(<D::Error as serde::de::Error>::custom)
    }
}

#[derive(Serialize)]
struct BoardRecordRef<'a> {
    sections: SectionsRef<'a>,
    next_id: u64,
}

struct SectionsRef<'a>(&'a Board);

impl Serialize for SectionsRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Section::COUNT))?;
        for (section, items) in self.0.sections() {
            let records: Vec<ItemRecord> = items.iter().map(ItemRecord::from).collect();
            map.serialize_entry(section.name(), &records)?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
struct BoardRecord {
    sections: SectionEntries,
    next_id: u64,
}

/// Section entries in file order, duplicates kept so validation can reject them
struct SectionEntries(Vec<(String, Vec<ItemRecord>)>);

impl<'de> Deserialize<'de> for SectionEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = SectionEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of section names to item lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = access.next_entry::<String, Vec<ItemRecord>>()? {
                    entries.push(entry);
                }
                Ok(SectionEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Encode a board as pretty-printed JSON with a trailing newline
pub fn encode(board: &Board) -> Result<String, serde_json::Error> {
    let record = BoardRecordRef {
        sections: SectionsRef(board),
        next_id: board.next_id(),
    };
    let mut text = serde_json::to_string_pretty(&record)?;
    text.push('\n');
    Ok(text)
}

/// Decode and validate a board
///
/// Returns a human-readable reason on failure.
pub fn decode(text: &str) -> Result<Board, String> {
    let record: BoardRecord = serde_json::from_str(text).map_err(|e| e.to_string())?;

    let mut sections = Vec::with_capacity(record.sections.0.len());
    for (name, items) in record.sections.0 {
        let section = Section::from_key(&name).ok_or_else(|| {
            format!(
                "unknown section '{}' (known: {})",
                name,
                Section::names().join(", ")
            )
        })?;
        let items: Vec<Item> = items.into_iter().map(Item::from).collect();
        sections.push((section, items));
    }

    Board::from_parts(sections, record.next_id).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_writes_every_section_in_order() {
        let mut board = Board::new();
        board.add(Section::BrainDump, "call mom", Priority::High).unwrap();
        let text = encode(&board).unwrap();

        let positions: Vec<usize> = Section::names()
            .iter()
            .map(|name| text.find(&format!("\"{}\"", name)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("\"priority\": \"High\""));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_decode_applies_item_defaults() {
        let text = r#"{
            "sections": { "Brain Dump": [ { "id": 4, "content": "laundry" } ] },
            "next_id": 5
        }"#;
        let board = decode(text).unwrap();
        let item = &board.items(Section::BrainDump)[0];
        assert!(!item.completed);
        assert_eq!(item.priority, Priority::Medium);
        assert!(board.items(Section::TodaysTasks).is_empty());
    }

    #[test]
    fn test_decode_accepts_lowercase_priority() {
        let text = r#"{"sections": {"Archive": [{"id": 1, "content": "x", "completed": true, "priority": "low"}]}, "next_id": 2}"#;
        let board = decode(text).unwrap();
        assert_eq!(board.items(Section::Archive)[0].priority, Priority::Low);
    }

    #[test]
    fn test_decode_rejects_schema_violations() {
        let cases = [
            (r#"{"next_id": 1}"#, "sections"),
            (r#"{"sections": {}}"#, "next_id"),
            (r#"{"sections": {"Archive": [{"content": "x"}]}, "next_id": 2}"#, "id"),
            (r#"{"sections": {"Archive": [{"id": "1", "content": "x"}]}, "next_id": 2}"#, "invalid type"),
            (r#"{"sections": {"Archive": [{"id": 1, "content": "x", "priority": "Urgent"}]}, "next_id": 2}"#, "Urgent"),
            (r#"{"sections": {"Someday": []}, "next_id": 1}"#, "Someday"),
            (r#"{"sections": {"Archive": [{"id": 3, "content": "x"}]}, "next_id": 3}"#, "next_id"),
            (r#""hello""#, "invalid type"),
        ];

        for (text, needle) in cases {
            let reason = decode(text).unwrap_err();
            assert!(reason.contains(needle), "{text}: expected '{needle}' in '{reason}'");
        }
    }

    #[test]
    fn test_decode_rejects_duplicate_section_keys() {
        let text = r#"{"sections": {"Archive": [], "Archive": []}, "next_id": 1}"#;
        let reason = decode(text).unwrap_err();
        assert!(reason.contains("more than once"));
    }

    #[test]
    fn test_encode_decode_is_stable() {
        let mut board = Board::new();
        let id = board.add(Section::TodaysTasks, "Write report", Priority::Medium).unwrap();
        board.add(Section::LongTermGoals, "Learn Rust", Priority::High).unwrap();
        board.set_completed(id, true);

        let first = encode(&board).unwrap();
        let second = encode(&decode(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
