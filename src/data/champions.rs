use crate::error::AdvisorError;
use serde::Deserialize;
use std::collections::HashMap;

// Data Dragon champion payload, the subset the advisor reads.
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    pub data: HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionInfo {
    pub name: String,
    /// Numeric champion id, serialized as a string upstream.
    pub key: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Immutable champion metadata snapshot: id↔name resolution plus class tags.
///
/// Iteration order over `names()` is the insertion order, so that equal
/// recommendation scores come back in a reproducible order.
#[derive(Debug, Default, Clone)]
pub struct ChampionBook {
    names: Vec<String>,
    id_to_name: HashMap<i32, String>,
    name_to_id: HashMap<String, i32>,
    tags: HashMap<String, Vec<String>>,
}

impl ChampionBook {
    pub fn new() -> Self {
        ChampionBook::default()
    }

    /// Builds a book from a Data Dragon champion JSON document, ordered by
    /// champion id so the snapshot is stable across loads.
    pub fn from_data_dragon(json: &str) -> Result<Self, AdvisorError> {
        let payload: DataDragonChampions = serde_json::from_str(json)
            .map_err(|e| AdvisorError::Json(format!("Failed to parse champion data: {}", e)))?;

        let mut infos: Vec<ChampionInfo> = payload.data.into_values().collect();
        infos.sort_by_key(|info| info.key.parse::<i32>().unwrap_or(i32::MAX));

        let mut book = ChampionBook::new();
        for info in infos {
            let id = info
                .key
                .parse::<i32>()
                .map_err(|_| AdvisorError::Json(format!("Bad champion key: {}", info.key)))?;
            book.insert(id, &info.name, info.tags);
        }
        Ok(book)
    }

    pub fn insert(&mut self, id: i32, name: &str, tags: Vec<String>) {
        if !self.name_to_id.contains_key(name) {
            self.names.push(name.to_string());
        }
        self.id_to_name.insert(id, name.to_string());
        self.name_to_id.insert(name.to_string(), id);
        self.tags.insert(name.to_string(), tags);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    pub fn name_of(&self, id: i32) -> Option<&str> {
        self.id_to_name.get(&id).map(|s| s.as_str())
    }

    pub fn id_of(&self, name: &str) -> Option<i32> {
        self.name_to_id.get(name).copied()
    }

    /// Class tags for a champion; unknown names get an empty list, not an
    /// error.
    pub fn tags_of(&self, name: &str) -> &[String] {
        self.tags.get(name).map(|t| t.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_ids_and_names_both_ways() {
        let mut book = ChampionBook::new();
        book.insert(103, "Ahri", vec!["Mage".into(), "Assassin".into()]);
        book.insert(222, "Jinx", vec!["Marksman".into()]);

        assert_eq!(book.name_of(103), Some("Ahri"));
        assert_eq!(book.id_of("Jinx"), Some(222));
        assert_eq!(book.tags_of("Ahri"), &["Mage".to_string(), "Assassin".to_string()]);
        assert!(book.tags_of("Teemo").is_empty());
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut book = ChampionBook::new();
        book.insert(3, "Galio", vec![]);
        book.insert(1, "Annie", vec![]);
        book.insert(2, "Olaf", vec![]);

        let names: Vec<&str> = book.names().collect();
        assert_eq!(names, vec!["Galio", "Annie", "Olaf"]);
    }

    #[test]
    fn parses_data_dragon_payload_ordered_by_id() {
        let json = r#"{
            "data": {
                "Jinx": { "name": "Jinx", "key": "222", "tags": ["Marksman"] },
                "Annie": { "name": "Annie", "key": "1", "tags": ["Mage"] }
            }
        }"#;
        let book = ChampionBook::from_data_dragon(json).unwrap();
        let names: Vec<&str> = book.names().collect();
        assert_eq!(names, vec!["Annie", "Jinx"]);
        assert_eq!(book.id_of("Jinx"), Some(222));
    }
}
