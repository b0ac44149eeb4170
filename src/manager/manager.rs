use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use super::managererror::{CalendarError, parse_json_value};
use super::namedobject::NamedJsonObject;

/// Keyed registry of objects built from JSON documents.
///
/// Every document must carry a `country` field; it becomes the lookup key
/// (lowercased). Inserting a document with an existing key replaces it.
pub struct Manager<V> {
    map: RwLock<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, CalendarError>
}

impl<V> Manager<V>
where
    V: Clone
{
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, CalendarError>) -> Manager<V> {
        Manager {
            map: RwLock::new(HashMap::new()),
            get_obj_from_json
        }
    }

    pub fn get(&self, name: &str) -> Result<V, CalendarError> {
        let map = self.map.read().unwrap_or_else(PoisonError::into_inner);
        map.get(&name.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| CalendarError::UnknownTerritory(name.to_owned()))
    }

    pub fn insert(&self, name: String, value: V) {
        let mut map = self.map.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(name.to_ascii_lowercase(), value);
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let map = self.map.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), CalendarError> {
        let named_object: NamedJsonObject = parse_json_value(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        debug!(country = named_object.country(), "registered territory");
        self.insert(named_object.key(), v);
        Ok(())
    }

    pub fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), CalendarError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    /// Accepts either a single document or an array of them.
    pub fn insert_from_json_value(&self, json_value: serde_json::Value) -> Result<(), CalendarError> {
        match json_value {
            serde_json::Value::Array(json_array) => self.insert_obj_from_json_vec(&json_array),
            other => self.insert_obj_from_json(other)
        }
    }

    pub fn from_str(&self, json: &str) -> Result<(), CalendarError> {
        let json_value: serde_json::Value = serde_json::from_str(json)?;
        self.insert_from_json_value(json_value)
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), CalendarError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.insert_from_json_value(json_value)
    }
}
