use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::managererror::ManagerError;

#[derive(Deserialize)]
struct NamedJsonObject {
    name: String
}

/// 以名稱索引、由 JSON 建構物件的容器。
///
/// `S` 為建構時需要的額外資訊（例如相對路徑的基準目錄）。
pub trait IManager<V, S> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json_vec(&self,
                                json_vec: &[serde_json::Value],
                                supports: &S) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone(), supports)?;
        }
        Ok(())
    }

    /// 讀取單一物件或物件陣列。
    fn from_reader<P: AsRef<Path>>(&self,
                                   file_path: P,
                                   supports: &S) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&json_array, supports)
        } else {
            self.insert_obj_from_json(json_value, supports)
        }
    }
}


pub struct Manager<V, S> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(&str, serde_json::Value, &S) -> Result<V, ManagerError>
}


impl<V, S> Manager<V, S> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(&str, serde_json::Value, &S) -> Result<V, ManagerError>) -> Manager<V, S> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }
}

impl<V, S> IManager<V, S> for Manager<V, S> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(&named_object.name, json_value, supports)?;
        debug!("registered '{}'", named_object.name);
        self.map().insert(named_object.name, v);
        Ok(())
    }
}
