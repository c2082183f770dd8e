use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::path::{
    Path,
    PathBuf
};
use std::sync::Arc;

use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::integration::integrator::Integrator;
use crate::math::integration::integratormanager::IntegratorManager;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    integrator: Vec<serde_json::Value>
}

/// 由 JSON 設定檔宣告的具名積分器集合，例如：
///
/// ```json
/// { "integrator": [
///     { "name": "Simpson",  "method": "Simpson" },
///     { "name": "Gauss160", "method": "GaussLegendre",
///       "table_path": "gauss_quad_points_160.dat" } ] }
/// ```
pub struct Configuration {
    integrator_manager_cell: RefCell<Manager<Arc<dyn Integrator>, PathBuf>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            integrator_manager_cell: RefCell::new(IntegratorManager::new())
        }
    }

    pub fn integrator_manager(&self) -> RefMut<'_, Manager<Arc<dyn Integrator>, PathBuf>> {
        self.integrator_manager_cell.borrow_mut()
    }

    pub fn integrator(&self, name: &str) -> Result<Arc<dyn Integrator>, ManagerError> {
        self.integrator_manager().get(name)
    }

    /// `table_path` 若為相對路徑，以 `file_path` 所在目錄為基準。
    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let base_dir = file_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let integrator_manager = self.integrator_manager();
        integrator_manager.insert_obj_from_json_vec(&json_prop.integrator, &base_dir)
    }
}
