use std::path::{
    Path,
    PathBuf
};
use std::sync::Arc;

use log::info;
use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::integration::gausslegendre::gaussintegrator::GaussIntegrator;
use crate::math::integration::integrator::{
    IntegrationMethod,
    Integrator
};
use crate::math::integration::simpson::SimpsonIntegrator;
use crate::math::integration::trapezoid::TrapezoidIntegrator;

#[derive(Deserialize)]
struct IntegratorTypedObject {
    method: IntegrationMethod
}

#[derive(Deserialize)]
struct GaussIntegratorJsonProp {
    table_path: PathBuf
}

/// 相對路徑以設定檔所在目錄為基準。
fn resolve_table_path(table_path: &Path, base_dir: &Path) -> PathBuf {
    if table_path.is_absolute() {
        table_path.to_path_buf()
    } else {
        base_dir.join(table_path)
    }
}

fn get_integrator_from_json(name: &str,
                            json_value: serde_json::Value,
                            base_dir: &PathBuf) -> Result<Arc<dyn Integrator>, ManagerError> {
    let typed_object: IntegratorTypedObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
    let integrator: Arc<dyn Integrator> = match typed_object.method {
        IntegrationMethod::Trapezoid => {
            Arc::new(TrapezoidIntegrator::new())
        },
        IntegrationMethod::Simpson => {
            Arc::new(SimpsonIntegrator::new())
        },
        IntegrationMethod::GaussLegendre => {
            let json_prop: GaussIntegratorJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
            let table_path = resolve_table_path(&json_prop.table_path, base_dir);
            let gauss_integrator = GaussIntegrator::new(&table_path).map_err(|source| {
                ManagerError::QuadratureTableError { name: name.to_owned(), source }
            })?;
            info!(
                "integrator '{}' uses gauss-legendre table '{}' (max order {})",
                name,
                table_path.display(),
                gauss_integrator.max_order()
            );
            Arc::new(gauss_integrator)
        }
    };
    Ok(integrator)
}


pub struct IntegratorManager;


impl IntegratorManager {
    pub fn new() -> Manager<Arc<dyn Integrator>, PathBuf> {
        Manager::new(get_integrator_from_json)
    }
}
