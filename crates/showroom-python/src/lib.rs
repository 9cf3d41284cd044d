//! PyO3 bindings for the Showroom catalog engine.

use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use serde::Serialize;

use showroom_core::config::{CatalogConfig, VehicleId};
use showroom_core::filter::FilterSpec;
use showroom_core::intake::VehicleSubmission;
use showroom_core::{CatalogError, Session};

/// Python-visible catalog configuration.
#[pyclass]
#[derive(Clone)]
struct PyCatalogConfig {
    #[pyo3(get, set)]
    placeholder_image: String,
    #[pyo3(get, set)]
    wildcard_label: String,
    #[pyo3(get, set)]
    min_year: i32,
    #[pyo3(get, set)]
    max_year: i32,
}

#[pymethods]
impl PyCatalogConfig {
    #[new]
    #[pyo3(signature = (placeholder_image = None, wildcard_label = None, min_year = None, max_year = None))]
    fn new(
        placeholder_image: Option<String>,
        wildcard_label: Option<String>,
        min_year: Option<i32>,
        max_year: Option<i32>,
    ) -> Self {
        let defaults = CatalogConfig::default();
        Self {
            placeholder_image: placeholder_image.unwrap_or(defaults.placeholder_image),
            wildcard_label: wildcard_label.unwrap_or(defaults.wildcard_label),
            min_year: min_year.unwrap_or(defaults.min_year),
            max_year: max_year.unwrap_or(defaults.max_year),
        }
    }
}

impl From<PyCatalogConfig> for CatalogConfig {
    fn from(py_config: PyCatalogConfig) -> Self {
        CatalogConfig {
            placeholder_image: py_config.placeholder_image,
            wildcard_label: py_config.wildcard_label,
            min_year: py_config.min_year,
            max_year: py_config.max_year,
        }
    }
}

fn to_py_err(e: CatalogError) -> PyErr {
    match e {
        CatalogError::NotFound(_) => PyKeyError::new_err(e.to_string()),
        CatalogError::Validation(_)
        | CatalogError::DuplicateId(_)
        | CatalogError::InvalidRecord { .. }
        | CatalogError::InvalidConfig(_) => PyValueError::new_err(e.to_string()),
        _ => PyRuntimeError::new_err(e.to_string()),
    }
}

/// Serialize to JSON then parse into a Python object.
fn to_py<T: Serialize>(py: Python<'_>, value: &T) -> PyResult<PyObject> {
    let json_str = serde_json::to_string(value)
        .map_err(|e: serde_json::Error| PyRuntimeError::new_err(e.to_string()))?;
    let json_module = py.import("json")?;
    Ok(json_module.call_method1("loads", (json_str,))?.unbind())
}

/// One browsing session over an inventory.
#[pyclass]
struct PyCatalog {
    session: Session,
}

#[pymethods]
impl PyCatalog {
    /// Open a session from an inventory JSON file, or an empty one.
    #[new]
    #[pyo3(signature = (inventory = None, config = None))]
    fn new(inventory: Option<&str>, config: Option<PyCatalogConfig>) -> PyResult<Self> {
        let config: CatalogConfig = config.map(Into::into).unwrap_or_default();
        config.validate().map_err(to_py_err)?;
        let session = match inventory {
            Some(path) => Session::load(path, config).map_err(to_py_err)?,
            None => Session::new(config),
        };
        Ok(Self { session })
    }

    /// Available vehicles matching the given filter inputs.
    #[pyo3(signature = (search = "", make = "", body_type = "", max_price = "", min_year = ""))]
    fn catalog(
        &self,
        py: Python<'_>,
        search: &str,
        make: &str,
        body_type: &str,
        max_price: &str,
        min_year: &str,
    ) -> PyResult<PyObject> {
        let spec = FilterSpec::from_inputs(
            search,
            make,
            body_type,
            max_price,
            min_year,
            &self.session.config().wildcard_label,
        );
        to_py(py, &self.session.catalog(&spec))
    }

    fn detail(&self, py: Python<'_>, id: u64) -> PyResult<PyObject> {
        let detail = self.session.detail(VehicleId(id)).map_err(to_py_err)?;
        to_py(py, &detail)
    }

    fn flagged(&self, py: Python<'_>) -> PyResult<PyObject> {
        to_py(py, &self.session.flagged())
    }

    fn flagged_count(&self) -> usize {
        self.session.flagged_count()
    }

    /// Flip a vehicle's possible-purchase flag. Returns True when now flagged.
    fn toggle(&mut self, id: u64) -> PyResult<bool> {
        let outcome = self.session.toggle(VehicleId(id)).map_err(to_py_err)?;
        Ok(outcome.is_flagged())
    }

    /// Validate and add a listing from a dict of form strings.
    fn submit(&mut self, py: Python<'_>, form: Bound<'_, PyAny>) -> PyResult<PyObject> {
        let json_module = py.import("json")?;
        let raw: String = json_module.call_method1("dumps", (form,))?.extract()?;
        let submission: VehicleSubmission =
            serde_json::from_str(&raw).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let vehicle = self.session.submit(&submission).map_err(to_py_err)?;
        to_py(py, &vehicle)
    }

    fn snapshot(&self, py: Python<'_>) -> PyResult<PyObject> {
        to_py(py, &self.session.snapshot())
    }

    fn __len__(&self) -> usize {
        self.session.store().len()
    }
}

/// Return the Showroom engine version.
#[pyfunction]
fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Showroom Rust catalog engine.
#[pymodule]
fn _showroom_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(version, m)?)?;
    m.add_class::<PyCatalogConfig>()?;
    m.add_class::<PyCatalog>()?;
    Ok(())
}
