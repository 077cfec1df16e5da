use cinemetrics::catalog::{Catalog, CatalogImporter};
use cinemetrics::config::DatasetConfig;
use cinemetrics::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::io::Cursor;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type SharedCatalog = Arc<Catalog>;

/// Load the configured dataset once at startup; the resulting catalog is
/// shared read-only for the lifetime of the process.
pub(crate) fn load_catalog(dataset: &DatasetConfig) -> Result<SharedCatalog, AppError> {
    let catalog = CatalogImporter::from_path(&dataset.path)?;
    Ok(Arc::new(catalog))
}

/// Build a catalog from a CSV payload submitted with a request.
pub(crate) fn inline_catalog(csv: String) -> Result<Catalog, AppError> {
    CatalogImporter::from_reader(Cursor::new(csv.into_bytes())).map_err(AppError::from)
}
