//! Dataset catalog port

use super::super::models::Dataset;

/// Read access to declared datasets
pub trait DatasetCatalog {
    /// All datasets, sorted by name
    fn datasets(&self) -> Vec<Dataset>;

    /// Look up a dataset by name
    fn dataset(&self, name: &str) -> Option<Dataset> {
        self.datasets().into_iter().find(|d| d.name == name)
    }
}
