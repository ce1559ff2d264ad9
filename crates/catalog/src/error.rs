#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Cannot read catalog dataset: {0}")]
    Csv(#[from] csv::Error),
}
