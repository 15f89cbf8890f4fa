use crate::error::CoreError;
use crate::models::ColumnChoice;

/// Capability interface for choosing the date and description columns of a
/// worksheet.
///
/// The core never depends on a concrete presentation toolkit: the CLI
/// supplies an interactive implementation, tests and headless runs supply
/// [`FixedColumnProvider`]. `Ok(None)` means the user cancelled, and the
/// worksheet is skipped silently.
pub trait ColumnProvider {
    fn select(
        &self,
        worksheet: &str,
        columns: &[String],
        defaults: Option<(&str, &str)>,
    ) -> Result<Option<ColumnChoice>, CoreError>;
}

/// A provider that always returns the same column pair. Used for headless
/// invocation and tests.
#[derive(Debug, Clone)]
pub struct FixedColumnProvider {
    pub date_column: String,
    pub description_column: String,
    pub save: bool,
}

impl ColumnProvider for FixedColumnProvider {
    fn select(
        &self,
        _worksheet: &str,
        _columns: &[String],
        _defaults: Option<(&str, &str)>,
    ) -> Result<Option<ColumnChoice>, CoreError> {
        Ok(Some(ColumnChoice {
            date_column: self.date_column.clone(),
            description_column: self.description_column.clone(),
            save: self.save,
        }))
    }
}
