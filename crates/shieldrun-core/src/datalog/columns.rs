//! Column name normalization

/// Normalize a column header into an identifier-friendly name.
///
/// Trims surrounding whitespace, replaces spaces with `_`, removes
/// parentheses and replaces `/` with `_per_`, in that order.
///
/// ```
/// use shieldrun_core::datalog::normalize_column_name;
///
/// assert_eq!(normalize_column_name("Baratron (Torr)"), "Baratron_Torr");
/// assert_eq!(normalize_column_name("Flow (sccm/min)"), "Flow_sccm_per_min");
/// ```
pub fn normalize_column_name(name: &str) -> String {
    name.trim()
        .replace(' ', "_")
        .replace(['(', ')'], "")
        .replace('/', "_per_")
}

/// Normalize every header in order
pub fn normalize_columns<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().map(normalize_column_name).collect()
}
