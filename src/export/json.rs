use crate::export::model::EntryExport;

/// Write the entry rows as pretty-printed JSON.
pub(crate) fn write_json(path: &str, rows: &[EntryExport]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(rows).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}
