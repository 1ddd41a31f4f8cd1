use crate::export::model::EntryExport;
use csv::Writer;

/// Write the entry rows as CSV to the given file.
pub(crate) fn write_csv(path: &str, rows: &[EntryExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["category", "metric", "value", "timestamp"])?;

    for row in rows {
        wtr.write_record(&[
            row.category.clone(),
            row.metric.clone(),
            row.value.to_string(),
            row.timestamp.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
