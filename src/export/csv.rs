use csv::Writer;

use crate::errors::AppResult;

use super::model::SessionExport;

/// Write flat session rows as CSV. Headers come from the row struct.
pub fn write_csv(path: &str, rows: &[SessionExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
