//! High-level export flow: select day records, pick a writer.

use std::path::Path;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::remote::snapshot;
use crate::store::{DAY_PREFIX, Store, day_key};
use crate::utils::date::dates_from_range;

use super::{ExportFormat, fs_utils, model, notify_export_success};

pub struct ExportLogic;

impl ExportLogic {
    pub fn run(
        store: &dyn Store,
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        fs_utils::check_output_path(file, force)?;

        let records = collect_records(store, range)?;

        match format {
            ExportFormat::Csv => {
                let rows: Vec<_> = records.iter().flat_map(model::day_to_rows).collect();
                super::csv::write_csv(file, &rows)?;
            }
            ExportFormat::Json => {
                let snap = snapshot::from_records(store, cfg, &records)?;
                super::json::write_json(file, snap)?;
            }
        }

        notify_export_success(format.as_str(), Path::new(file));
        Ok(())
    }
}

fn collect_records(store: &dyn Store, range: Option<&str>) -> AppResult<Vec<DayRecord>> {
    let mut out = Vec::new();

    match range {
        None | Some("all") => {
            for key in store.keys(DAY_PREFIX)? {
                if let Some(json) = store.get(&key)? {
                    out.push(serde_json::from_str(&json)?);
                }
            }
        }
        Some(spec) => {
            for date in dates_from_range(spec)? {
                if let Some(json) = store.get(&day_key(date))? {
                    out.push(serde_json::from_str(&json)?);
                }
            }
        }
    }

    Ok(out)
}
