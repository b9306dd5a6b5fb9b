use std::fs;

use rusqlite::{OptionalExtension, params};

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::DAY_PREFIX;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{CYAN}• File:{RESET} {YELLOW}{db_path}{RESET}");
    println!("{CYAN}• Size:{RESET} {file_mb:.2} MB");

    //
    // 2) DAY RECORDS
    //
    let day_like = format!("{DAY_PREFIX}%");
    let count: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM records WHERE key LIKE ?1",
        params![day_like],
        |row| row.get(0),
    )?;
    println!("{CYAN}• Day records:{RESET} {GREEN}{count}{RESET}");

    //
    // 3) DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT key FROM records WHERE key LIKE ?1 ORDER BY key ASC LIMIT 1",
            params![day_like],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT key FROM records WHERE key LIKE ?1 ORDER BY key DESC LIMIT 1",
            params![day_like],
            |row| row.get(0),
        )
        .optional()?;

    let strip = |k: Option<String>| {
        k.map(|k| k.trim_start_matches(DAY_PREFIX).to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{CYAN}• Date range:{RESET}");
    println!("    from: {}", strip(first));
    println!("    to:   {}", strip(last));

    //
    // 4) LOG LINES
    //
    let log_count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{CYAN}• Log lines:{RESET} {log_count}");

    println!();
    Ok(())
}
