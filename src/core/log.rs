use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREY, RESET};

/// Printing of the internal log table.
pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare(
            "SELECT date, operation, target, message
             FROM log
             ORDER BY date DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        println!();
        for r in rows {
            let (date, operation, target, message) = r?;
            println!(
                "{GREY}{date}{RESET} {CYAN}{operation:<16}{RESET} {target:<20} {message}"
            );
        }
        println!();

        Ok(())
    }
}
