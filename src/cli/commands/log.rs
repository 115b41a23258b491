use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            let pool = DbPool::new(&cfg.database)?;
            init_db(&pool.conn)?;

            let rows = load_log(&pool.conn)?;

            if rows.is_empty() {
                println!("Internal log is empty.");
                return Ok(());
            }

            for (date, operation, message) in rows {
                println!("{}  [{}]  {}", date, operation, message);
            }
        }
    }
    Ok(())
}
