use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        if *check {
            println!("▶ Running integrity check…");
            if stats::integrity_check(&mut pool)? {
                println!("✔ Integrity check passed.");
            } else {
                println!("✖ Integrity check FAILED.");
            }
        }

        if *vacuum {
            println!("▶ Running VACUUM…");
            stats::vacuum(&mut pool)?;
            println!("✔ VACUUM completed.");
        }
    }
    Ok(())
}
