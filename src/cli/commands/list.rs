use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::{load_actions_for, load_files_with_counts};
use crate::errors::AppResult;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { study } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        match study {
            Some(file_id) => print_actions(&mut pool, *file_id)?,
            None => print_files(&mut pool)?,
        }
    }
    Ok(())
}

fn print_files(pool: &mut DbPool) -> AppResult<()> {
    let files = load_files_with_counts(pool)?;

    if files.is_empty() {
        println!("No synced spreadsheets yet.");
        return Ok(());
    }

    let mut table = Table::new(vec!["id", "file", "actions"]);
    for (file, count) in files {
        table.add_row(vec![file.id.to_string(), file.name, count.to_string()]);
    }

    print!("{}", table.render());
    Ok(())
}

fn print_actions(pool: &mut DbPool, file_id: i64) -> AppResult<()> {
    let actions = load_actions_for(pool, file_id)?;

    if actions.is_empty() {
        println!("No actions recorded for file id {}.", file_id);
        return Ok(());
    }

    let mut table = Table::new(vec!["action", "seconds"]);
    for a in actions {
        table.add_row(vec![
            a.action_name,
            a.time.map(|t| t.to_string()).unwrap_or_default(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
