use super::SimpleResult;
use super::database::*;
use super::progress::*;
use super::schema::TABLES;
use super::util::*;
use clap::{Arg, ArgMatches, Command, value_parser};
use indicatif::ProgressBar;
use sqlx::sqlite::SqliteConnection;
use std::path::PathBuf;

pub fn subcommand() -> Command {
    Command::new("info")
        .about("Print the row count of every table of an imported database")
        .arg(
            Arg::new("DATABASE")
                .help("Set the SQLite database file to inspect")
                .required(true)
                .index(1)
                .value_parser(value_parser!(PathBuf)),
        )
}

pub async fn main(matches: &ArgMatches, progress_bar: &ProgressBar) -> SimpleResult<()> {
    progress_bar.set_style(get_none_progress_style());

    let db_file = matches.get_one::<PathBuf>("DATABASE").unwrap();
    require_file(db_file)?;

    let pool = establish_connection(db_file, false).await?;
    let mut connection = try_with!(pool.acquire().await, "Failed to acquire connection");

    progress_bar.set_message("Counting rows");
    let counts = count_tables(&mut connection).await?;
    progress_bar.finish_and_clear();

    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    for (table, count) in counts {
        println!("{}: {}", table, count);
    }

    Ok(())
}

pub async fn count_tables(
    connection: &mut SqliteConnection,
) -> SimpleResult<Vec<(&'static str, i64)>> {
    let mut counts = Vec::with_capacity(TABLES.len());
    for table in TABLES {
        counts.push((table.name, count_rows(connection, table).await?));
    }
    Ok(counts)
}
