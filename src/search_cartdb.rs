use super::SimpleResult;
use super::database::*;
use super::model::*;
use super::progress::*;
use super::util::*;
use clap::builder::BoolishValueParser;
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command, value_parser};
use indicatif::ProgressBar;
use itertools::Itertools;
use sqlx::sqlite::SqliteConnection;
use std::path::PathBuf;

const SELECT_CLAUSE: &str = "
SELECT
    g.name AS game_name,
    g.region AS region,
    b.mapper AS mapper,
    b.type AS board_type,
    prg.name AS prg_name,
    prg.size AS prg_size,
    chr.name AS chr_name,
    chr.size AS chr_size,
    vram.size AS vram_size,
    wram.size AS wram_size,
    wram.battery AS battery";
const CHIP_COLUMN: &str = ",
    chip.type AS chip_type";
const FROM_CLAUSE: &str = "
FROM game AS g
JOIN cartridge AS c ON c.game_id = g.id
JOIN board AS b ON b.cartridge_id = c.id
LEFT JOIN prg ON prg.board_id = b.id
LEFT JOIN chr ON chr.board_id = b.id
LEFT JOIN vram ON vram.board_id = b.id
LEFT JOIN wram ON wram.board_id = b.id
LEFT JOIN chip ON chip.board_id = b.id";

const HEADERS: &[&str] = &[
    "game_name",
    "region",
    "mapper",
    "board_type",
    "prg_name",
    "prg_size",
    "chr_name",
    "chr_size",
    "vram_size",
    "wram_size",
    "battery",
];

#[derive(Default)]
pub struct SearchFilters {
    pub mapper: Option<i64>,
    pub battery: Option<bool>,
    pub show_chip: bool,
}

pub fn subcommand() -> Command {
    Command::new("search")
        .about("Search an imported database by mapper and battery-backed RAM")
        .arg(
            Arg::new("DATABASE")
                .help("Set the SQLite database file to search")
                .required(true)
                .index(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("MAPPER")
                .short('m')
                .long("mapper")
                .help("Filter by iNES mapper number")
                .required(false)
                .num_args(1)
                .value_parser(value_parser!(i64).range(0..)),
        )
        .arg(
            Arg::new("BATTERY")
                .short('b')
                .long("battery")
                .help("Filter by presence or absence of battery-backed RAM")
                .required(false)
                .num_args(1)
                .value_parser(BoolishValueParser::new()),
        )
        .arg(
            Arg::new("SHOWCHIP")
                .short('c')
                .long("showchip")
                .help("Show the chip column")
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("VERBOSE")
                .short('v')
                .long("verbose")
                .help("Print the SQL query")
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .group(
            ArgGroup::new("OPTIONS")
                .args(["MAPPER", "BATTERY", "SHOWCHIP", "VERBOSE"])
                .multiple(true)
                .required(true),
        )
}

pub async fn main(matches: &ArgMatches, progress_bar: &ProgressBar) -> SimpleResult<()> {
    progress_bar.set_style(get_none_progress_style());

    let db_file = matches.get_one::<PathBuf>("DATABASE").unwrap();
    require_file(db_file)?;

    let filters = SearchFilters {
        mapper: matches.get_one::<i64>("MAPPER").copied(),
        battery: matches.get_one::<bool>("BATTERY").copied(),
        show_chip: matches.get_flag("SHOWCHIP"),
    };

    if matches.get_flag("VERBOSE") {
        let (sql, parameters) = build_query(&filters);
        println!("SQL: {} {:?}", sql.trim(), parameters);
    }

    progress_bar.set_message("Searching database");
    let pool = establish_connection(db_file, false).await?;
    let mut connection = try_with!(pool.acquire().await, "Failed to acquire connection");
    let rows = search_cartdb(&mut connection, &filters).await?;
    drop(connection);
    pool.close().await;
    progress_bar.finish_and_clear();

    for line in format_rows(&rows, filters.show_chip) {
        println!("{}", line);
    }

    Ok(())
}

pub fn build_query(filters: &SearchFilters) -> (String, Vec<String>) {
    let mut sql = String::from(SELECT_CLAUSE);
    if filters.show_chip {
        sql.push_str(CHIP_COLUMN);
    }
    sql.push_str(FROM_CLAUSE);

    let mut conditions: Vec<&str> = Vec::new();
    let mut parameters: Vec<String> = Vec::new();
    if let Some(mapper) = filters.mapper {
        conditions.push("b.mapper = ?");
        parameters.push(mapper.to_string());
    }
    match filters.battery {
        Some(true) => {
            conditions.push("wram.battery = ?");
            parameters.push(String::from("1"));
        }
        Some(false) => conditions.push("wram.battery IS NULL"),
        None => (),
    }
    if !conditions.is_empty() {
        sql.push_str("\nWHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str("\nORDER BY g.name ASC");

    (sql, parameters)
}

pub async fn search_cartdb(
    connection: &mut SqliteConnection,
    filters: &SearchFilters,
) -> SimpleResult<Vec<SearchRow>> {
    let (sql, parameters) = build_query(filters);
    log::debug!("search_cartdb::search_cartdb({}, {:?})", sql, parameters);
    let mut query = sqlx::query_as::<_, SearchRow>(&sql);
    for parameter in &parameters {
        query = query.bind(parameter.as_str());
    }
    let rows = try_with!(
        query.fetch_all(&mut *connection).await,
        "Error while searching the database"
    );
    Ok(rows)
}

/// Lays the rows out as a boxed text table, one string per line.
pub fn format_rows(rows: &[SearchRow], show_chip: bool) -> Vec<String> {
    let mut headers = HEADERS.to_vec();
    if show_chip {
        headers.push("chip_type");
    }
    let cells: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| {
            let mut values = vec![
                &row.game_name,
                &row.region,
                &row.mapper,
                &row.board_type,
                &row.prg_name,
                &row.prg_size,
                &row.chr_name,
                &row.chr_size,
                &row.vram_size,
                &row.wram_size,
                &row.battery,
            ];
            if show_chip {
                values.push(&row.chip_type);
            }
            values
                .into_iter()
                .map(|value| value.as_deref().unwrap_or_default())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain([header.chars().count()])
                .max()
                .unwrap_or_default()
        })
        .collect();

    let separator = format!(
        "+{}+",
        widths.iter().map(|width| "-".repeat(width + 2)).join("+")
    );
    let format_line = |values: &[&str]| {
        format!(
            "| {} |",
            values
                .iter()
                .zip(&widths)
                .map(|(value, width)| format!("{:<width$}", value, width = *width))
                .join(" | ")
        )
    };

    let mut lines = vec![
        separator.clone(),
        format_line(headers.as_slice()),
        separator.clone(),
    ];
    lines.extend(cells.iter().map(|row| format_line(row.as_slice())));
    lines.push(separator);
    lines
}
