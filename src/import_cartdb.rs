use super::SimpleResult;
use super::cartdb::*;
use super::database::*;
use super::model::*;
use super::progress::*;
use super::util::*;
use clap::{Arg, ArgMatches, Command, value_parser};
use indicatif::ProgressBar;
use sqlx::sqlite::SqliteConnection;
use std::path::PathBuf;

pub fn subcommand() -> Command {
    Command::new("import")
        .about("Import a NES cartridge database into a new SQLite database")
        .arg(
            Arg::new("CARTDB")
                .help("Set the cartridge database XML file to import")
                .required(true)
                .index(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("DATABASE")
                .help("Set the SQLite database file to create")
                .required(true)
                .index(2)
                .value_parser(value_parser!(PathBuf)),
        )
}

pub async fn main(matches: &ArgMatches, progress_bar: &ProgressBar) -> SimpleResult<()> {
    let cartdb_path = get_canonicalized_path(matches.get_one::<PathBuf>("CARTDB").unwrap())?;
    let db_file = matches.get_one::<PathBuf>("DATABASE").unwrap();

    progress_bar.set_message("Parsing cartridge database");
    let root = parse_cartdb_file(&cartdb_path)?;

    let pool = establish_connection(db_file, true).await?;
    let mut connection = try_with!(pool.acquire().await, "Failed to acquire connection");

    create_schema(&mut connection).await?;
    import_cartdb(&mut connection, progress_bar, &root).await?;

    drop(connection);
    close_connection(&pool).await?;

    progress_bar.finish_and_clear();
    println!("Data imported successfully into {}", db_file.display());

    Ok(())
}

pub async fn import_cartdb(
    connection: &mut SqliteConnection,
    progress_bar: &ProgressBar,
    root: &Node,
) -> SimpleResult<()> {
    let games: Vec<&Node> = root.elements("game").collect();
    log::info!(
        "importing {} games from <{}> version {:?}",
        games.len(),
        root.name,
        root.attribute("version")
    );

    progress_bar.set_style(get_count_progress_style());
    progress_bar.set_length(games.len() as u64);
    progress_bar.set_position(0);
    progress_bar.set_message("Importing games");

    for game in games {
        import_game(connection, progress_bar, game).await?;
        progress_bar.inc(1);
    }

    Ok(())
}

async fn import_game(
    connection: &mut SqliteConnection,
    progress_bar: &ProgressBar,
    game: &Node,
) -> SimpleResult<i64> {
    let game_id = create_game(connection, game).await?;
    match game.attribute("name") {
        Some(name) => progress_bar.suspend(|| println!("{}", name)),
        None => log::warn!("game {} has no name", game_id),
    }

    if let Some(peripherals) = game.element("peripherals") {
        for device in peripherals.elements("device") {
            create_device(connection, game_id, device).await?;
        }
    }

    for cartridge in game.elements("cartridge") {
        let cartridge_id = create_cartridge(connection, game_id, cartridge).await?;
        for board in cartridge.elements("board") {
            import_board(connection, cartridge_id, board).await?;
        }
    }

    Ok(game_id)
}

async fn import_board(
    connection: &mut SqliteConnection,
    cartridge_id: i64,
    board: &Node,
) -> SimpleResult<i64> {
    let board_id = create_board(connection, cartridge_id, board).await?;

    for prg in board.elements("prg") {
        create_prg(connection, board_id, prg).await?;
    }
    for chr in board.elements("chr") {
        create_chr(connection, board_id, chr).await?;
    }
    for vram in board.elements("vram") {
        create_vram(connection, board_id, vram).await?;
    }
    for wram in board.elements("wram") {
        create_wram(connection, board_id, wram).await?;
    }
    for chip in board.elements("chip") {
        let chip_id = create_chip(connection, board_id, chip).await?;
        for pin in chip.elements("pin") {
            create_chip_pin(connection, chip_id, pin).await?;
        }
    }
    for cic in board.elements("cic") {
        create_cic(connection, board_id, cic).await?;
    }
    for pad in board.elements("pad") {
        create_pad(connection, board_id, pad).await?;
    }

    Ok(board_id)
}

#[cfg(test)]
mod test_empty_game;
#[cfg(test)]
mod test_malformed_should_fail;
#[cfg(test)]
mod test_partial_schema_should_fail;
#[cfg(test)]
mod test_single_game;
