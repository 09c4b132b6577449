use super::SimpleResult;
use super::model::*;
use super::schema::*;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions};
use sqlx::Acquire;
use std::path::Path;

pub async fn establish_connection(db_file: &Path, create: bool) -> SimpleResult<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(db_file)
        .create_if_missing(create)
        .foreign_keys(true);

    let pool = try_with!(
        SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .connect_with(options)
            .await,
        "Failed to connect to {:?}",
        db_file
    );

    Ok(pool)
}

pub async fn close_connection(pool: &SqlitePool) -> SimpleResult<()> {
    try_with!(
        sqlx::raw_sql("PRAGMA optimize;").execute(pool).await,
        "Failed to optimize the database"
    );
    pool.close().await;
    Ok(())
}

/// Creates every table in a single transaction.
///
/// Fails when any of the tables already exists, leaving the database untouched.
pub async fn create_schema(connection: &mut SqliteConnection) -> SimpleResult<()> {
    log::debug!("database::create_schema()");
    let mut transaction = try_with!(connection.begin().await, "Failed to begin transaction");
    try_with!(
        sqlx::raw_sql(&SCHEMA).execute(&mut *transaction).await,
        "Failed to create schema"
    );
    try_with!(transaction.commit().await, "Failed to commit transaction");
    Ok(())
}

async fn insert_row(
    connection: &mut SqliteConnection,
    table: &Table,
    parent_id: Option<i64>,
    node: &Node,
) -> SimpleResult<i64> {
    if table.parent.is_some() != parent_id.is_some() {
        bail!("Mismatched parent id for {} row", table.name);
    }
    let sql = table.insert_statement();
    let mut query = sqlx::query(&sql);
    if let Some(parent_id) = parent_id {
        query = query.bind(parent_id);
    }
    for column in table.columns {
        query = query.bind(node.attribute(column.attribute));
    }
    let result = try_with!(
        query.execute(&mut *connection).await,
        "Error while creating {}",
        table.name
    );
    Ok(result.last_insert_rowid())
}

pub async fn create_game(connection: &mut SqliteConnection, game: &Node) -> SimpleResult<i64> {
    log::debug!("database::create_game({:?})", game.attribute("name"));
    insert_row(connection, &GAME, None, game).await
}

pub async fn create_device(
    connection: &mut SqliteConnection,
    game_id: i64,
    device: &Node,
) -> SimpleResult<i64> {
    log::debug!("database::create_device({})", game_id);
    insert_row(connection, &DEVICE, Some(game_id), device).await
}

pub async fn create_cartridge(
    connection: &mut SqliteConnection,
    game_id: i64,
    cartridge: &Node,
) -> SimpleResult<i64> {
    log::debug!("database::create_cartridge({})", game_id);
    insert_row(connection, &CARTRIDGE, Some(game_id), cartridge).await
}

pub async fn create_board(
    connection: &mut SqliteConnection,
    cartridge_id: i64,
    board: &Node,
) -> SimpleResult<i64> {
    log::debug!("database::create_board({})", cartridge_id);
    insert_row(connection, &BOARD, Some(cartridge_id), board).await
}

pub async fn create_prg(
    connection: &mut SqliteConnection,
    board_id: i64,
    prg: &Node,
) -> SimpleResult<i64> {
    insert_row(connection, &PRG, Some(board_id), prg).await
}

pub async fn create_chr(
    connection: &mut SqliteConnection,
    board_id: i64,
    chr: &Node,
) -> SimpleResult<i64> {
    insert_row(connection, &CHR, Some(board_id), chr).await
}

pub async fn create_vram(
    connection: &mut SqliteConnection,
    board_id: i64,
    vram: &Node,
) -> SimpleResult<i64> {
    insert_row(connection, &VRAM, Some(board_id), vram).await
}

pub async fn create_wram(
    connection: &mut SqliteConnection,
    board_id: i64,
    wram: &Node,
) -> SimpleResult<i64> {
    insert_row(connection, &WRAM, Some(board_id), wram).await
}

pub async fn create_chip(
    connection: &mut SqliteConnection,
    board_id: i64,
    chip: &Node,
) -> SimpleResult<i64> {
    log::debug!("database::create_chip({})", board_id);
    insert_row(connection, &CHIP, Some(board_id), chip).await
}

pub async fn create_chip_pin(
    connection: &mut SqliteConnection,
    chip_id: i64,
    pin: &Node,
) -> SimpleResult<i64> {
    insert_row(connection, &CHIP_PIN, Some(chip_id), pin).await
}

pub async fn create_cic(
    connection: &mut SqliteConnection,
    board_id: i64,
    cic: &Node,
) -> SimpleResult<i64> {
    insert_row(connection, &CIC, Some(board_id), cic).await
}

pub async fn create_pad(
    connection: &mut SqliteConnection,
    board_id: i64,
    pad: &Node,
) -> SimpleResult<i64> {
    insert_row(connection, &PAD, Some(board_id), pad).await
}

pub async fn count_rows(connection: &mut SqliteConnection, table: &Table) -> SimpleResult<i64> {
    let count = try_with!(
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table.name))
            .fetch_one(&mut *connection)
            .await,
        "Error while counting {} rows",
        table.name
    );
    Ok(count)
}
