use super::super::schema::*;
use super::*;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test() {
    // given
    let progress_bar = ProgressBar::hidden();

    let db_file = NamedTempFile::new().unwrap();
    let pool = establish_connection(db_file.path(), true).await.unwrap();
    let mut connection = pool.acquire().await.unwrap();
    create_schema(&mut connection).await.unwrap();

    let root = parse_cartdb(
        r#"<database>
            <game name="Test Game">
                <cartridge system="NES">
                    <board mapper="4">
                        <prg size="128k"/>
                        <chip type="mapper"><pin number="1" function="A0"/></chip>
                    </board>
                </cartridge>
            </game>
        </database>"#
            .as_bytes(),
    )
    .unwrap();

    // when
    import_cartdb(&mut connection, &progress_bar, &root)
        .await
        .unwrap();

    // then
    for table in [&DEVICE, &CHR, &VRAM, &WRAM, &CIC, &PAD] {
        assert_eq!(count_rows(&mut connection, table).await.unwrap(), 0);
    }

    let games: Vec<(i64, Option<String>)> = sqlx::query_as("SELECT id, name FROM game")
        .fetch_all(&mut *connection)
        .await
        .unwrap();
    assert_eq!(games.len(), 1);
    let (game_id, game_name) = games.first().unwrap();
    assert_eq!(game_name.as_deref(), Some("Test Game"));

    let cartridges: Vec<(i64, i64, Option<String>)> =
        sqlx::query_as("SELECT id, game_id, system FROM cartridge")
            .fetch_all(&mut *connection)
            .await
            .unwrap();
    assert_eq!(cartridges.len(), 1);
    let (cartridge_id, cartridge_game_id, system) = cartridges.first().unwrap();
    assert_eq!(cartridge_game_id, game_id);
    assert_eq!(system.as_deref(), Some("NES"));

    let boards: Vec<(i64, i64, Option<String>)> =
        sqlx::query_as("SELECT id, cartridge_id, mapper FROM board")
            .fetch_all(&mut *connection)
            .await
            .unwrap();
    assert_eq!(boards.len(), 1);
    let (board_id, board_cartridge_id, mapper) = boards.first().unwrap();
    assert_eq!(board_cartridge_id, cartridge_id);
    assert_eq!(mapper.as_deref(), Some("4"));

    let prgs: Vec<(i64, Option<String>)> = sqlx::query_as("SELECT board_id, size FROM prg")
        .fetch_all(&mut *connection)
        .await
        .unwrap();
    assert_eq!(prgs, vec![(*board_id, Some(String::from("128k")))]);

    let chips: Vec<(i64, i64, Option<String>)> =
        sqlx::query_as("SELECT id, board_id, type FROM chip")
            .fetch_all(&mut *connection)
            .await
            .unwrap();
    assert_eq!(chips.len(), 1);
    let (chip_id, chip_board_id, chip_type) = chips.first().unwrap();
    assert_eq!(chip_board_id, board_id);
    assert_eq!(chip_type.as_deref(), Some("mapper"));

    let pins: Vec<(i64, Option<String>, Option<String>)> =
        sqlx::query_as("SELECT chip_id, number, function FROM chip_pin")
            .fetch_all(&mut *connection)
            .await
            .unwrap();
    assert_eq!(
        pins,
        vec![(
            *chip_id,
            Some(String::from("1")),
            Some(String::from("A0"))
        )]
    );
}
