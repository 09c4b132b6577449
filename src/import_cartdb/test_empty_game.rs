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
            <game name="Game Without Cartridge"/>
            <game name="Game With Empty Board">
                <cartridge system="NES-NTSC">
                    <board type="NES-NROM-128">
                        <chip type="74HC161"/>
                    </board>
                    <board type="NES-CNROM"/>
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
    assert_eq!(count_rows(&mut connection, &GAME).await.unwrap(), 2);
    assert_eq!(count_rows(&mut connection, &CARTRIDGE).await.unwrap(), 1);
    assert_eq!(count_rows(&mut connection, &BOARD).await.unwrap(), 2);
    assert_eq!(count_rows(&mut connection, &CHIP).await.unwrap(), 1);
    assert_eq!(count_rows(&mut connection, &CHIP_PIN).await.unwrap(), 0);

    let cartridges_per_game: Vec<(Option<String>, i64)> = sqlx::query_as(
        "
        SELECT g.name, COUNT(c.id)
        FROM game AS g
        LEFT JOIN cartridge AS c ON c.game_id = g.id
        GROUP BY g.id
        ORDER BY g.id
        ",
    )
    .fetch_all(&mut *connection)
    .await
    .unwrap();
    assert_eq!(
        cartridges_per_game,
        vec![
            (Some(String::from("Game Without Cartridge")), 0),
            (Some(String::from("Game With Empty Board")), 1),
        ]
    );

    let chips_per_board: Vec<(Option<String>, i64)> = sqlx::query_as(
        "
        SELECT b.type, COUNT(c.id)
        FROM board AS b
        LEFT JOIN chip AS c ON c.board_id = b.id
        GROUP BY b.id
        ORDER BY b.id
        ",
    )
    .fetch_all(&mut *connection)
    .await
    .unwrap();
    assert_eq!(
        chips_per_board,
        vec![
            (Some(String::from("NES-NROM-128")), 1),
            (Some(String::from("NES-CNROM")), 0),
        ]
    );
}
