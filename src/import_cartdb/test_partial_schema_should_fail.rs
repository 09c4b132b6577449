use super::*;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test() {
    // given
    let db_file = NamedTempFile::new().unwrap();
    let pool = establish_connection(db_file.path(), true).await.unwrap();
    let mut connection = pool.acquire().await.unwrap();
    sqlx::raw_sql("CREATE TABLE pad (id INTEGER PRIMARY KEY);")
        .execute(&mut *connection)
        .await
        .unwrap();

    // when
    let result = create_schema(&mut connection).await;

    // then
    let error = result.unwrap_err();
    assert!(error.as_str().contains("already exists"));

    let tables: Vec<String> = sqlx::query_scalar(
        "
        SELECT name
        FROM sqlite_master
        WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
        ",
    )
    .fetch_all(&mut *connection)
    .await
    .unwrap();
    assert_eq!(tables, vec![String::from("pad")]);
}
