use super::*;
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test() {
    // given
    let progress_bar = ProgressBar::hidden();
    let tmp_directory = TempDir::new().unwrap();

    let cartdb_path = tmp_directory.path().join("broken.xml");
    fs::write(
        &cartdb_path,
        r#"<database><game name="Test Game"><cartridge></game></database>"#,
    )
    .unwrap();
    let db_file = tmp_directory.path().join("broken.db");

    let matches = subcommand().get_matches_from(vec![
        "import",
        cartdb_path.to_str().unwrap(),
        db_file.to_str().unwrap(),
    ]);

    // when
    let result = main(&matches, &progress_bar).await;

    // then
    assert!(result.is_err());
    assert!(!db_file.exists());
}
