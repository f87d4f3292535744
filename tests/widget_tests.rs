use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_data, setup_test_db, ss_db};

#[test]
fn test_widget_defaults_are_shown() {
    let db = setup_test_db("widget_defaults");
    init_db(&db);

    ss_db(&db)
        .args(["widget", "--show"])
        .assert()
        .success()
        .stdout(contains("\"animation\": \"wave\""))
        .stdout(contains("#0EA5E9"));
}

#[test]
fn test_widget_settings_are_saved() {
    let db = setup_test_db("widget_save");
    init_db(&db);

    ss_db(&db)
        .args([
            "widget",
            "--title",
            "Tours cancelled",
            "--animation",
            "slide",
            "--show-icon",
            "false",
        ])
        .assert()
        .success()
        .stdout(contains("Widget settings saved"));

    ss_db(&db)
        .args(["widget", "--show"])
        .assert()
        .success()
        .stdout(contains("Tours cancelled"))
        .stdout(contains("\"animation\": \"slide\""))
        .stdout(contains("\"showIcon\": false"));
}

#[test]
fn test_widget_rejects_bad_values() {
    let db = setup_test_db("widget_bad");
    init_db(&db);

    ss_db(&db)
        .args(["widget", "--primary-color", "blue"])
        .assert()
        .failure()
        .stderr(contains("#RRGGBB"));

    // unknown enum codes never reach the store
    ss_db(&db)
        .args(["widget", "--layout", "fancy"])
        .assert()
        .failure();
}

#[test]
fn test_widget_preview_lists_active_dates() {
    let db = setup_test_db("widget_preview");
    init_db_with_data(&db);

    ss_db(&db)
        .args(["widget", "--preview"])
        .assert()
        .success()
        .stdout(contains("alert-widget"))
        .stdout(contains(" and "))
        .stdout(contains("09:00 - 12:00"));
}

#[test]
fn test_embed_snippets() {
    let db = setup_test_db("embed_snippets");
    init_db(&db);

    ss_db(&db)
        .args(["embed", "--base-url", "https://alerts.example.com/"])
        .assert()
        .success()
        .stdout(contains(r#"<iframe src="https://alerts.example.com/embed""#))
        .stdout(contains(r#"<script src="https://alerts.example.com/embed.js" async></script>"#));
}
