use predicates::str::contains;

mod common;
use common::{pin, setup_test_db};

use pinard::auth::adapter;
use pinard::db::pool::DbPool;
use pinard::models::Profile;

#[test]
fn test_auth_url_requires_configuration() {
    pin()
        .args(["auth", "url"])
        .assert()
        .failure()
        .stderr(contains("GOOGLE_CLIENT_ID"));
}

#[test]
fn test_auth_url_with_configuration() {
    pin()
        .env("GOOGLE_CLIENT_ID", "client-1")
        .env("GOOGLE_CLIENT_SECRET", "secret")
        .env("GOOGLE_REDIRECT_URI", "http://localhost:3000/api/auth/callback/google")
        .args(["auth", "url"])
        .assert()
        .success()
        .stdout(contains("https://accounts.google.com/o/oauth2/v2/auth?"))
        .stdout(contains("client_id=client-1"));
}

#[test]
fn test_session_and_logout_via_cli() {
    let db_path = setup_test_db("auth_session");

    let token = {
        let pool = DbPool::open(&db_path).expect("open db");
        let profile = Profile {
            sub: "1234".into(),
            email: Some("ana@example.com".into()),
            name: Some("Ana".into()),
        };
        let id = adapter::link_account(&pool.conn, &profile, "access").expect("link");
        adapter::create_session(&pool.conn, id, 1)
            .expect("session")
            .token
    };

    pin()
        .args(["--db", &db_path, "auth", "session", "--token", &token])
        .assert()
        .success()
        .stdout(contains("ana@example.com"));

    pin()
        .args(["--db", &db_path, "auth", "logout", "--token", &token])
        .assert()
        .success()
        .stdout(contains("Session closed."));

    pin()
        .args(["--db", &db_path, "auth", "session", "--token", &token])
        .assert()
        .failure()
        .stderr(contains("unknown or expired session"));
}
