use crate::auth::adapter;
use crate::auth::google::{self, GoogleConfig};
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Profile, Session};

pub struct AuthLogic;

impl AuthLogic {
    /// Full provider round trip for an authorization `code`.
    pub fn callback(
        pool: &DbPool,
        config: &GoogleConfig,
        code: &str,
        ttl_hours: i64,
    ) -> AppResult<(Profile, Session)> {
        let access_token = google::exchange_code(config, code)?;
        let profile = google::fetch_profile(&access_token)?;
        let session = Self::complete_login(pool, &profile, &access_token, ttl_hours)?;
        Ok((profile, session))
    }

    /// Persist the account for an already verified `profile` and open a session.
    pub fn complete_login(
        pool: &DbPool,
        profile: &Profile,
        access_token: &str,
        ttl_hours: i64,
    ) -> AppResult<Session> {
        let account_id = adapter::link_account(&pool.conn, profile, access_token)?;
        let session = adapter::create_session(&pool.conn, account_id, ttl_hours)?;

        ttlog_or_warn(
            &pool.conn,
            "login",
            profile.email.as_deref().unwrap_or(&profile.sub),
            &format!("Session opened, expires {}", session.expires_at),
        );

        Ok(session)
    }

    /// Close a session. Returns whether it existed.
    pub fn logout(pool: &DbPool, token: &str) -> AppResult<bool> {
        let removed = adapter::delete_session(&pool.conn, token)?;
        if removed {
            ttlog_or_warn(&pool.conn, "logout", "", "Session closed");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_login_links_account_and_logs() {
        let pool = DbPool::in_memory().unwrap();
        let profile = Profile {
            sub: "1001".into(),
            email: Some("ana@example.com".into()),
            name: Some("Ana".into()),
        };

        let session = AuthLogic::complete_login(&pool, &profile, "tok", 2).unwrap();
        let (_, account) = adapter::session_account(&pool.conn, &session.token).unwrap();
        assert_eq!(account.provider_account_id, "1001");

        let logged: i64 = pool
            .conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'login' AND target = 'ana@example.com'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(logged, 1);

        assert!(AuthLogic::logout(&pool, &session.token).unwrap());
        assert!(!AuthLogic::logout(&pool, &session.token).unwrap());
    }
}
