//! Account and session persistence for the identity provider.

use super::{AuthError, PROVIDER};
use crate::errors::AppResult;
use crate::models::{Account, Profile, Session};
use crate::utils::time::{now_stamp, stamp_in_hours};
use rusqlite::{Connection, OptionalExtension, Row, params};
use uuid::Uuid;

fn map_account(row: &Row) -> rusqlite::Result<Account> {
    Ok(Account {
        id: row.get("id")?,
        provider: row.get("provider")?,
        provider_account_id: row.get("provider_account_id")?,
        email: row.get("email")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert or refresh the account for `profile`. Returns the account id.
pub fn link_account(conn: &Connection, profile: &Profile, access_token: &str) -> AppResult<i64> {
    let id = conn.query_row(
        r"INSERT INTO accounts (provider, provider_account_id, email, name, access_token, created_at)
          VALUES (?1, ?2, ?3, ?4, ?5, ?6)
          ON CONFLICT (provider, provider_account_id) DO UPDATE
             SET email = excluded.email, name = excluded.name, access_token = excluded.access_token
          RETURNING id",
        params![
            PROVIDER,
            profile.sub,
            profile.email,
            profile.name,
            access_token,
            now_stamp()
        ],
        |row| row.get(0),
    )?;
    Ok(id)
}

pub fn find_account(conn: &Connection, id: i64) -> AppResult<Option<Account>> {
    let account = conn
        .query_row(
            "SELECT id, provider, provider_account_id, email, name, created_at
             FROM accounts WHERE id = ?1",
            [id],
            map_account,
        )
        .optional()?;
    Ok(account)
}

/// Issue a new session token valid for `ttl_hours`.
pub fn create_session(conn: &Connection, account_id: i64, ttl_hours: i64) -> AppResult<Session> {
    let session = Session {
        token: Uuid::new_v4().to_string(),
        account_id,
        expires_at: stamp_in_hours(ttl_hours),
    };

    conn.execute(
        "INSERT INTO sessions (token, account_id, expires_at) VALUES (?1, ?2, ?3)",
        params![session.token, session.account_id, session.expires_at],
    )?;

    Ok(session)
}

/// Look up a live session. Expired sessions are purged and reported as `None`.
pub fn get_session(conn: &Connection, token: &str) -> AppResult<Option<Session>> {
    let found = conn
        .query_row(
            "SELECT token, account_id, expires_at FROM sessions WHERE token = ?1",
            [token],
            |row| {
                Ok(Session {
                    token: row.get(0)?,
                    account_id: row.get(1)?,
                    expires_at: row.get(2)?,
                })
            },
        )
        .optional()?;

    match found {
        Some(s) if s.expires_at > now_stamp() => Ok(Some(s)),
        Some(s) => {
            delete_session(conn, &s.token)?;
            Ok(None)
        }
        None => Ok(None),
    }
}

/// Resolve a token to its account, failing when the session is gone.
pub fn session_account(conn: &Connection, token: &str) -> AppResult<(Session, Account)> {
    let session = get_session(conn, token)?.ok_or(AuthError::InvalidSession)?;
    let account = find_account(conn, session.account_id)?.ok_or(AuthError::InvalidSession)?;
    Ok((session, account))
}

/// Returns whether a session was removed.
pub fn delete_session(conn: &Connection, token: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM sessions WHERE token = ?1", [token])?;
    Ok(n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use crate::errors::AppError;

    fn profile(sub: &str, name: &str) -> Profile {
        Profile {
            sub: sub.into(),
            email: Some(format!("{name}@example.com")),
            name: Some(name.into()),
        }
    }

    #[test]
    fn link_account_upserts_on_provider_id() {
        let pool = DbPool::in_memory().unwrap();
        let first = link_account(&pool.conn, &profile("42", "ana"), "t1").unwrap();
        let again = link_account(&pool.conn, &profile("42", "ana.m"), "t2").unwrap();
        let other = link_account(&pool.conn, &profile("43", "bo"), "t3").unwrap();

        assert_eq!(first, again);
        assert_ne!(first, other);

        let acc = find_account(&pool.conn, first).unwrap().unwrap();
        assert_eq!(acc.provider, "google");
        assert_eq!(acc.name.as_deref(), Some("ana.m"));
    }

    #[test]
    fn session_lifecycle() {
        let pool = DbPool::in_memory().unwrap();
        let id = link_account(&pool.conn, &profile("42", "ana"), "t1").unwrap();

        let session = create_session(&pool.conn, id, 24).unwrap();
        let found = get_session(&pool.conn, &session.token).unwrap().unwrap();
        assert_eq!(found.account_id, id);

        let (_, account) = session_account(&pool.conn, &session.token).unwrap();
        assert_eq!(account.id, id);

        assert!(delete_session(&pool.conn, &session.token).unwrap());
        assert!(get_session(&pool.conn, &session.token).unwrap().is_none());
        assert!(!delete_session(&pool.conn, &session.token).unwrap());
    }

    #[test]
    fn expired_session_is_purged() {
        let pool = DbPool::in_memory().unwrap();
        let id = link_account(&pool.conn, &profile("42", "ana"), "t1").unwrap();
        let session = create_session(&pool.conn, id, -1).unwrap();

        assert!(get_session(&pool.conn, &session.token).unwrap().is_none());
        let left: i64 = pool
            .conn
            .query_row("SELECT COUNT(*) FROM sessions", [], |r| r.get(0))
            .unwrap();
        assert_eq!(left, 0);

        assert!(matches!(
            session_account(&pool.conn, &session.token),
            Err(AppError::Auth(AuthError::InvalidSession))
        ));
    }
}
