use crate::auth::GoogleConfig;
use crate::auth::adapter;
use crate::cli::parser::{AuthAction, Commands};
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use uuid::Uuid;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Auth { action } = cmd {
        match action {
            AuthAction::Url => {
                let google = GoogleConfig::require()?;
                let state = Uuid::new_v4().to_string();
                info("Open this URL in a browser to sign in:");
                println!("{}", google.authorize_url(&state)?);
            }

            AuthAction::Callback { code } => {
                let google = GoogleConfig::require()?;
                let pool = DbPool::open(&cfg.database)?;
                let (profile, session) =
                    AuthLogic::callback(&pool, &google, code, cfg.session_ttl_hours)?;

                success(format!(
                    "Signed in as {}",
                    profile
                        .email
                        .as_deref()
                        .or(profile.name.as_deref())
                        .unwrap_or(&profile.sub)
                ));
                println!("Session token: {}", session.token);
                println!("Expires at:    {}", session.expires_at);
            }

            AuthAction::Session { token } => {
                let pool = DbPool::open(&cfg.database)?;
                let (session, account) = adapter::session_account(&pool.conn, token)?;

                println!("Provider:   {}", account.provider);
                println!("Account:    {}", account.provider_account_id);
                println!("Email:      {}", account.email.as_deref().unwrap_or("--"));
                println!("Name:       {}", account.name.as_deref().unwrap_or("--"));
                println!("Expires at: {}", session.expires_at);
            }

            AuthAction::Logout { token } => {
                let pool = DbPool::open(&cfg.database)?;
                if AuthLogic::logout(&pool, token)? {
                    success("Session closed.");
                } else {
                    warning("No such session.");
                }
            }
        }
    }

    Ok(())
}
