use std::{env, net::SocketAddr};

use url::Url;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    /// Base URL used when rendering links into outgoing emails.
    pub public_url: Url,
    pub mail_from: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://planner.db".to_string());
        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let public_url: Url = env::var("PUBLIC_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid PUBLIC_URL: {err}")))?;

        let mail_from = env::var("MAIL_FROM").unwrap_or_else(|_| "trips@planner.local".to_string());
        if !mail_from.contains('@') {
            return Err(AppError::Config(format!("invalid MAIL_FROM: {mail_from}")));
        }

        Ok(Self {
            database_url,
            listen_addr,
            public_url,
            mail_from,
        })
    }
}
