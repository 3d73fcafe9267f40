//! Wiring for the two servers

use crate::{
    config::Config,
    database::create_pool,
    error::{Error, Result},
    server::Server,
    users::{api_router, ApiState, PgUserStore},
    web::{web_router, HttpUsersApi, ViewSettings, WebState},
};

/// Connect to the database and serve the users API until shutdown
pub async fn run_api(config: Config) -> Result<()> {
    let db = config.database.as_ref().ok_or_else(|| {
        Error::from(figment::Error::from(
            "database.url is required to run the users API".to_string(),
        ))
    })?;

    let pool = create_pool(db).await?;
    let state = ApiState::new(PgUserStore::new(pool), config.service.name.clone());
    let addr = config.api.addr();

    Server::new(config).serve(api_router(state), addr).await
}

/// Serve the users page until shutdown
pub async fn run_web(config: Config) -> Result<()> {
    let api = HttpUsersApi::new(config.web.api_url.clone(), config.web.request_timeout())?;
    tracing::info!("Users page will read from {}", api.base_url());

    let state = WebState::new(
        api,
        ViewSettings::from(&config.web),
        config.service.name.clone(),
    );
    let addr = config.web.addr();

    Server::new(config).serve(web_router(state), addr).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_api_requires_database() {
        let err = run_api(Config::default()).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("database.url"));
    }
}
