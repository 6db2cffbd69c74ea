//! Hero retrieval.
//!
//! Components depend on the [`HeroService`] trait only; the concrete
//! service is chosen once at startup by [`default_hero_service`].

use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::config::{HEROES_API_URL, HEROES_PATH};
use crate::{AppError, AppResult, Hero};

/// Source of the full hero list.
///
/// `?Send` because everything runs on the browser's single-threaded event loop.
#[async_trait(?Send)]
pub trait HeroService {
    /// Fetches every hero, in server order.
    async fn get_heroes(&self) -> AppResult<Vec<Hero>>;
}

/// Picks the HTTP service when an API URL was configured at build time,
/// the built-in roster otherwise.
pub fn default_hero_service() -> Rc<dyn HeroService> {
    hero_service_for(HEROES_API_URL)
}

/// HTTP service for `api_url`, or the built-in roster when there is none.
pub fn hero_service_for(api_url: Option<&str>) -> Rc<dyn HeroService> {
    match api_url {
        Some(base_url) => Rc::new(HttpHeroService::new(base_url)),
        None => Rc::new(InMemoryHeroService::default()),
    }
}

// =============================================================================
// In-memory roster
// =============================================================================

/// Serves a fixed list of heroes without touching the network.
#[derive(Clone, Debug)]
pub struct InMemoryHeroService {
    heroes: Vec<Hero>,
}

impl InMemoryHeroService {
    pub fn new(heroes: Vec<Hero>) -> Self {
        Self { heroes }
    }

    /// The ten heroes served when no API is configured.
    pub fn default_roster() -> Vec<Hero> {
        [
            (11, "Mr. Nice"),
            (12, "Narco"),
            (13, "Bombasto"),
            (14, "Celeritas"),
            (15, "Magneta"),
            (16, "RubberMan"),
            (17, "Dynama"),
            (18, "Dr IQ"),
            (19, "Magma"),
            (20, "Tornado"),
        ]
        .into_iter()
        .map(|(id, name)| Hero::new(id, name))
        .collect()
    }
}

impl Default for InMemoryHeroService {
    fn default() -> Self {
        Self::new(Self::default_roster())
    }
}

#[async_trait(?Send)]
impl HeroService for InMemoryHeroService {
    async fn get_heroes(&self) -> AppResult<Vec<Hero>> {
        log::debug!("Serving {} heroes from memory", self.heroes.len());
        Ok(self.heroes.clone())
    }
}

// =============================================================================
// HTTP
// =============================================================================

/// Fetches heroes as JSON from `{base_url}/api/heroes`.
#[derive(Clone, Debug)]
pub struct HttpHeroService {
    base_url: String,
}

impl HttpHeroService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Full URL of the hero list endpoint.
    pub fn heroes_url(&self) -> String {
        format!("{}{}", self.base_url, HEROES_PATH)
    }
}

#[async_trait(?Send)]
impl HeroService for HttpHeroService {
    async fn get_heroes(&self) -> AppResult<Vec<Hero>> {
        let url = self.heroes_url();
        log::info!("📡 Fetching heroes from {}", url);

        let response = Request::get(&url).send().await.map_err(|e| {
            log::error!("❌ Hero request failed: {}", e);
            AppError::Network(e.to_string())
        })?;

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        parse_heroes(response.status(), response.ok(), &body)
    }
}

/// Turns a hero list response into heroes.
///
/// Non-success statuses become [`AppError::Server`] carrying the body;
/// a success body that is not a hero list becomes [`AppError::Decode`].
pub fn parse_heroes(status: u16, ok: bool, body: &str) -> AppResult<Vec<Hero>> {
    if !ok {
        log::warn!("Hero request returned {}", status);
        let message = if body.is_empty() {
            "Unknown error".to_string()
        } else {
            body.to_string()
        };
        return Err(AppError::Server { status, message });
    }

    serde_json::from_str(body).map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_default_roster() {
        let heroes = block_on(InMemoryHeroService::default().get_heroes()).unwrap();

        assert_eq!(heroes.len(), 10);
        assert_eq!(heroes[0], Hero::new(11, "Mr. Nice"));
        assert_eq!(heroes[9], Hero::new(20, "Tornado"));
    }

    #[test]
    fn test_custom_roster_is_served_verbatim() {
        let roster = vec![Hero::new(1, "Solo")];
        let heroes = block_on(InMemoryHeroService::new(roster.clone()).get_heroes()).unwrap();
        assert_eq!(heroes, roster);
    }

    #[test]
    fn test_heroes_url() {
        assert_eq!(
            HttpHeroService::new("http://localhost:3000").heroes_url(),
            "http://localhost:3000/api/heroes"
        );
        assert_eq!(
            HttpHeroService::new("http://localhost:3000/").heroes_url(),
            "http://localhost:3000/api/heroes"
        );
    }

    #[test]
    fn test_service_without_api_url_serves_roster() {
        let heroes = block_on(hero_service_for(None).get_heroes()).unwrap();
        assert_eq!(heroes, InMemoryHeroService::default_roster());
    }

    #[test]
    fn test_parse_heroes_success() {
        let json = r#"[
            {"id": 11, "name": "Mr. Nice"},
            {"id": 12, "name": "Narco"}
        ]"#;

        let heroes = parse_heroes(200, true, json).unwrap();
        assert_eq!(heroes, vec![Hero::new(11, "Mr. Nice"), Hero::new(12, "Narco")]);
        assert!(parse_heroes(200, true, "[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_heroes_server_error() {
        let result = parse_heroes(503, false, "maintenance window");
        assert_eq!(
            result,
            Err(AppError::Server {
                status: 503,
                message: "maintenance window".to_string(),
            })
        );

        let result = parse_heroes(404, false, "");
        assert_eq!(
            result,
            Err(AppError::Server {
                status: 404,
                message: "Unknown error".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_heroes_malformed_body() {
        assert!(matches!(
            parse_heroes(200, true, r#"{"heroes": "nope"}"#),
            Err(AppError::Decode(_))
        ));
        assert!(matches!(
            parse_heroes(200, true, r#"[{"id": "eleven"}]"#),
            Err(AppError::Decode(_))
        ));
    }
}
