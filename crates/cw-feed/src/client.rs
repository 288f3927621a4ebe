//! Feed client with fallback to the built-in sample.

use std::time::Duration;

use cw_auth::SessionContext;
use cw_config::ApiConfig;
use cw_core::NearEarthObject;
use cw_core::sample::sample_feed;
use serde::Serialize;

use crate::cache::FeedCache;
use crate::error::FeedError;
use crate::http::check_response;
use crate::wire::parse_feed;

const FEED_PATH: &str = "/asteroids/feed/";

/// Where the objects of a fetch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedSource {
    Live,
    Fallback,
}

impl FeedSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeedFetch {
    pub objects: Vec<NearEarthObject>,
    pub source: FeedSource,
}

/// HTTP client for the near-Earth object feed.
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying client cannot be built.
    pub fn new(api: &ApiConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("cosmic-watch/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            url: api.endpoint(FEED_PATH),
        })
    }

    /// One request for the live feed, authenticated when `session` holds a credential.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] on transport failure, a non-success status, or a
    /// body that is not a usable feed.
    pub async fn try_fetch(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<NearEarthObject>, FeedError> {
        let request = session.authorize(self.http.get(&self.url));
        let resp = check_response(request.send().await?).await?;
        let body = resp.bytes().await?;
        parse_feed(&body)
    }

    /// Fetch the feed, substituting the sample feed on any failure.
    pub async fn fetch_feed(&self, session: &SessionContext) -> FeedFetch {
        match self.try_fetch(session).await {
            Ok(objects) => {
                tracing::debug!(count = objects.len(), "fetched live feed");
                FeedFetch {
                    objects,
                    source: FeedSource::Live,
                }
            }
            Err(error) => {
                tracing::info!(%error, url = %self.url, "live feed unavailable; using sample data");
                FeedFetch {
                    objects: sample_feed(),
                    source: FeedSource::Fallback,
                }
            }
        }
    }

    /// Fetch and swap the result into `cache`.
    pub async fn refresh(&self, cache: &FeedCache, session: &SessionContext) -> FeedSource {
        let FeedFetch { objects, source } = self.fetch_feed(session).await;
        cache.replace(objects);
        source
    }
}
