pub mod champion;
pub mod game;
pub mod league;
pub mod region;
pub mod request;
pub mod stats;
pub mod summoner;
pub mod team;

pub use crate::region::Region;
pub use crate::stats::Season;
pub use reqwest::StatusCode;

use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub const DEFAULT_HOST: &str = "https://prod.api.pvp.net";

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("api key missing")]
    MissingApiKey,
    #[error("invalid region '{0}' (valid regions: {})", Region::valid_list())]
    InvalidRegion(String),
    /// Non-2xx status with `raise_status_errors` enabled
    #[error("the server responded with status {}", .0.as_u16())]
    Status(StatusCode),
    /// Non-2xx status passed through with the raw error body
    #[error("the server responded with status {}: {payload}", .status.as_u16())]
    Payload {
        status: StatusCode,
        payload: serde_json::Value,
    },
    /// Identifier that cannot be placed in a url path
    #[error("invalid identifier '{0}'")]
    InvalidId(String),
    #[error("summoner {0} missing from response")]
    MissingEntry(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

impl Error {
    /// HTTP status of a rejected request, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status(status) => Some(*status),
            Error::Payload { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
    /// True for errors raised while building a client
    pub fn is_config(&self) -> bool {
        matches!(self, Error::MissingApiKey | Error::InvalidRegion(_))
    }
}

/// Path layout of the two API generations the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ApiVersion {
    /// `/api/lol/{region}/v1.1`
    V1_1,
    /// `/api/{region}/v2.1`
    V2_1,
}

#[derive(Debug)]
pub struct Handle {
    pub web: reqwest::Client,
    api_key: String,
    region: Region,
    host: Url,
    debug: bool,
    raise_status_errors: bool,
    verify_ssl: bool,
}

impl Handle {
    /// Build the full url for `path` under the region's api root, with the key attached.
    ///
    /// Empty, `.` and `..` segments are rejected since the url would
    /// normalise them away and hit a different endpoint.
    pub(crate) fn endpoint(&self, version: ApiVersion, path: &[&str]) -> Result<Url> {
        if let Some(segment) = path.iter().find(|s| matches!(s.trim(), "" | "." | "..")) {
            return Err(Error::InvalidId(segment.to_string()));
        }
        let mut url = self.host.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            segments.pop_if_empty().push("api");
            match version {
                ApiVersion::V1_1 => {
                    segments.extend(["lol", self.region.as_str(), "v1.1"]);
                }
                ApiVersion::V2_1 => {
                    segments.extend([self.region.as_str(), "v2.1"]);
                }
            }
            segments.extend(path);
        }
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }
}

/// Client for the League of Legends REST API, bound to one region
#[derive(Debug, Clone)]
pub struct RiotApi {
    handle: Arc<Handle>,
}

impl RiotApi {
    pub fn builder() -> RiotApiBuilder {
        RiotApiBuilder::default()
    }
    pub fn new(api_key: &str, region: &str) -> Result<Self> {
        Self::builder().api_key(api_key).region(region).build()
    }
    pub fn region(&self) -> Region {
        self.handle.region
    }
    pub fn verifies_ssl(&self) -> bool {
        self.handle.verify_ssl
    }
    pub fn summoner(&self) -> summoner::SummonerClient {
        summoner::SummonerClient::new(self.handle.clone())
    }
    pub fn stats(&self) -> stats::StatsClient {
        stats::StatsClient::new(self.handle.clone())
    }
    pub fn champions(&self) -> champion::ChampionClient {
        champion::ChampionClient::new(self.handle.clone())
    }
    pub fn game(&self) -> game::GameClient {
        game::GameClient::new(self.handle.clone())
    }
    pub fn league(&self) -> league::LeagueClient {
        league::LeagueClient::new(self.handle.clone())
    }
    pub fn team(&self) -> team::TeamClient {
        team::TeamClient::new(self.handle.clone())
    }
}

#[derive(Debug, Clone)]
pub struct RiotApiBuilder {
    api_key: Option<String>,
    region: Option<String>,
    host: String,
    debug: bool,
    raise_status_errors: bool,
    verify_ssl: bool,
    timeout: Option<Duration>,
}

impl Default for RiotApiBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            region: None,
            host: DEFAULT_HOST.to_string(),
            debug: false,
            raise_status_errors: false,
            verify_ssl: true,
            timeout: None,
        }
    }
}

impl RiotApiBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
    /// Override the service host, e.g. to point at a proxy
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }
    /// Print every request line to stdout (api key redacted)
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
    /// Fail with [`Error::Status`] instead of passing the error body through
    pub fn raise_status_errors(mut self, raise: bool) -> Self {
        self.raise_status_errors = raise;
        self
    }
    pub fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = verify;
        self
    }
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<RiotApi> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(Error::MissingApiKey)?;
        let region: Region = self.region.unwrap_or_default().parse()?;
        let host = Url::parse(&self.host)?;

        let mut client = reqwest::Client::builder()
            .user_agent(concat!("riot-api/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(!self.verify_ssl);
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }
        let web = client.build()?;

        tracing::debug!(%region, host = %host, "riot api client ready");
        Ok(RiotApi {
            handle: Arc::new(Handle {
                web,
                api_key,
                region,
                host,
                debug: self.debug,
                raise_status_errors: self.raise_status_errors,
                verify_ssl: self.verify_ssl,
            }),
        })
    }
}
