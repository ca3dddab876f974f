use anyhow::Context;
use clap::builder::FalseyValueParser;
use riot_api::RiotApi;

/// Client settings, taken from flags or the matching `RIOT_*` variables.
#[derive(clap::Args, Debug, Clone)]
pub struct Config {
    #[arg(long, env = "RIOT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Region code
    #[arg(short, long, env = "RIOT_REGION", default_value = "euw")]
    pub region: String,

    /// Api host, e.g. a local proxy
    #[arg(long, env = "RIOT_HOST")]
    pub host: Option<String>,

    /// Print each request line (api key hidden)
    #[arg(short, long, env = "RIOT_DEBUG", value_parser = FalseyValueParser::new())]
    pub debug: bool,

    /// Treat non-2xx responses as errors instead of printing the payload
    #[arg(long, env = "RIOT_RAISE_STATUS_ERRORS", value_parser = FalseyValueParser::new())]
    pub raise_status_errors: bool,
}

impl Config {
    pub fn client(&self) -> anyhow::Result<RiotApi> {
        let mut builder = RiotApi::builder()
            .region(self.region.as_str())
            .debug(self.debug)
            .raise_status_errors(self.raise_status_errors);
        if let Some(api_key) = &self.api_key {
            builder = builder.api_key(api_key.as_str());
        }
        if let Some(host) = &self.host {
            builder = builder.host(host.as_str());
        }
        builder.build().context("invalid client configuration")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_key_is_reported() {
        let config = Config {
            api_key: None,
            region: "euw".to_string(),
            host: None,
            debug: false,
            raise_status_errors: false,
        };
        let err = config.client().unwrap_err();
        assert_eq!(err.root_cause().to_string(), "api key missing");
    }
    #[test]
    fn bad_region_is_reported() {
        let config = Config {
            api_key: Some("key".to_string()),
            region: "kr".to_string(),
            host: None,
            debug: true,
            raise_status_errors: true,
        };
        let err = config.client().unwrap_err();
        assert!(err.root_cause().to_string().contains("valid regions"));
    }
}
