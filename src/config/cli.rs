use crate::config::toml_config::MapsConfig;
use crate::domain::model::Service;
use crate::utils::error::{MapsError, Result};
use clap::Parser;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Parser)]
#[command(name = "geocode-client")]
#[command(about = "Query a maps web service (geocode, directions, ...) and print the JSON result")]
pub struct CliArgs {
    /// Service name, e.g. geocode, directions, distancematrix, elevation, timezone
    pub service: Service,

    /// Request parameter as key=value, may be repeated
    #[arg(short, long = "param", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub format: Option<String>,

    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long)]
    pub client_id: Option<String>,

    /// base64url premier private key
    #[arg(long)]
    pub private_key: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,
}

const REDACTED: &str = "<redacted>";

impl fmt::Debug for CliArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliArgs")
            .field("service", &self.service)
            .field("params", &self.params)
            .field("config", &self.config)
            .field("endpoint", &self.endpoint)
            .field("format", &self.format)
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("client_id", &self.client_id)
            .field("private_key", &self.private_key.as_ref().map(|_| REDACTED))
            .field("verbose", &self.verbose)
            .field("json_logs", &self.json_logs)
            .finish()
    }
}

fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

impl CliArgs {
    /// Load the config file, if any, then apply command-line overrides.
    pub fn load_config(&self) -> Result<MapsConfig> {
        let mut config = match &self.config {
            Some(path) => MapsConfig::from_file(path)?,
            None => MapsConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(format) = &self.format {
            config.format = format.clone();
        }
        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(client_id) = &self.client_id {
            config.premier_client_id = Some(client_id.clone());
        }
        if let Some(private_key) = &self.private_key {
            config.premier_key = Some(private_key.clone());
        }

        Ok(config)
    }

    pub fn query_args(&self) -> Result<HashMap<String, String>> {
        let mut args = HashMap::new();
        for (key, value) in &self.params {
            if args.insert(key.clone(), value.clone()).is_some() {
                return Err(MapsError::InvalidConfigValueError {
                    field: "param".to_string(),
                    value: key.clone(),
                    reason: "Parameter given more than once".to_string(),
                });
            }
        }
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ConfigProvider;

    #[test]
    fn test_parse_service_and_params() {
        let args = CliArgs::try_parse_from([
            "geocode-client",
            "geocode",
            "--param",
            "address=1600 Amphitheatre",
            "-p",
            "region=us",
            "--api-key",
            "abc",
        ])
        .unwrap();

        assert_eq!(args.service, Service::Geocode);
        let query = args.query_args().unwrap();
        assert_eq!(query.get("address").unwrap(), "1600 Amphitheatre");
        assert_eq!(query.get("region").unwrap(), "us");

        let config = args.load_config().unwrap();
        assert_eq!(config.api_key(), "abc");
        assert!(!config.uses_premier_signing());
    }

    #[test]
    fn test_debug_output_hides_credentials() {
        let args = CliArgs::try_parse_from([
            "geocode-client",
            "geocode",
            "--api-key",
            "AIzaSy-secret",
            "--client-id",
            "gme-acme",
            "--private-key",
            "vNIXE0xscrmjlyV-12Nj_BvUPaw=",
        ])
        .unwrap();

        let debug = format!("{:?}", args);
        assert!(!debug.contains("AIzaSy-secret"));
        assert!(!debug.contains("vNIXE0xscrmjlyV-12Nj_BvUPaw="));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("gme-acme"));
    }

    #[test]
    fn test_value_may_contain_equals() {
        assert_eq!(
            parse_key_value("components=country:US|postal_code=94043").unwrap(),
            (
                "components".to_string(),
                "country:US|postal_code=94043".to_string()
            )
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=value").is_err());
    }

    #[test]
    fn test_duplicate_param_rejected() {
        let args = CliArgs::try_parse_from([
            "geocode-client",
            "geocode",
            "-p",
            "address=a",
            "-p",
            "address=b",
        ])
        .unwrap();
        assert!(args.query_args().is_err());
    }

    #[test]
    fn test_premier_overrides() {
        let args = CliArgs::try_parse_from([
            "geocode-client",
            "directions",
            "--client-id",
            "gme-acme",
            "--private-key",
            "vNIXE0xscrmjlyV-12Nj_BvUPaw=",
            "--endpoint",
            "http://localhost:8080",
        ])
        .unwrap();

        let config = args.load_config().unwrap();
        assert!(config.uses_premier_signing());
        assert_eq!(config.endpoint(), "http://localhost:8080");
        assert_eq!(config.premier_key(), Some("vNIXE0xscrmjlyV-12Nj_BvUPaw="));
    }
}
