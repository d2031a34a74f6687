use crate::domain::model::Service;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MapsError, Result};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api";
pub const DEFAULT_FORMAT: &str = "json";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

/// 全域客戶端設定，建立一次後注入 client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub api_key: String,
    pub premier_client_id: Option<String>,
    pub premier_key: Option<String>,
    #[serde(default)]
    pub default_params: HashMap<Service, HashMap<String, String>>,
    #[serde(default)]
    pub service_paths: HashMap<Service, String>,
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            format: default_format(),
            api_key: String::new(),
            premier_client_id: None,
            premier_key: None,
            default_params: HashMap::new(),
            service_paths: HashMap::new(),
        }
    }
}

impl MapsConfig {
    pub fn new_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn new_premier(client_id: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            premier_client_id: Some(client_id.into()),
            premier_key: Some(private_key.into()),
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_service_defaults(
        mut self,
        service: Service,
        params: HashMap<String, String>,
    ) -> Self {
        self.default_params.insert(service, params);
        self
    }

    pub fn with_service_path(mut self, service: Service, path: impl Into<String>) -> Self {
        self.service_paths.insert(service, path.into());
        self
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MapsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MapsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAPS_API_KEY})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl ConfigProvider for MapsConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn format(&self) -> &str {
        &self.format
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn premier_client_id(&self) -> Option<&str> {
        self.premier_client_id.as_deref()
    }

    fn premier_key(&self) -> Option<&str> {
        self.premier_key.as_deref()
    }

    fn default_params(&self, service: &Service) -> Option<&HashMap<String, String>> {
        self.default_params.get(service)
    }

    fn service_path(&self, service: &Service) -> Option<&str> {
        self.service_paths
            .get(service)
            .map(String::as_str)
            .or_else(|| service.default_path())
    }
}

impl Validate for MapsConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_non_empty_string("format", &self.format)?;
        validation::validate_no_placeholder("api_key", &self.api_key)?;

        if let Some(client_id) = &self.premier_client_id {
            validation::validate_no_placeholder("premier_client_id", client_id)?;
        }
        if let Some(key) = &self.premier_key {
            validation::validate_no_placeholder("premier_key", key)?;
        }

        if self.uses_premier_signing() {
            let key = validation::validate_required_field("premier_key", &self.premier_key)?;
            validation::validate_non_empty_string("premier_key", key)?;
        } else if self.api_key.trim().is_empty() {
            return Err(MapsError::MissingConfigError {
                field: "api_key".to_string(),
            });
        }

        for (service, path) in &self.service_paths {
            if !path.starts_with('/') {
                return Err(MapsError::InvalidConfigValueError {
                    field: format!("service_paths.{}", service),
                    value: path.clone(),
                    reason: "Path must start with '/'".to_string(),
                });
            }
        }

        Ok(())
    }
}
