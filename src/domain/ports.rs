use crate::domain::model::Service;
use std::collections::HashMap;

/// Read-only settings the client needs for every request.
pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn format(&self) -> &str;
    fn api_key(&self) -> &str;
    fn premier_client_id(&self) -> Option<&str>;
    fn premier_key(&self) -> Option<&str>;
    fn default_params(&self, service: &Service) -> Option<&HashMap<String, String>>;
    fn service_path(&self, service: &Service) -> Option<&str>;

    /// Premier signing applies whenever a non-empty client id is configured.
    fn uses_premier_signing(&self) -> bool {
        self.premier_client_id()
            .map(|id| !id.trim().is_empty())
            .unwrap_or(false)
    }
}
