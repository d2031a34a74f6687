use crate::core::fetch::fetch;
use crate::core::params::{merge, ParamSet};
use crate::core::signer::sign_url;
use crate::core::url_builder::build_url;
use crate::domain::model::{MapsResponse, Service};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use reqwest::Client;
use std::collections::HashMap;

pub const API_KEY_PARAM: &str = "key";
pub const CLIENT_ID_PARAM: &str = "client";

/// 無狀態的地圖服務客戶端，配置由外部注入
pub struct MapsClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> MapsClient<C> {
    pub fn new(config: C) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// 使用外部建立的 HTTP client（例如已設定逾時或代理）
    pub fn with_http_client(config: C, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 查詢指定服務，返回 status 為 OK 的結果
    pub async fn query(
        &self,
        service: &Service,
        args: &HashMap<String, String>,
    ) -> Result<MapsResponse> {
        let url = self.request_url(service, args)?;
        fetch(&self.client, &url).await
    }

    /// 產生最終請求 URL，premier 模式下已簽名；不進行任何 I/O
    pub fn request_url(&self, service: &Service, args: &HashMap<String, String>) -> Result<String> {
        let merged = merge(
            self.config.uses_premier_signing(),
            self.config.default_params(service),
            args,
        );
        let mut params = merged.params;
        self.attach_credentials(merged.use_premier_signing, &mut params);

        let url = build_url(&self.config, service, &params)?;
        if merged.use_premier_signing {
            sign_url(&url, self.config.premier_key())
        } else {
            Ok(url)
        }
    }

    fn attach_credentials(&self, use_premier_signing: bool, params: &mut ParamSet) {
        if use_premier_signing {
            if let Some(client_id) = self.config.premier_client_id() {
                params.insert(CLIENT_ID_PARAM.to_string(), client_id.to_string());
            }
            params.remove(API_KEY_PARAM);
        } else {
            let api_key = self.config.api_key();
            if !api_key.is_empty() {
                params.insert(API_KEY_PARAM.to_string(), api_key.to_string());
            }
        }
    }
}
