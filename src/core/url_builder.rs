use crate::core::params::ParamSet;
use crate::domain::model::Service;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MapsError, Result};

/// 構建 `<endpoint><service-path>/<format>?<query>`，參數為空時不加 `?`
pub fn build_url<C: ConfigProvider + ?Sized>(
    config: &C,
    service: &Service,
    params: &ParamSet,
) -> Result<String> {
    let path = config
        .service_path(service)
        .ok_or_else(|| MapsError::UnknownService {
            service: service.to_string(),
        })?;

    // 路徑必須以 `/` 開頭，否則會與 endpoint 黏在一起
    if !path.starts_with('/') {
        return Err(MapsError::InvalidConfigValueError {
            field: format!("service_paths.{}", service),
            value: path.to_string(),
            reason: "Path must start with '/'".to_string(),
        });
    }

    let endpoint = config.endpoint().trim_end_matches('/');
    let mut url = format!("{}{}/{}", endpoint, path, config.format());

    if !params.is_empty() {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter())
            .finish();
        url.push('?');
        url.push_str(&query);
    }

    tracing::debug!("Maps request URL (unsigned): {}", url);
    Ok(url)
}
