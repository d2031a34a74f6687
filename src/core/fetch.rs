use crate::domain::model::{MapsResponse, STATUS_OK, STATUS_ZERO_RESULTS};
use crate::utils::error::{MapsError, Result};
use reqwest::Client;

/// 發送 GET 請求並返回已驗證的回應
pub async fn fetch(client: &Client, url: &str) -> Result<MapsResponse> {
    let body = get_json(client, url).await.map_err(|e| {
        tracing::error!("Maps request failed: {}", e);
        MapsError::unknown_response_error(e)
    })?;

    validate(MapsResponse::new(body))
}

async fn get_json(
    client: &Client,
    url: &str,
) -> std::result::Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
    let response = client.get(url).send().await?;
    tracing::debug!("Maps response HTTP status: {}", response.status());

    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// 檢查 `status` 欄位：OK 直接返回，ZERO_RESULTS 與其他狀態轉為錯誤
pub fn validate(response: MapsResponse) -> Result<MapsResponse> {
    match response.status() {
        Some(STATUS_OK) => Ok(response),
        Some(STATUS_ZERO_RESULTS) => Err(MapsError::ZeroResults {
            status: STATUS_ZERO_RESULTS.to_string(),
        }),
        status => {
            let status = status.unwrap_or("<missing>");
            let message = match response.error_message() {
                Some(detail) => format!("status {}: {}", status, detail),
                None => format!("status {}", status),
            };
            Err(MapsError::invalid_response(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_ok_passes_through_unchanged() {
        let body = json!({"status": "OK", "results": [{"place_id": "abc"}]});
        let response = validate(MapsResponse::new(body.clone())).unwrap();
        assert_eq!(response.body(), &body);
    }

    #[test]
    fn test_zero_results() {
        let err = validate(MapsResponse::new(json!({"status": "ZERO_RESULTS", "results": []})))
            .unwrap_err();
        assert!(err.is_zero_results());
        assert!(err.is_invalid_response());
        assert!(err.to_string().contains("ZERO_RESULTS"));
    }

    #[test]
    fn test_denied_includes_error_message() {
        let err = validate(MapsResponse::new(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        })))
        .unwrap_err();

        assert!(!err.is_zero_results());
        assert!(err.is_invalid_response());
        assert_eq!(
            err.to_string(),
            "Invalid response: status REQUEST_DENIED: The provided API key is invalid."
        );
    }

    #[test]
    fn test_missing_status_is_invalid() {
        let err = validate(MapsResponse::new(json!({"results": []}))).unwrap_err();
        assert!(err.to_string().contains("<missing>"));
    }

    #[tokio::test]
    async fn test_fetch_non_json_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/geocode/json");
            then.status(502).body("<html>Bad Gateway</html>");
        });

        let err = fetch(&Client::new(), &server.url("/geocode/json"))
            .await
            .unwrap_err();

        api_mock.assert();
        assert!(matches!(
            err,
            MapsError::InvalidResponse { ref message, source: Some(_) } if message.starts_with("unknown error: ")
        ));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // 測試環境中 port 9 (discard) 沒有服務監聽
        let err = fetch(&Client::new(), "http://127.0.0.1:9/geocode/json")
            .await
            .unwrap_err();

        assert!(err.is_invalid_response());
        assert!(err.to_string().contains("unknown error"));
    }

    #[tokio::test]
    async fn test_fetch_ok() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/timezone/json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"status": "OK", "timeZoneId": "America/Los_Angeles"}));
        });

        let response = fetch(&Client::new(), &server.url("/timezone/json"))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(response.get("timeZoneId").unwrap(), "America/Los_Angeles");
    }
}
