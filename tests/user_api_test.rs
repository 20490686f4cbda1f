use httpmock::prelude::*;
use wxmini_client::{HttpTransport, QueryParams, UserApi, WxApiError};

/// 三個綁定操作走真實 HTTP 傳輸層的整合測試
/// 測試場景：
/// 1. code2session 的查詢參數與原樣回傳
/// 2. getpaidunionid 的查詢參數與原樣回傳
/// 3. getuserphonenumber 的請求體、內容型別與解碼
/// 4. 錯誤處理（伺服器 5xx）

#[tokio::test]
async fn test_code2session_end_to_end() {
    let server = MockServer::start();
    let raw_response = r#"{"openid":"o-123","session_key":"k==","unionid":"u-456","errcode":0,"errmsg":"ok"}"#;

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/sns/jscode2session")
            .query_param("appid", "wx1234567890")
            .query_param("secret", "s3cret")
            .query_param("js_code", "code-abc")
            .query_param("grant_type", "authorization_code");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(raw_response);
    });

    let api = UserApi::new(HttpTransport::new(server.base_url()));

    let mut params = QueryParams::new();
    params.insert("appid".to_string(), "wx1234567890".to_string());
    params.insert("secret".to_string(), "s3cret".to_string());
    params.insert("js_code".to_string(), "code-abc".to_string());
    params.insert("grant_type".to_string(), "authorization_code".to_string());

    let resp = api.code2session(&params).await.unwrap();

    api_mock.assert();
    assert_eq!(resp, raw_response.as_bytes());
}

#[tokio::test]
async fn test_get_paid_union_id_end_to_end() {
    let server = MockServer::start();
    let raw_response = r#"{"unionid":"u-456","errcode":0,"errmsg":"ok"}"#;

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/wxa/getpaidunionid")
            .query_param("access_token", "token-1")
            .query_param("openid", "o-123")
            .query_param("transaction_id", "tx-9");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(raw_response);
    });

    let api = UserApi::new(HttpTransport::new(server.base_url()));

    let mut params = QueryParams::new();
    params.insert("access_token".to_string(), "token-1".to_string());
    params.insert("openid".to_string(), "o-123".to_string());
    params.insert("transaction_id".to_string(), "tx-9".to_string());

    let resp = api.get_paid_union_id(&params).await.unwrap();

    api_mock.assert();
    assert_eq!(resp, raw_response.as_bytes());
}

#[tokio::test]
async fn test_get_user_phone_number_end_to_end() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/wxa/business/getuserphonenumber")
            .header("content-type", "application/json;charset=utf-8")
            .json_body(serde_json::json!({"code": "code-xyz"}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "errcode": 0,
                "errmsg": "ok",
                "phone_info": {
                    "phoneNumber": "+8613800138000",
                    "purePhoneNumber": "13800138000",
                    "countryCode": "86",
                    "watermark": {
                        "timestamp": 1600000000,
                        "appid": "wxabc123"
                    }
                }
            }));
    });

    let api = UserApi::new(HttpTransport::new(server.base_url()));

    let phone = api.get_user_phone_number("code-xyz").await.unwrap();

    api_mock.assert();
    assert_eq!(phone.phone_info.phone_number, "+8613800138000");
    assert_eq!(phone.phone_info.pure_phone_number, "13800138000");
    assert_eq!(phone.phone_info.country_code, "86");
    assert_eq!(phone.phone_info.watermark.timestamp, 1600000000);
    assert_eq!(phone.phone_info.watermark.appid, "wxabc123");
}

#[tokio::test]
async fn test_get_user_phone_number_ignores_unknown_fields() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/wxa/business/getuserphonenumber");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "phone_info": {
                    "phoneNumber": "+8613800138000",
                    "purePhoneNumber": "13800138000",
                    "countryCode": "86",
                    "carrier": "unknown-field",
                    "watermark": {
                        "timestamp": 1600000000,
                        "appid": "wxabc123",
                        "signature": "also-unknown"
                    }
                },
                "trace_id": "t-1"
            }));
    });

    let api = UserApi::new(HttpTransport::new(server.base_url()));

    let phone = api.get_user_phone_number("code-xyz").await.unwrap();

    api_mock.assert();
    assert_eq!(phone.phone_info.phone_number, "+8613800138000");
    assert_eq!(phone.phone_info.watermark.appid, "wxabc123");
}

#[tokio::test]
async fn test_get_user_phone_number_malformed_response() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/wxa/business/getuserphonenumber");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(r#"{"phone_info":"#);
    });

    let api = UserApi::new(HttpTransport::new(server.base_url()));

    let result = api.get_user_phone_number("code-xyz").await;

    api_mock.assert();
    assert!(matches!(result, Err(WxApiError::DecodeError(_))));
}

#[tokio::test]
async fn test_server_error_surfaces_as_transport_error() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/sns/jscode2session");
        then.status(500);
    });

    let api = UserApi::new(HttpTransport::new(server.base_url()));

    let result = api.code2session(&QueryParams::new()).await;

    api_mock.assert();
    assert!(matches!(result, Err(WxApiError::TransportError(_))));
}
