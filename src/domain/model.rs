use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 查詢參數集合。BTreeMap 讓編碼結果固定按 key 排序。
pub type QueryParams = BTreeMap<String, String>;

/// getuserphonenumber 回應。未知欄位忽略，缺少的欄位解碼為零值。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneNumber {
    pub phone_info: PhoneInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneInfo {
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "purePhoneNumber")]
    pub pure_phone_number: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
    pub watermark: Watermark,
}

/// 水印：回應由哪個 appid 於何時簽發，供呼叫方防重放。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Watermark {
    pub timestamp: i64,
    pub appid: String,
}
