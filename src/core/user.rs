use crate::domain::model::{PhoneNumber, QueryParams};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use serde::Serialize;
use url::form_urlencoded;

const API_CODE2SESSION: &str = "/sns/jscode2session";
const API_GET_PAID_UNION_ID: &str = "/wxa/getpaidunionid";
const API_GET_USER_PHONE_NUMBER: &str = "/wxa/business/getuserphonenumber";

const CONTENT_TYPE_JSON: &str = "application/json;charset=utf-8";

/// 用戶相關的開放 API 綁定。每個操作都是單次請求/回應，無本地狀態。
pub struct UserApi<T: Transport> {
    transport: T,
}

impl<T: Transport> UserApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// 登入憑證校驗。把 wx.login 取得的臨時登入憑證換成會話資訊。
    /// 回應原樣回傳，appid 與 secret 等參數由呼叫方提供，errcode 由呼叫方解讀。
    ///
    /// See: https://developers.weixin.qq.com/miniprogram/dev/api-backend/open-api/login/auth.code2Session.html
    pub async fn code2session(&self, params: &QueryParams) -> Result<Vec<u8>> {
        let query = encode_query(params);
        self.transport
            .get(&format!("{}?{}", API_CODE2SESSION, query))
            .await
    }

    /// 用戶支付完成後查詢其 UnionId，無需用戶授權。回應原樣回傳。
    ///
    /// See: https://developers.weixin.qq.com/miniprogram/dev/api-backend/open-api/user-info/auth.getPaidUnionId.html
    pub async fn get_paid_union_id(&self, params: &QueryParams) -> Result<Vec<u8>> {
        let query = encode_query(params);
        self.transport
            .get(&format!("{}?{}", API_GET_PAID_UNION_ID, query))
            .await
    }

    /// 以 code 換取用戶綁定的手機號。
    ///
    /// See: https://developers.weixin.qq.com/miniprogram/dev/api-backend/open-api/phonenumber/phonenumber.getPhoneNumber.html
    pub async fn get_user_phone_number(&self, code: &str) -> Result<PhoneNumber> {
        #[derive(Serialize)]
        struct PhoneNumberRequest<'a> {
            code: &'a str,
        }

        let body = serde_json::to_vec(&PhoneNumberRequest { code })?;
        let resp = self
            .transport
            .post(API_GET_USER_PHONE_NUMBER, body, CONTENT_TYPE_JSON)
            .await?;

        let phone = serde_json::from_slice(&resp)?;
        Ok(phone)
    }
}

fn encode_query(params: &QueryParams) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish()
}
