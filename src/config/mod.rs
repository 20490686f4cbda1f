use crate::adapters::http::DEFAULT_BASE_URL;
use crate::utils::error::{Result, WxApiError};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "wxmini")]
#[command(about = "Mini program open API client for server-side calls")]
pub struct Cli {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = "30", help = "HTTP timeout in seconds")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 以臨時登入憑證換取會話資訊，原樣輸出回應 JSON
    Code2Session {
        #[arg(long)]
        appid: String,
        #[arg(long)]
        secret: String,
        #[arg(long)]
        js_code: String,
    },
    /// 查詢支付用戶的 UnionId，原樣輸出回應 JSON
    PaidUnionId {
        #[arg(long)]
        access_token: String,
        #[arg(long)]
        openid: String,
        #[arg(long)]
        transaction_id: Option<String>,
        #[arg(long)]
        mch_id: Option<String>,
        #[arg(long)]
        out_trade_no: Option<String>,
    },
    /// 以授權 code 換取用戶綁定的手機號
    PhoneNumber {
        #[arg(long)]
        code: String,
    },
}

impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;

        match &self.command {
            Command::Code2Session {
                appid,
                secret,
                js_code,
            } => {
                validate_non_empty_string("appid", appid)?;
                validate_non_empty_string("secret", secret)?;
                validate_non_empty_string("js_code", js_code)?;
            }
            Command::PaidUnionId {
                access_token,
                openid,
                transaction_id,
                mch_id,
                out_trade_no,
            } => {
                validate_non_empty_string("access_token", access_token)?;
                validate_non_empty_string("openid", openid)?;
                // 訂單定位方式二選一：transaction_id 或 mch_id + out_trade_no
                if transaction_id.is_none() && (mch_id.is_none() || out_trade_no.is_none()) {
                    return Err(WxApiError::MissingConfigError {
                        field: "transaction_id (or mch_id + out_trade_no)".to_string(),
                    });
                }
            }
            Command::PhoneNumber { code } => {
                validate_non_empty_string("code", code)?;
            }
        }

        Ok(())
    }
}
