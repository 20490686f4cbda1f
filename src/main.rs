use clap::Parser;
use std::time::Duration;
use wxmini_client::config::{Cli, Command};
use wxmini_client::utils::{logger, validation::Validate};
use wxmini_client::{HttpTransport, QueryParams, UserApi};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting wxmini client");
    tracing::debug!("API gateway: {}", cli.base_url);

    // 驗證配置
    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let transport = HttpTransport::with_timeout(
        cli.base_url.clone(),
        Duration::from_secs(cli.timeout_seconds),
    )?;
    let api = UserApi::new(transport);

    match run(&api, cli.command).await {
        Ok(()) => {
            tracing::info!("✅ Request completed");
        }
        Err(e) => {
            tracing::error!("❌ Request failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run(api: &UserApi<HttpTransport>, command: Command) -> wxmini_client::Result<()> {
    match command {
        Command::Code2Session {
            appid,
            secret,
            js_code,
        } => {
            let mut params = QueryParams::new();
            params.insert("appid".to_string(), appid);
            params.insert("secret".to_string(), secret);
            params.insert("js_code".to_string(), js_code);
            params.insert(
                "grant_type".to_string(),
                "authorization_code".to_string(),
            );

            let raw = api.code2session(&params).await?;
            // 回應原樣輸出，errcode 留給呼叫方解讀
            println!("{}", String::from_utf8_lossy(&raw));
        }
        Command::PaidUnionId {
            access_token,
            openid,
            transaction_id,
            mch_id,
            out_trade_no,
        } => {
            let mut params = QueryParams::new();
            params.insert("access_token".to_string(), access_token);
            params.insert("openid".to_string(), openid);
            if let Some(transaction_id) = transaction_id {
                params.insert("transaction_id".to_string(), transaction_id);
            }
            if let Some(mch_id) = mch_id {
                params.insert("mch_id".to_string(), mch_id);
            }
            if let Some(out_trade_no) = out_trade_no {
                params.insert("out_trade_no".to_string(), out_trade_no);
            }

            let raw = api.get_paid_union_id(&params).await?;
            println!("{}", String::from_utf8_lossy(&raw));
        }
        Command::PhoneNumber { code } => {
            let phone = api.get_user_phone_number(&code).await?;
            let watermark = &phone.phone_info.watermark;
            let issued_at = chrono::DateTime::from_timestamp(watermark.timestamp, 0)
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| watermark.timestamp.to_string());

            println!(
                "📱 {} (country code {}, pure {})",
                phone.phone_info.phone_number,
                phone.phone_info.country_code,
                phone.phone_info.pure_phone_number
            );
            println!("🔖 watermark: appid={} issued_at={}", watermark.appid, issued_at);
        }
    }

    Ok(())
}
