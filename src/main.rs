//! RustOJ Client - command-line entry point
//!
//! ```text
//! rustoj-client get <path> [key=value ...]
//! rustoj-client post <path> <json-body>
//! rustoj-client login <name>
//! rustoj-client token <cookie-string>
//! ```

use anyhow::{Context, bail};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rustoj_client::{
    Backend, ClientConfig, get_token,
    constants::{DEFAULT_LOG_FILTER, ENV_TOKEN, TOKEN_COOKIE_NAME},
};

const USAGE: &str = "usage: rustoj-client <get|post|login|token> ...";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        bail!(USAGE);
    };

    // Decoding a cookie string needs no backend
    if command == "token" {
        let cookies = rest.first().context("token requires a cookie string")?;
        let token = get_token(cookies)?;
        return print_json(&serde_json::to_value(token)?);
    }

    let config = ClientConfig::from_env()?;
    let backend = Backend::new(config)?;
    if let Ok(token) = std::env::var(ENV_TOKEN) {
        backend.set_cookie(&format!("{}={}; Path=/", TOKEN_COOKIE_NAME, token));
    }

    match command.as_str() {
        "get" => {
            let path = rest.first().context("get requires a path")?;
            let query = rest[1..]
                .iter()
                .map(|pair| {
                    pair.split_once('=')
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .with_context(|| format!("expected key=value, got '{}'", pair))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            let body: Value = backend.get(path, &query).await?;
            print_json(&body)
        }
        "post" => {
            let path = rest.first().context("post requires a path")?;
            let raw = rest.get(1).map(String::as_str).unwrap_or("{}");
            let payload: Value = serde_json::from_str(raw).context("body is not valid JSON")?;
            let body: Value = backend.post(path, &payload).await?;
            print_json(&body)
        }
        "login" => {
            let name = rest.first().context("login requires a user name")?;
            backend.login(name).await?;
            print_json(&serde_json::to_value(backend.token()?)?)
        }
        other => bail!("unknown command '{}'\n{}", other, USAGE),
    }
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
