//! Delegation portal daemon: serves the HTTP API or runs a scripted session.

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use portal::app::{run_demo, serve};
use portal::PortalConfig;
use portal_registry::{SignatureFallback, VerificationMode};
use portal_utils::LogFormat;

#[derive(Parser)]
#[command(name = "portal-daemon", about = "Delegation portal daemon")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "PORTAL_CONFIG")]
    config: Option<PathBuf>,

    /// Network name reported to sessions (e.g. "homestead", "sepolia").
    #[arg(long, env = "PORTAL_NETWORK")]
    network: Option<String>,

    /// Interface the HTTP API binds to.
    #[arg(long, env = "PORTAL_LISTEN_ADDR")]
    listen_addr: Option<IpAddr>,

    /// HTTP API port.
    #[arg(long, env = "PORTAL_RPC_PORT")]
    rpc_port: Option<u16>,

    /// Hex-encoded private key used to sign delegations created via the API.
    #[arg(long, env = "PORTAL_SIGNER_KEY", hide_env_values = true)]
    signer_key: Option<String>,

    /// What to store when no real signature is available:
    /// "placeholder", "unsigned" or "reject".
    #[arg(long, env = "PORTAL_SIGNATURE_FALLBACK")]
    signature_fallback: Option<String>,

    /// How verification decides validity: "existence" or "signature".
    #[arg(long, env = "PORTAL_VERIFICATION_MODE")]
    verification_mode: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "PORTAL_LOG_FORMAT")]
    log_format: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "PORTAL_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Serve the HTTP API until interrupted.
    Serve,
    /// Create, verify and revoke one delegation through a session.
    Demo {
        /// Delegatee address.
        #[arg(long, default_value = "0xBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB")]
        delegatee: String,

        /// Caveat bytes, hex encoded.
        #[arg(long, default_value = "0x")]
        caveat: String,
    },
}

fn parse_fallback(s: &str) -> anyhow::Result<SignatureFallback> {
    Ok(match s.to_lowercase().as_str() {
        "placeholder" => SignatureFallback::Placeholder,
        "unsigned" => SignatureFallback::Unsigned,
        "reject" => SignatureFallback::Reject,
        other => bail!("unknown signature fallback {other:?}"),
    })
}

fn parse_verification_mode(s: &str) -> anyhow::Result<VerificationMode> {
    Ok(match s.to_lowercase().as_str() {
        "existence" => VerificationMode::Existence,
        "signature" => VerificationMode::Signature,
        other => bail!("unknown verification mode {other:?}"),
    })
}

fn load_config(cli: &Cli) -> anyhow::Result<PortalConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let path = path.display().to_string();
            PortalConfig::from_toml_file(&path)
                .with_context(|| format!("loading config file {path}"))?
        }
        None => PortalConfig::default(),
    };

    if let Some(network) = &cli.network {
        config.network = network.clone();
    }
    if let Some(addr) = cli.listen_addr {
        config.listen_addr = addr;
    }
    if let Some(port) = cli.rpc_port {
        config.rpc_port = port;
    }
    if let Some(key) = &cli.signer_key {
        config.signer_private_key = Some(key.clone());
    }
    if let Some(fallback) = &cli.signature_fallback {
        config.registry.signature_fallback = parse_fallback(fallback)?;
    }
    if let Some(mode) = &cli.verification_mode {
        config.registry.verification_mode = parse_verification_mode(mode)?;
    }
    if let Some(format) = &cli.log_format {
        config.log_format = LogFormat::parse(format)
            .with_context(|| format!("unknown log format {format:?}"))?;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    portal_utils::init_logging(config.log_format, &config.log_level);

    match cli.command {
        Command::Serve => {
            tracing::info!(
                addr = %config.rpc_socket_addr(),
                network = %config.network,
                fallback = ?config.registry.signature_fallback,
                verification = ?config.registry.verification_mode,
                "starting delegation portal"
            );
            serve(&config, async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutdown signal received, stopping server");
            })
            .await?;
            tracing::info!("portal daemon exited cleanly");
        }
        Command::Demo { delegatee, caveat } => {
            for line in run_demo(&config, &delegatee, &caveat).await? {
                println!("{line}");
            }
        }
    }

    Ok(())
}
