use clap::{Parser, error::ErrorKind};
use olvm_storage_check::{
    CheckConfig, CheckResult, DEFAULT_CA_FILE, DEFAULT_TIMEOUT_SECONDS, OlvmError, OlvmResult,
    ServiceState, run,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "check_olvm_datadomain")]
#[command(about = "Report used and available space of an oVirt/OLVM storage domain")]
#[command(version)]
struct Cli {
    /// Storage domain name (case-insensitive)
    storage_domain: Option<String>,

    /// Manager base URL, e.g. https://olvmmanager.domain.com
    #[arg(long, env = "OLVM_URL")]
    url: Option<String>,

    /// CA certificate used to verify the manager
    #[arg(long, env = "OLVM_CA_FILE", default_value = DEFAULT_CA_FILE)]
    ca_file: PathBuf,

    /// Trust the built-in root certificates instead of --ca-file
    #[arg(long)]
    system_ca: bool,

    /// Pre-encoded Basic authorization token
    #[arg(long, env = "OLVM_AUTH", hide_env_values = true)]
    auth: Option<String>,

    /// Username, e.g. admin@internal
    #[arg(short, long, env = "OLVM_USERNAME")]
    username: Option<String>,

    /// Password for --username
    #[arg(short, long, env = "OLVM_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long, env = "OLVM_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    timeout: u64,

    /// WARNING when available space drops below this many GB
    #[arg(short, long)]
    warning: Option<f64>,

    /// CRITICAL when available space drops below this many GB
    #[arg(short, long)]
    critical: Option<f64>,

    /// Log request details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// The requested storage domain; blank counts as missing.
    fn domain_name(&self) -> Option<&str> {
        self.storage_domain
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    fn config(&self) -> OlvmResult<CheckConfig> {
        let mut builder = CheckConfig::builder().timeout_seconds(self.timeout);
        if let Some(url) = &self.url {
            builder = builder.url(url);
        }
        if !self.system_ca {
            builder = builder.ca_file(&self.ca_file);
        }
        if let Some(token) = &self.auth {
            builder = builder.auth_token(token);
        }
        if let (Some(username), Some(password)) = (&self.username, &self.password) {
            builder = builder.credentials(username, password);
        }
        if let Some(warning) = self.warning {
            builder = builder.warning(warning);
        }
        if let Some(critical) = self.critical {
            builder = builder.critical(critical);
        }
        builder.build()
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            return match usage_result(&error) {
                Some(result) => {
                    eprintln!("{}", error.render());
                    emit(&result)
                }
                None => {
                    error.print().ok();
                    ExitCode::SUCCESS
                }
            };
        }
    };

    // stdout carries the plugin line only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
        }))
        .init();

    emit(&evaluate(&cli).await)
}

/// The argument is checked before the configuration is built.
async fn evaluate(cli: &Cli) -> CheckResult {
    let Some(name) = cli.domain_name() else {
        return CheckResult::from(OlvmError::MissingArgument);
    };
    match cli.config() {
        Ok(config) => run(&config, Some(name)).await,
        Err(error) => CheckResult::from(error),
    }
}

/// UNKNOWN line for a command-line error; `None` for `--help` and `--version`.
fn usage_result(error: &clap::Error) -> Option<CheckResult> {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => {
            let rendered = error.render().to_string();
            let summary = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .to_string();
            Some(CheckResult::new(
                format!("{}: {summary}", ServiceState::Unknown),
                ServiceState::Unknown,
            ))
        }
    }
}

fn emit(result: &CheckResult) -> ExitCode {
    println!("{result}");
    ExitCode::from(result.exit_code() as u8)
}
