mod file_store;


use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use kasuwa::config::{API_BASE_URL_VAR, ApiConfig, DEFAULT_API_BASE_URL, DEFAULT_TENANT, TENANT_VAR};
use kasuwa::net::transport::ReqwestTransport;
use kasuwa::net::types::{LoginCredentials, SignupData};
use kasuwa::{AuthError, AuthService};
use serde_json::{Value, json};

use crate::file_store::FileStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Auth(#[from] AuthError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "kasuwa", about = "Kasuwan Gizo merchant account CLI")]
struct Cli {
    #[arg(long, env = API_BASE_URL_VAR, default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = TENANT_VAR, default_value = DEFAULT_TENANT)]
    tenant: String,

    /// Where the session (token, user record, verified flag) is kept.
    #[arg(long, env = "KASUWA_SESSION_FILE", default_value = ".kasuwa-session.json")]
    session_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a merchant account.
    Signup(SignupArgs),
    /// Sign in and store the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "KASUWA_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Confirm an email address with the values from the verification link.
    Verify {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        token: String,
    },
    /// Forget the stored session.
    Logout,
    /// Print the stored session state.
    Status,
}

#[derive(Args, Debug)]
struct SignupArgs {
    #[arg(long)]
    business_name: String,
    #[arg(long)]
    contact_person_name: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "KASUWA_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long)]
    phone_number: String,
    #[arg(long)]
    business_type: String,
    #[arg(long)]
    location: String,
    #[arg(long)]
    whatsapp: Option<String>,
    #[arg(long)]
    facebook: Option<String>,
    #[arg(long)]
    instagram: Option<String>,
}

impl From<SignupArgs> for SignupData {
    fn from(args: SignupArgs) -> Self {
        Self {
            business_name: args.business_name,
            contact_person_name: args.contact_person_name,
            email: args.email,
            password: args.password,
            phone_number: args.phone_number,
            business_type: args.business_type,
            location: args.location,
            whatsapp: args.whatsapp,
            facebook: args.facebook,
            instagram: args.instagram,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let service = AuthService::new(
        ApiConfig::new(&cli.base_url, &cli.tenant),
        Arc::new(ReqwestTransport::new()),
        Arc::new(FileStore::new(&cli.session_file)),
    );
    tracing::debug!(base_url = %service.config().base_url, tenant = %service.config().tenant, "using API");

    match cli.command {
        Command::Signup(args) => {
            let result = service.signup(&args.into()).await?;
            print_json(&serde_json::to_value(result)?)
        }
        Command::Login { email, password } => {
            let result = service.login(&LoginCredentials { email, password }).await?;
            tracing::info!(session_file = %cli.session_file, "session stored");
            print_json(&serde_json::to_value(result)?)
        }
        Command::Verify { user_id, token } => {
            let result = service.verify_email(&user_id, &token).await?;
            print_json(&serde_json::to_value(result)?)
        }
        Command::Logout => {
            service.logout();
            print_json(&json!({ "loggedOut": true }))
        }
        Command::Status => print_json(&status_json(&service)),
    }
}

fn status_json(service: &AuthService) -> Value {
    json!({
        "authenticated": service.is_authenticated(),
        "emailVerified": service.is_email_verified(),
        "email": service.session().user_email(),
        "user": service.user(),
    })
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
