mod mailer;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use clap::{Args, Parser, Subcommand};
use contact::config::{ACCESS_TOKEN_KEY, ENDPOINT_KEY, PUBLIC_KEY_KEY, SERVICE_ID_KEY, TEMPLATE_ID_KEY};
use contact::{
    ConfigError, ContactField, ContactForm, ContactSettings, DeliveryError, EmailJsRequest, SubmitPolicy,
    SubmitRejected, SubmitStatus, SystemClock,
};
use tracing_subscriber::EnvFilter;

use crate::mailer::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, Mailer, Timeouts};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
    #[error("submit refused: {0}")]
    Refused(#[from] SubmitRejected),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "contact-cli", about = "Send or preview portfolio contact messages through EmailJS")]
struct Cli {
    #[arg(long, env = "PORTFOLIO_EMAILJS_ENDPOINT")]
    endpoint: Option<String>,

    #[arg(long, env = "PORTFOLIO_EMAILJS_SERVICE_ID")]
    service_id: Option<String>,

    #[arg(long, env = "PORTFOLIO_EMAILJS_TEMPLATE_ID")]
    template_id: Option<String>,

    #[arg(long, env = "PORTFOLIO_EMAILJS_PUBLIC_KEY")]
    public_key: Option<String>,

    #[arg(long, env = "PORTFOLIO_EMAILJS_ACCESS_TOKEN", help = "Private key for non-browser API access")]
    access_token: Option<String>,

    #[arg(long, env = "CONTACT_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    request_timeout_secs: u64,

    #[arg(long, env = "CONTACT_CONNECT_TIMEOUT_SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    connect_timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Deliver a message through EmailJS.
    Send(MessageArgs),
    /// Print the request body that `send` would post.
    Preview(MessageArgs),
}

#[derive(Args, Debug, Clone)]
struct MessageArgs {
    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    message: String,
}

impl Cli {
    fn lookup(&self, key: &str) -> Option<String> {
        let value = match key {
            ENDPOINT_KEY => &self.endpoint,
            SERVICE_ID_KEY => &self.service_id,
            TEMPLATE_ID_KEY => &self.template_id,
            PUBLIC_KEY_KEY => &self.public_key,
            ACCESS_TOKEN_KEY => &self.access_token,
            _ => return None,
        };
        value.clone()
    }

    fn settings(&self) -> Result<ContactSettings, ConfigError> {
        ContactSettings::from_lookup(|key| self.lookup(key))
    }

    fn timeouts(&self) -> Timeouts {
        Timeouts { request_secs: self.request_timeout_secs, connect_secs: self.connect_timeout_secs }
    }
}

/// Fill a one-shot form from command-line arguments.
fn form_from_args(args: &MessageArgs) -> ContactForm {
    let mut form = ContactForm::new(SubmitPolicy::default());
    form.update_field(ContactField::Name, args.name.as_str());
    form.update_field(ContactField::Email, args.email.as_str());
    form.update_field(ContactField::Message, args.message.as_str());
    form
}

fn preview(settings: &ContactSettings, args: &MessageArgs) -> Result<String, CliError> {
    let mut form = form_from_args(args);
    let pending = form.begin_submit(&SystemClock)?;
    let body = EmailJsRequest::new(&settings.emailjs, &pending.params);
    Ok(serde_json::to_string_pretty(&body)?)
}

async fn send(mailer: &Mailer, args: &MessageArgs) -> Result<(), CliError> {
    let mut form = form_from_args(args);
    let pending = form.begin_submit(&SystemClock)?;
    tracing::info!(
        endpoint = %mailer.config().endpoint,
        service_id = %mailer.config().service_id,
        time = %pending.params.time,
        "sending contact message"
    );
    let outcome = mailer.send(&pending.params).await;
    form.complete(pending.ticket, outcome);

    match form.status() {
        SubmitStatus::Sent => {
            tracing::info!("contact message delivered");
            Ok(())
        }
        SubmitStatus::Failed(err) => Err(CliError::Delivery(err.clone())),
        SubmitStatus::Idle | SubmitStatus::Sending => Err(CliError::Delivery(DeliveryError::Unavailable)),
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.settings()?;

    match &cli.command {
        Command::Preview(args) => {
            println!("{}", preview(&settings, args)?);
            Ok(())
        }
        Command::Send(args) => {
            let mailer = Mailer::new(settings.emailjs, cli.timeouts())?;
            if let Err(err) = send(&mailer, args).await {
                tracing::error!(error = %err, "contact message not delivered");
                return Err(err);
            }
            Ok(())
        }
    }
}
