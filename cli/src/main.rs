mod backend;

use clap::{Args, Parser, Subcommand};
use wire::{BackendConfig, ContactDraft, ContactForm, Gig};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("gig feed returned HTTP {0}")]
    FeedStatus(u16),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("{0}")]
    Rejected(String),
}

#[derive(Parser, Debug)]
#[command(name = "maffa-cli", about = "Command-line client for the MAFFA site backend")]
struct Cli {
    /// Backend base address; defaults to http://localhost:8000.
    #[arg(long, env = wire::BACKEND_URL_ENV)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the gig feed once and print it.
    Gigs {
        /// Print the raw gig array as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Send one booking/contact message.
    Contact(ContactArgs),
}

#[derive(Args, Debug)]
struct ContactArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long, default_value = "")]
    subject: String,
    #[arg(long)]
    message: String,
}

impl From<ContactArgs> for ContactDraft {
    fn from(args: ContactArgs) -> Self {
        Self { name: args.name, email: args.email, subject: args.subject, message: args.message }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let backend = BackendConfig::resolve(cli.backend_url.as_deref());
    let http = reqwest::Client::new();

    match cli.command {
        Command::Gigs { json } => run_gigs(&http, &backend, json).await,
        Command::Contact(args) => run_contact(&http, &backend, args).await,
    }
}

async fn run_gigs(http: &reqwest::Client, backend: &BackendConfig, json: bool) -> Result<(), CliError> {
    let feed = backend::load_feed(http, backend).await;
    if json {
        println!("{}", serde_json::to_string_pretty(feed.gigs())?);
        return Ok(());
    }
    match feed.caption() {
        Some(caption) => println!("{caption}"),
        None => {
            for gig in feed.gigs() {
                println!("{}", gig_line(gig));
            }
        }
    }
    Ok(())
}

async fn run_contact(http: &reqwest::Client, backend: &BackendConfig, args: ContactArgs) -> Result<(), CliError> {
    let mut form = ContactForm { draft: args.into(), ..ContactForm::default() };
    let result = backend::submit(http, backend, &mut form).await?;
    if !result.ok {
        return Err(CliError::Rejected(result.message));
    }
    println!("{}", result.message);
    Ok(())
}

fn gig_line(gig: &Gig) -> String {
    let mut line = format!("{}  {}  {}", gig.display_date(), gig.title, gig.location_line());
    if let Some(url) = gig.ticket_link() {
        line.push_str("  ");
        line.push_str(url);
    }
    line
}
