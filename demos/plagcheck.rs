use std::error::Error;
use std::fmt::Debug;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use plagtracker_client::{sample_text, PlagtrackerClient, Response};

#[derive(Parser)]
#[command(author, version, about = "Check texts for plagiarism with Plagtracker", long_about = None)]
struct Cli {
    #[arg(short = 'l', long, env = "PLAGTRACKER_LOGIN")]
    login: String,

    #[arg(short = 'p', long, env = "PLAGTRACKER_PASSWORD", hide_env_values = true)]
    password: String,

    /// API host name
    #[arg(short = 'd', long, default_value = plagtracker_client::DEFAULT_API_DOMAIN)]
    domain: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a text
    Text { text: String },
    /// Submit the text of a web page
    Url { url: String },
    /// Submit a document (.doc, .csv, .html, .odt, .rtf, .txt, .docx)
    File { path: PathBuf },
    /// Submit the built-in sample text
    Sample,
    /// Show how much of a text has been checked
    Status { hash: String },
    /// Show the result of a finished check
    #[command(name = "result")]
    Report { hash: String },
    /// Show the plagiarism percent of a text
    Percent { hash: String },
    /// Show a submitted text
    Get { hash: String },
}

fn report<T: Debug>(response: &Response<T>) {
    println!("{} {}", response.status(), response.message());
    if let Some(data) = response.data() {
        println!("{data:?}");
    }
    if response.is_temporary_error() {
        println!("The service is temporarily unavailable, try again later.");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let client = PlagtrackerClient::builder()
        .login(cli.login)
        .password(cli.password)
        .api_domain(cli.domain)
        .build()?;
    let texts = client.texts();

    match cli.command {
        Commands::Text { text } => report(&texts.submit(text).await?),
        Commands::Url { url } => report(&texts.submit_url(url).await?),
        Commands::File { path } => report(&texts.submit_file(path).await?),
        Commands::Sample => report(&texts.submit(sample_text()).await?),
        Commands::Status { hash } => report(&texts.status(&hash).await?),
        Commands::Percent { hash } => report(&texts.plagiarism_percent(&hash).await?),
        Commands::Get { hash } => report(&texts.get(&hash).await?),
        Commands::Report { hash } => {
            let response = texts.result(&hash).await?;
            println!("{} {}", response.status(), response.message());
            if let Some(result) = response.data() {
                println!("{result}");
                for (index, source) in result.sources.iter().enumerate() {
                    println!("  [{index}] {source}");
                }
            }
        }
    }

    Ok(())
}
