use anyhow::Result;
use article_generator::{
    completion::CompletionPayload, init_tracing, input::validate_topic, model::ArticleLength,
    AppConfig, ArticleGenerator,
};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LengthArg {
    Short,
    Medium,
    Long,
}

impl From<LengthArg> for ArticleLength {
    fn from(arg: LengthArg) -> Self {
        match arg {
            LengthArg::Short => ArticleLength::Short,
            LengthArg::Medium => ArticleLength::Medium,
            LengthArg::Long => ArticleLength::Long,
        }
    }
}

/// Generate one article from the command line.
#[derive(Debug, Parser)]
#[command(name = "article_cli", version)]
struct Cli {
    /// Article length; defaults to ARTICLE_DEFAULT_LENGTH.
    #[arg(short, long, value_enum)]
    length: Option<LengthArg>,

    /// Print the request payload instead of calling the API.
    #[arg(long)]
    dry_run: bool,

    /// Topic words, joined with spaces.
    #[arg(required = true)]
    topic: Vec<String>,
}

fn dry_run_payload(
    generator: &ArticleGenerator,
    topic: &str,
    length: Option<ArticleLength>,
) -> Result<String> {
    let request = generator.builder().build(topic, length);
    Ok(serde_json::to_string_pretty(&CompletionPayload::from(&request))?)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let topic = validate_topic(&cli.topic.join(" "))?;
    let length = cli.length.map(ArticleLength::from);

    let config = AppConfig::from_env()?;
    let generator = ArticleGenerator::from_config(&config)?;

    if cli.dry_run {
        println!("{}", dry_run_payload(&generator, &topic, length)?);
        return Ok(());
    }

    eprintln!(
        "📝 Generating a {} article about \"{topic}\"...",
        length.unwrap_or(config.default_length)
    );
    let article = generator.generate(&topic, length).await?;
    println!("{article}");
    Ok(())
}
