use clap::Parser;
use reviews::application::{init::init, ConfigService, ReviewService};
use reviews::cli::{format_review, format_review_list, format_stats, to_json, Cli, Commands};
use reviews::domain::{classify, ReviewText, Sentiment};
use reviews::error::ReviewError;
use reviews::infrastructure::{SqliteRepository, Workspace};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; RUST_LOG overrides the default level
fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn open_service() -> Result<(Workspace, ReviewService<SqliteRepository>), ReviewError> {
    let workspace = Workspace::discover()?;
    let repository = workspace.open_repository()?;
    Ok((workspace, ReviewService::new(repository)))
}

fn run(cli: Cli) -> Result<(), ReviewError> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized review store at {}", path.display());
            Ok(())
        }
        Commands::Add { text, json } => {
            let (_, service) = open_service()?;
            let review = service.create(&text)?;

            if json {
                println!("{}", to_json(&review)?);
            } else {
                println!("{}", format_review(&review));
            }
            Ok(())
        }
        Commands::List { sentiment, json } => {
            // Reject unknown labels before touching storage
            let requested = sentiment.as_deref().map(str::parse::<Sentiment>).transpose()?;

            let (workspace, service) = open_service()?;
            let sentiment = match requested {
                Some(s) => s,
                None => workspace.load_config()?.default_sentiment,
            };
            let reviews = service.list_by_sentiment(sentiment)?;

            if json {
                println!("{}", to_json(&reviews)?);
            } else {
                println!("{}", format_review_list(&reviews, sentiment).trim_end());
            }
            Ok(())
        }
        Commands::Classify { text } => {
            let text = ReviewText::parse(&text)?;
            println!("{}", classify(text.as_str()));
            Ok(())
        }
        Commands::Stats => {
            let (_, service) = open_service()?;
            print!("{}", format_stats(&service.stats()?));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(Workspace::discover()?);

            if list {
                let config = service.list()?;
                println!("database = {}", config.database.display());
                println!("default_sentiment = {}", config.default_sentiment);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: reviews config [--list | <key> [<value>]]");
                println!("Valid keys: database, default_sentiment, created");
                Ok(())
            }
        }
    }
}
