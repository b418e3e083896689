//! answer CLI - instant coding answers from the command line
//!
//! Searches Stack Overflow for a question and prints the top answers' code.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use code_answer::{
    format_answers, format_answers_json, AnswerCount, AnswerError, Answerer, Config, LogLevel,
    CONNECTION_ERROR_MESSAGE, TECHNICAL_DIFFICULTY_MESSAGE,
};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "answer")]
#[command(author, version, about = "The code answer utility", long_about = None)]
struct Cli {
    /// The question to answer
    #[arg(value_name = "QUERY")]
    query: Vec<String>,

    /// Number of answers to return, should be among [1,10]
    #[arg(
        short = 'n',
        long = "num",
        value_name = "NUM",
        default_value = "1",
        env = "ANSWER_NUM"
    )]
    num_answers: AnswerCount,

    /// Log level: debug, info, warning, error or critical
    #[arg(
        short = 'v',
        value_name = "LEVEL",
        num_args = 0..=1,
        default_value = "warning",
        default_missing_value = "debug"
    )]
    log_level: LogLevel,

    /// Output as JSON
    #[arg(long, env = "ANSWER_JSON")]
    json: bool,

    /// Search engine endpoint
    #[arg(long, env = "ANSWER_SEARCH_URL", default_value = code_answer::config::DEFAULT_SEARCH_URL)]
    search_url: String,

    /// Site to restrict the search to
    #[arg(long, env = "ANSWER_SITE", default_value = code_answer::config::DEFAULT_SITE)]
    site: String,

    /// User agent sent with every request
    #[arg(long, env = "ANSWER_USER_AGENT", default_value = code_answer::config::DEFAULT_USER_AGENT)]
    user_agent: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_level.directive()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.query.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let query = cli.query.join(" ");
    let config = Config::new()
        .with_search_url(cli.search_url)
        .with_site(cli.site)
        .with_user_agent(cli.user_agent);

    cmd_answer(query, cli.num_answers, config, cli.json).await
}

async fn cmd_answer(query: String, count: AnswerCount, config: Config, json: bool) -> Result<()> {
    let answerer = Answerer::new(config)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Searching for \"{}\"...", query));

    let result = answerer
        .answer_with_progress(&query, count, |link| {
            pb.set_message(format!("Fetching {}", link));
        })
        .await;

    pb.finish_and_clear();

    let answers = match result {
        Ok(answers) => answers,
        Err(e) => {
            error!("{:?}", e);
            println!("{}", error_message(&e));
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", format_answers_json(&answers)?);
    } else {
        print!("{}", format_answers(&answers));
    }

    Ok(())
}

/// User-facing message for a failure before any answers were collected
fn error_message(err: &AnswerError) -> String {
    let prefix = match err {
        AnswerError::Connection { .. } => CONNECTION_ERROR_MESSAGE,
        _ => TECHNICAL_DIFFICULTY_MESSAGE,
    };
    format!("{} {}", prefix.red(), err)
}
