//! # code-answer - instant coding answers
//!
//! Searches the web for Q&A pages matching a coding question, pulls the
//! code out of each page's top answer, and hands back the first few with
//! the page they came from.
//!
//! ## How it works
//!
//! 1. Search the web for `site:stackoverflow.com <query>`
//! 2. Collect question links from the result page
//! 3. Fetch each question with answers sorted by score
//! 4. Take the top answer's code block, or its text when there is no code
//! 5. Stop once enough answers are collected
//!
//! ## Example
//!
//! ```no_run
//! use code_answer::{format_answers, AnswerCount, Answerer, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let answerer = Answerer::new(Config::default())?;
//!     let answers = answerer
//!         .answer("python print stack trace", AnswerCount::new(3)?)
//!         .await?;
//!
//!     print!("{}", format_answers(&answers));
//!
//!     Ok(())
//! }
//! ```

pub mod answerer;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod search;

// Re-export commonly used types
pub use answerer::{
    format_answers, format_answers_json, Answer, Answerer, CONNECTION_ERROR_MESSAGE,
    NO_RESULTS_MESSAGE, TECHNICAL_DIFFICULTY_MESSAGE,
};
pub use config::{AnswerCount, Config, LogLevel};
pub use error::{AnswerError, Result};
pub use extract::{extract_answer, score_sorted_url};
pub use fetch::{HttpFetcher, PageFetcher};
pub use search::{extract_question_links, question_links, search_url};
