//! Answer collection and result formatting
//!
//! Walks the question links from a search in order, extracts the top
//! answer of each page, and formats what was collected for terminal
//! display or JSON output.

use crate::config::{AnswerCount, Config};
use crate::error::Result;
use crate::extract::{extract_answer, score_sorted_url};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::search::question_links;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Printed when a query produced no answers
pub const NO_RESULTS_MESSAGE: &str = "Sorry, couldn't find any answers with that query";

/// Printed when the search engine could not be reached
pub const CONNECTION_ERROR_MESSAGE: &str = "Sorry, cannot connect to";

/// Printed for any other failure before answers could be collected
pub const TECHNICAL_DIFFICULTY_MESSAGE: &str = "Sorry, there is some technical difficulty";

/// Width of the divider printed above each answer
const SEPARATOR_WIDTH: usize = 60;

/// An extracted answer and the question page it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Question page URL
    pub link: String,
    /// Code block or answer text
    pub body: String,
}

/// Searches for a query and collects code answers
pub struct Answerer<F = HttpFetcher> {
    fetcher: F,
    config: Config,
}

impl Answerer<HttpFetcher> {
    /// Create an answerer that fetches pages over HTTP
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self { fetcher, config })
    }
}

impl<F: PageFetcher> Answerer<F> {
    /// Create an answerer with a custom page fetcher
    pub fn with_fetcher(fetcher: F, config: Config) -> Self {
        Self { fetcher, config }
    }

    /// Collect up to `count` answers for `query`
    pub async fn answer(&self, query: &str, count: AnswerCount) -> Result<Vec<Answer>> {
        self.answer_with_progress(query, count, |_| {}).await
    }

    /// Collect answers, calling `on_page` with each question link before it is fetched
    ///
    /// Links are visited in search order until `count` answers are found
    /// or the links run out. A page that fails to load or has no answer
    /// is skipped.
    pub async fn answer_with_progress<P>(
        &self,
        query: &str,
        count: AnswerCount,
        mut on_page: P,
    ) -> Result<Vec<Answer>>
    where
        P: FnMut(&str),
    {
        let links = question_links(&self.fetcher, &self.config, query).await?;
        let wanted = count.get();
        let mut answers = Vec::with_capacity(wanted.min(links.len()));

        for link in links {
            if answers.len() >= wanted {
                break;
            }

            on_page(&link);

            match self.get_answer(&link).await {
                Ok(Some(body)) => answers.push(Answer { link, body }),
                Ok(None) => debug!("No answer found on {}", link),
                Err(e) => warn!("Skipping {}: {}", link, e),
            }
        }

        info!("Collected {} of {} requested answers", answers.len(), wanted);

        Ok(answers)
    }

    /// Fetch a question page sorted by score and extract its top answer
    pub async fn get_answer(&self, link: &str) -> Result<Option<String>> {
        let url = score_sorted_url(link)?;
        let html = self.fetcher.fetch(url.as_str()).await?;
        extract_answer(&html)
    }
}

/// Format answers for terminal display
///
/// A single answer is printed bare; several are each preceded by a
/// divider and the page they came from.
pub fn format_answers(answers: &[Answer]) -> String {
    match answers {
        [] => format!("{}\n", NO_RESULTS_MESSAGE),
        [only] => format!("{}\n", only.body),
        _ => {
            let mut output = String::new();
            for answer in answers {
                output.push_str(&"=".repeat(SEPARATOR_WIDTH));
                output.push('\n');
                output.push_str(&format!("Answer from: {} as: \n{}\n", answer.link, answer.body));
            }
            output
        }
    }
}

/// Format answers as JSON
pub fn format_answers_json(answers: &[Answer]) -> Result<String> {
    Ok(serde_json::to_string_pretty(answers)?)
}
