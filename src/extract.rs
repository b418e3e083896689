//! Answer extraction from question pages
//!
//! Picks the top answer on a question page and pulls out its code
//! block, falling back to the answer's prose when it has no code.

use crate::error::{AnswerError, Result};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Query parameter that makes the question page list answers by score
const SCORE_SORT: (&str, &str) = ("answertab", "scoredesc");

/// Return `url` with answers sorted by score, highest first
///
/// Any existing query string is kept.
pub fn score_sorted_url(url: &str) -> Result<Url> {
    let mut url = Url::parse(url)?;
    url.query_pairs_mut().append_pair(SCORE_SORT.0, SCORE_SORT.1);
    Ok(url)
}

/// CSS selectors used to walk a question page
struct PageSelectors {
    answers: Selector,
    answer_cell: Selector,
    pre: Selector,
    code: Selector,
    post_body: Selector,
}

impl PageSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            answers: parse_selector("#answers")?,
            answer_cell: parse_selector(".answercell")?,
            pre: parse_selector("pre")?,
            code: parse_selector("code")?,
            post_body: parse_selector(".js-post-body")?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| AnswerError::Selector(e.to_string()))
}

/// Extract the top answer's code, or its text when there is no code
///
/// Returns `None` when the page has no answers section, no answer cell,
/// or the chosen content is blank.
pub fn extract_answer(html: &str) -> Result<Option<String>> {
    let selectors = PageSelectors::new()?;
    let document = Html::parse_document(html);

    let top_answer = document
        .select(&selectors.answers)
        .next()
        .and_then(|answers| answers.select(&selectors.answer_cell).next());

    let Some(top_answer) = top_answer else {
        return Ok(None);
    };

    let text = answer_content(top_answer, &selectors);
    if text.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(text))
}

/// Content preference: `<pre><code>`, then the post body, then everything
fn answer_content(top_answer: ElementRef<'_>, selectors: &PageSelectors) -> String {
    let chosen = match top_answer.select(&selectors.pre).next() {
        Some(pre) => pre.select(&selectors.code).next().unwrap_or(pre),
        None => top_answer
            .select(&selectors.post_body)
            .next()
            .unwrap_or(top_answer),
    };

    chosen.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(answer_cell: &str) -> String {
        format!(
            r#"<html><body>
            <div id="question"><pre><code>question code</code></pre></div>
            <div id="answers">
              <div class="answer">
                <div class="answercell post-layout--right">{}</div>
              </div>
              <div class="answer">
                <div class="answercell"><pre><code>second answer</code></pre></div>
              </div>
            </div>
            </body></html>"#,
            answer_cell
        )
    }

    #[test]
    fn test_score_sorted_url() {
        let url = score_sorted_url("https://stackoverflow.com/questions/1/print").unwrap();
        assert_eq!(
            url.as_str(),
            "https://stackoverflow.com/questions/1/print?answertab=scoredesc"
        );
    }

    #[test]
    fn test_score_sorted_url_keeps_query() {
        let url = score_sorted_url("https://stackoverflow.com/questions/1/print?noredirect=1").unwrap();
        assert_eq!(
            url.as_str(),
            "https://stackoverflow.com/questions/1/print?noredirect=1&answertab=scoredesc"
        );
    }

    #[test]
    fn test_no_answers_section() {
        let html = "<html><body><div id=\"question\">only a question</div></body></html>";
        assert_eq!(extract_answer(html).unwrap(), None);
    }

    #[test]
    fn test_answers_without_cell() {
        let html = "<html><body><div id=\"answers\"><p>no answers yet</p></div></body></html>";
        assert_eq!(extract_answer(html).unwrap(), None);
    }

    #[test]
    fn test_code_under_pre_returns_code() {
        let html = page(
            r#"<div class="s-prose js-post-body">
                 <p>Use traceback:</p>
                 <pre class="lang-py"><code>import traceback
traceback.print_exc()</code></pre>
               </div>"#,
        );

        let answer = extract_answer(&html).unwrap().unwrap();
        assert_eq!(answer, "import traceback\ntraceback.print_exc()");
    }

    #[test]
    fn test_pre_without_code_returns_pre_text() {
        let html = page(r#"<div class="js-post-body"><pre>ls -la</pre></div>"#);
        assert_eq!(extract_answer(&html).unwrap().as_deref(), Some("ls -la"));
    }

    #[test]
    fn test_no_pre_returns_post_body_text() {
        let html = page(
            r#"<div class="js-post-body"><p>Just call <code>print()</code>.</p></div>
               <div class="post-menu">Share Edit Follow</div>"#,
        );

        let answer = extract_answer(&html).unwrap().unwrap();
        assert_eq!(answer.trim(), "Just call print().");
        assert!(!answer.contains("Share"));
    }

    #[test]
    fn test_no_post_body_returns_cell_text() {
        let html = page("<p>Hello world</p>");
        assert_eq!(extract_answer(&html).unwrap().as_deref().map(str::trim), Some("Hello world"));
    }

    #[test]
    fn test_blank_answer_is_none() {
        let html = page(r#"<div class="js-post-body">   </div>"#);
        assert_eq!(extract_answer(&html).unwrap(), None);
    }
}
