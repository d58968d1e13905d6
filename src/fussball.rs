use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{error, info, info_span, instrument, warn};
use url::Url;

use crate::builder;
use crate::error::ScheduleError;
use crate::model::schedule::Schedule;

/// Upcoming games of the default team on fussball.de.
pub const DEFAULT_TEAM_URL: &str =
    "http://www.fussball.de/ajax.team.next.games/-/team-id/01S7GV1URS000000VS548985VUL18RL3";

const ROW_HEADLINE_SELECTOR: &str = "tr.row-headline";
const CLUB_NAME_SELECTOR: &str = ".club-name";
const DETAIL_LINK_SELECTOR: &str = "td.column-detail a[href]";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid team url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("invalid selector `{0}`")]
    Selector(&'static str),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// The three parallel sequences read off a match plan, each in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFixtures {
    pub timestamps: Vec<String>,
    pub team_names: Vec<String>,
    pub detail_links: Vec<Url>,
}

impl RawFixtures {
    pub fn build(&self) -> Result<Schedule, ScheduleError> {
        builder::build(&self.timestamps, &self.team_names, &self.detail_links)
    }
}

/// Fetch the match plan at `url`, turn it into a schedule and hand the outcome to `done`.
#[instrument(level = "info", skip(done))]
pub fn with_schedule<F, R>(url: &str, done: F) -> R
where
    F: FnOnce(Result<Schedule, FetchError>) -> R,
{
    done(load_schedule(url))
}

fn load_schedule(url: &str) -> Result<Schedule, FetchError> {
    let base = Url::parse(url).map_err(|source| FetchError::InvalidUrl { url: url.to_string(), source })?;
    let html = fetch_document(base.as_str())?;
    let raw = extract(&html, &base)?;
    match raw.build() {
        Ok(schedule) => {
            info!(fixtures = schedule.len(), "Built schedule");
            Ok(schedule)
        }
        Err(e) => {
            error!(error = %e, "Failed to build schedule");
            Err(e.into())
        }
    }
}

/// GET the document body as a string.
pub fn fetch_document(url: &str) -> Result<String, FetchError> {
    let request_error = |source: ureq::Error| FetchError::Request { url: url.to_string(), source };
    let response = {
        let _span = info_span!("matchplan_fetch", url = %url).entered();
        ureq::get(url).call()
    };
    match response {
        Ok(response) => {
            let mut body_reader = response.into_body();
            body_reader.read_to_string().map_err(request_error)
        }
        Err(e) => {
            error!(error = %e, url = %url, "Request failed");
            Err(request_error(e))
        }
    }
}

/// Pull row headlines, club names and detail links out of match plan markup.
///
/// Relative links are resolved against `base`.
#[instrument(level = "info", skip(html, base), fields(bytes = html.len()))]
pub fn extract(html: &str, base: &Url) -> Result<RawFixtures, FetchError> {
    let document = parse_markup(html);
    let rows = selector(ROW_HEADLINE_SELECTOR)?;
    let clubs = selector(CLUB_NAME_SELECTOR)?;
    let details = selector(DETAIL_LINK_SELECTOR)?;

    let timestamps: Vec<String> = document.select(&rows).map(text_of).collect();
    let team_names: Vec<String> = document.select(&clubs).map(text_of).collect();
    let mut detail_links = Vec::new();
    for anchor in document.select(&details) {
        let Some(href) = anchor.value().attr("href") else { continue };
        match base.join(href.trim()) {
            Ok(link) => detail_links.push(link),
            Err(e) => warn!(error = %e, href, "Skipping unresolvable detail link"),
        }
    }

    info!(
        rows = timestamps.len(),
        teams = team_names.len(),
        links = detail_links.len(),
        "Extracted match plan"
    );
    Ok(RawFixtures { timestamps, team_names, detail_links })
}

/// The next-games endpoint may answer with bare table rows. Outside a table the HTML5
/// parser drops `<tr>` and `<td>` tags, so such fragments are wrapped first.
fn parse_markup(html: &str) -> Html {
    let lower = html.to_ascii_lowercase();
    if lower.contains("<tr") && !lower.contains("<table") {
        Html::parse_document(&format!("<table>{}</table>", html))
    } else {
        Html::parse_document(html)
    }
}

fn selector(css: &'static str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|_| FetchError::Selector(css))
}

/// Element text with runs of whitespace collapsed to one space.
fn text_of(element: ElementRef<'_>) -> String {
    element.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
}
