use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::domain::interview::{experience_years, Difficulty, InterviewRecord};
use crate::services::openai_client::QuestionRewriter;

/// The interview card renders two identically-classed label rows; the first
/// is the candidate's overall experience, the second is the difficulty. This
/// is a layout assumption, not something the markup announces.
pub const DIFFICULTY_LABEL_INDEX: usize = 1;

/// Entries whose joined question text is longer than this are dropped, not
/// truncated.
pub const MAX_QUESTION_CHARS: usize = 200;

/// Why a listing entry produced no record. A skip is a filtering decision,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySkip {
    NoLocation,
    NoQuestions,
    QuestionTooLong(usize),
    Blank,
}

/// The raw fields pulled out of one interview card, before any rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub location: String,
    pub question: String,
    pub difficulty: Option<Difficulty>,
    pub created_at: Option<String>,
    pub role: Option<String>,
}

struct EntryMatchers {
    location: Selector,
    question: Selector,
    difficulty_row: Selector,
    difficulty_label: Selector,
    date: Selector,
    role: Selector,
    location_after_in: Regex,
}

impl EntryMatchers {
    fn new() -> Self {
        EntryMatchers {
            location: Selector::parse("p.interview-details__interview-details-module__userLine")
                .unwrap(),
            question: Selector::parse(
                "div[data-test='question-container'] p.truncated-text__truncated-text-module__truncate",
            )
            .unwrap(),
            difficulty_row: Selector::parse(
                "div.d-flex.flex-row.InterviewContainer__InterviewDetailsStyles__interviewExperience",
            )
            .unwrap(),
            difficulty_label: Selector::parse("span:not([class])").unwrap(),
            date: Selector::parse("span.timestamp__timestamp-module__reviewDate").unwrap(),
            role: Selector::parse("h2.header__header-module__h2").unwrap(),
            location_after_in: Regex::new(r"\bin\b\s*(.*)").unwrap(),
        }
    }
}

/// Parses every interview card out of a listing page. Each entry either
/// yields its raw fields or the reason it was skipped, in page order.
pub fn parse_listing_entries(html: &str) -> Vec<Result<ListingEntry, EntrySkip>> {
    let document = Html::parse_document(html);
    let entry_selector = Selector::parse("div[data-test^='Interview']").unwrap();
    let matchers = EntryMatchers::new();

    document
        .select(&entry_selector)
        .map(|entry| parse_entry(entry, &matchers))
        .collect()
}

fn parse_entry(entry: ElementRef, matchers: &EntryMatchers) -> Result<ListingEntry, EntrySkip> {
    // Location and questions go first; either one missing drops the entry.
    let location = entry
        .select(&matchers.location)
        .next()
        .map(|el| el.text().collect::<String>())
        .and_then(|raw| strip_location_prefix(&matchers.location_after_in, &raw))
        .ok_or(EntrySkip::NoLocation)?;

    let fragments: Vec<&str> = entry
        .select(&matchers.question)
        .flat_map(|el| el.text())
        .collect();
    if fragments.is_empty() {
        return Err(EntrySkip::NoQuestions);
    }
    let question = fragments.join(" ");
    let question_chars = question.chars().count();
    if question_chars > MAX_QUESTION_CHARS {
        return Err(EntrySkip::QuestionTooLong(question_chars));
    }

    let difficulty_rows: Vec<ElementRef> = entry.select(&matchers.difficulty_row).collect();
    let difficulty = difficulty_rows
        .get(DIFFICULTY_LABEL_INDEX)
        .and_then(|row| row.select(&matchers.difficulty_label).next())
        .map(|label| label.text().collect::<String>())
        .and_then(|label| Difficulty::from_label(&label));

    let created_at = entry
        .select(&matchers.date)
        .next()
        .map(|el| el.text().collect::<String>());
    let role = entry
        .select(&matchers.role)
        .next()
        .map(|el| el.text().collect::<String>());

    Ok(ListingEntry {
        location,
        question,
        difficulty,
        created_at,
        role,
    })
}

// The user line reads like "Software Engineer interview in Austin, TX"; only
// the text after the standalone "in" is the location.
fn strip_location_prefix(pattern: &Regex, raw: &str) -> Option<String> {
    pattern
        .captures(raw)
        .map(|captures| captures[1].to_string())
        .filter(|location| !location.is_empty())
}

/// Turns one fetched listing page into records: parse the cards, rephrase
/// each surviving question, derive experience from the role, and fill in the
/// constant fields. A rewriter failure skips that entry and keeps the rest
/// of the page.
pub async fn extract_interview_records(
    html: &str,
    company_name: &str,
    rewriter: &dyn QuestionRewriter,
) -> Vec<InterviewRecord> {
    let mut records = Vec::new();

    for parsed in parse_listing_entries(html) {
        let entry = match parsed {
            Ok(entry) => entry,
            Err(skip) => {
                log::debug!("Skipping listing entry: {:?}", skip);
                continue;
            }
        };

        let question = match rewriter.rephrase_question(&entry.question).await {
            Ok(question) => question,
            Err(e) => {
                log::error!("Failed to rephrase a question, skipping the entry: {}", e);
                continue;
            }
        };

        let experience = experience_years(entry.role.as_deref().unwrap_or(""));
        let record = InterviewRecord::new(
            question,
            entry.location,
            entry.role,
            entry.difficulty,
            entry.created_at,
            experience,
            company_name,
        );

        if record.is_blank() {
            log::debug!("Skipping listing entry: {:?}", EntrySkip::Blank);
            continue;
        }
        records.push(record);
    }

    records
}
