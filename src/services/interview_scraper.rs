use std::time::Duration;

use rand::Rng;

use crate::configuration::ScraperSettings;
use crate::domain::company::ResolvedCompany;
use crate::domain::interview::InterviewRecord;
use crate::services::openai_client::QuestionRewriter;
use crate::services::page_parser::extract_interview_records;
use crate::services::site_client::ListingSite;

/// Builds the listing URL for one page. The first page carries no page
/// suffix; later pages use the `_P<n>` convention.
pub fn listing_url(base_url: &str, company: &ResolvedCompany, page: u32) -> String {
    let stem = format!(
        "{}/{}-Interview-Questions-E{}",
        base_url, company.name, company.employer_id
    );
    if page <= 1 {
        format!("{}.htm", stem)
    } else {
        format!("{}_P{}.htm", stem, page)
    }
}

/// Fetches pages 1..=num_pages for a resolved company and concatenates the
/// extracted records in page order. A failed or non-200 page is logged and
/// contributes zero records; every page is still attempted.
pub async fn scrape_interview_pages(
    site: &dyn ListingSite,
    rewriter: &dyn QuestionRewriter,
    company: &ResolvedCompany,
    settings: &ScraperSettings,
) -> Vec<InterviewRecord> {
    let mut records = Vec::new();

    for page in 1..=settings.num_pages {
        let url = listing_url(&settings.listing_base_url, company, page);
        match site.listing_page(&url).await {
            Ok(fetched) if fetched.status == 200 => {
                let mut page_records =
                    extract_interview_records(&fetched.body, &company.name, rewriter).await;
                log::info!(
                    "Page {} of {}: extracted {} interview records",
                    page,
                    company.name,
                    page_records.len()
                );
                records.append(&mut page_records);
            }
            Ok(fetched) => {
                log::error!("Failed to fetch {}, status code: {}", url, fetched.status);
            }
            Err(e) => {
                log::error!("Failed to fetch {}: {}", url, e);
            }
        }

        pause_between_pages(settings).await;
    }

    records
}

// Crude politeness delay between page fetches, not a backoff.
async fn pause_between_pages(settings: &ScraperSettings) {
    let delay = rand::thread_rng()
        .gen_range(settings.min_page_delay_secs..=settings.max_page_delay_secs);
    if delay > 0 {
        tokio::time::sleep(Duration::from_secs(delay)).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::{listing_url, scrape_interview_pages};
    use crate::configuration::ScraperSettings;
    use crate::domain::company::ResolvedCompany;
    use crate::services::openai_client::{QuestionRewriter, RewriteError};
    use crate::services::site_client::{FetchError, FetchedPage, ListingSite};

    fn acme() -> ResolvedCompany {
        ResolvedCompany {
            name: "Acme Corp".to_string(),
            employer_id: "12345".to_string(),
        }
    }

    fn settings(num_pages: u32) -> ScraperSettings {
        ScraperSettings {
            suggest_url: "http://localhost/typeahead".to_string(),
            listing_base_url: "http://localhost/Interview".to_string(),
            input_csv: "companies.csv".to_string(),
            output_csv: "out.csv".to_string(),
            names_csv: "names.csv".to_string(),
            num_pages,
            min_page_delay_secs: 0,
            max_page_delay_secs: 0,
        }
    }

    struct CountingSite {
        fetches: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl ListingSite for CountingSite {
        async fn typeahead(&self, _input: &str) -> Result<FetchedPage, FetchError> {
            unimplemented!("the pagination driver never resolves names")
        }

        async fn listing_page(&self, _url: &str) -> Result<FetchedPage, FetchError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(FetchedPage {
                status: 404,
                body: String::new(),
            })
        }
    }

    struct EchoRewriter;

    #[async_trait::async_trait]
    impl QuestionRewriter for EchoRewriter {
        async fn rephrase_question(&self, question: &str) -> Result<String, RewriteError> {
            Ok(question.to_string())
        }

        async fn answer_guidance(
            &self,
            _question: &str,
            _company_name: &str,
        ) -> Result<String, RewriteError> {
            Ok(String::new())
        }
    }

    #[test]
    fn first_page_has_no_suffix() {
        assert_eq!(
            listing_url("https://www.glassdoor.com/Interview", &acme(), 1),
            "https://www.glassdoor.com/Interview/Acme Corp-Interview-Questions-E12345.htm"
        );
    }

    #[test]
    fn later_pages_use_the_p_suffix() {
        assert_eq!(
            listing_url("https://www.glassdoor.com/Interview", &acme(), 3),
            "https://www.glassdoor.com/Interview/Acme Corp-Interview-Questions-E12345_P3.htm"
        );
    }

    #[tokio::test]
    async fn every_page_is_attempted_even_when_all_fail() {
        let site = CountingSite {
            fetches: AtomicUsize::new(0),
        };

        let records = scrape_interview_pages(&site, &EchoRewriter, &acme(), &settings(5)).await;

        assert!(records.is_empty());
        assert_eq!(site.fetches.load(Ordering::SeqCst), 5);
    }
}
