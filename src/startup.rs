use std::path::Path;

use anyhow::Context;

use crate::configuration::Settings;
use crate::domain::interview::InterviewRecord;
use crate::services::company_resolver::resolve_company;
use crate::services::csv_io;
use crate::services::interview_scraper::scrape_interview_pages;
use crate::services::openai_client::QuestionRewriter;
use crate::services::site_client::ListingSite;

pub struct RunSummary {
    pub companies: usize,
    pub resolved: usize,
    pub records: usize,
}

/// Drives the whole batch: resolve each input company, paginate its
/// listings, fill in solutions, and write the union of all records.
///
/// Failures are isolated per company; a company that cannot be resolved is
/// logged and skipped. The run as a whole only fails when the input was
/// non-empty and not a single company resolved.
pub async fn run(
    settings: &Settings,
    site: &dyn ListingSite,
    rewriter: &dyn QuestionRewriter,
) -> anyhow::Result<RunSummary> {
    let company_names = csv_io::read_company_names(Path::new(&settings.scraper.input_csv))
        .context("Failed to read company names from the input file")?;

    let mut all_records: Vec<InterviewRecord> = Vec::new();
    let mut resolved = 0usize;

    for name in &company_names {
        log::info!("Processing company: {}", name);

        let company = match resolve_company(site, name).await {
            Ok(company) => company,
            Err(e) => {
                log::error!("Error processing {}: {}", name, e);
                continue;
            }
        };
        resolved += 1;

        let mut records =
            scrape_interview_pages(site, rewriter, &company, &settings.scraper).await;

        // Solution-fill pass. A rewriter failure leaves that one record's
        // solution empty instead of aborting the batch.
        for record in records.iter_mut() {
            if record.question.is_empty() {
                continue;
            }
            match rewriter.answer_guidance(&record.question, &company.name).await {
                Ok(solution) => record.solution = solution,
                Err(e) => {
                    log::error!("Failed to generate a solution for {}: {}", company.name, e);
                }
            }
        }

        all_records.append(&mut records);
    }

    if !company_names.is_empty() && resolved == 0 {
        anyhow::bail!(
            "None of the {} input companies could be resolved",
            company_names.len()
        );
    }

    csv_io::write_interview_records(Path::new(&settings.scraper.output_csv), &all_records)
        .context("Failed to write the output file")?;

    Ok(RunSummary {
        companies: company_names.len(),
        resolved,
        records: all_records.len(),
    })
}
