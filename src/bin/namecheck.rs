use std::path::Path;

use env_logger::Env;
use quarry::{
    configuration::get_configuration,
    services::{company_resolver::resolve_company, csv_io, GlassdoorClient},
};

/// Resolves every input company name through the typeahead endpoint and
/// writes the canonical names to the names-only output table.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let site = GlassdoorClient::new(&configuration.scraper);

    let names = csv_io::read_company_names(Path::new(&configuration.scraper.input_csv))?;

    let mut resolved_names = Vec::new();
    for name in &names {
        log::info!("Processing company: {}", name);
        match resolve_company(&site, name).await {
            Ok(company) => {
                log::info!("Processed company name: {}", company.name);
                resolved_names.push(company.name);
            }
            Err(e) => log::error!("Error processing {}: {}", name, e),
        }
    }

    csv_io::write_company_names(
        Path::new(&configuration.scraper.names_csv),
        &resolved_names,
    )?;
    log::info!(
        "Wrote {} resolved company names to {}",
        resolved_names.len(),
        configuration.scraper.names_csv
    );
    Ok(())
}
