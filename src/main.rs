use env_logger::Env;
use quarry::{
    configuration::get_configuration,
    services::{GlassdoorClient, OpenaiClient},
    startup::run,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let site = GlassdoorClient::new(&configuration.scraper);
    let rewriter = OpenaiClient::new(configuration.api_keys.openai.clone());

    let summary = run(&configuration, &site, &rewriter).await?;

    log::info!(
        "Web scraping completed: {} records from {} of {} companies",
        summary.records,
        summary.resolved,
        summary.companies
    );
    Ok(())
}
