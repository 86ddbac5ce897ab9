use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub scraper: ScraperSettings,
    pub api_keys: ApiKeySettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ScraperSettings {
    pub suggest_url: String,
    pub listing_base_url: String,
    pub input_csv: String,
    pub output_csv: String,
    pub names_csv: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub num_pages: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub min_page_delay_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_page_delay_secs: u64,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApiKeySettings {
    pub openai: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
