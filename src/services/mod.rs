pub mod company_resolver;
pub mod csv_io;
pub mod interview_scraper;
pub mod openai_client;
pub mod page_parser;
pub mod site_client;

pub use company_resolver::*;
pub use interview_scraper::*;
pub use openai_client::*;
pub use page_parser::*;
pub use site_client::*;
