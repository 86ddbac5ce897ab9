/// A company name resolved through the typeahead endpoint, together with the
/// numeric employer id Glassdoor uses in listing URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCompany {
    pub name: String,
    pub employer_id: String,
}
