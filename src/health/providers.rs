use crate::health::dataset::HealthDataSource;
use crate::health::types::{Provider, ProviderQuery};
use crate::health::validation::optional_filter;

/// Filter providers by name substring (case-insensitive) and exact ZIP code.
///
/// Both filters are ANDed; with neither, every provider is returned. The
/// result keeps listing order and may be empty.
pub fn search_providers(source: &dyn HealthDataSource, query: &ProviderQuery) -> Vec<Provider> {
    let name = optional_filter(query.provider_name.as_deref()).map(str::to_lowercase);
    let zip_code = optional_filter(query.zip_code.as_deref());

    source
        .providers()
        .into_iter()
        .filter(|provider| match &name {
            Some(name) => provider.name.to_lowercase().contains(name.as_str()),
            None => true,
        })
        .filter(|provider| match zip_code {
            Some(zip_code) => provider.zip_code == zip_code,
            None => true,
        })
        .collect()
}
