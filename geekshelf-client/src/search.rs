use geekshelf_core::util::int_or_zero;
use geekshelf_core::{ItemType, SearchResult};

use crate::cancel::CancelToken;
use crate::client::BggClient;
use crate::decode::decode_xml;
use crate::error::BggError;
use crate::http::{Params, Transport};
use crate::normalize::split_names;
use crate::types::SearchItems;

const SEARCH_PATH: &str = "xmlapi2/search";

/// Options of [`BggClient::search`]. The default searches every type by
/// substring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    /// Match the name exactly instead of by substring.
    pub exact: bool,
    /// Restrict to these item types; empty means all.
    pub types: Vec<ItemType>,
}

impl SearchOptions {
    pub fn exact(mut self) -> Self {
        self.exact = true;
        self
    }

    pub fn types(mut self, types: impl IntoIterator<Item = ItemType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    fn to_params(&self, query: &str) -> Params {
        let mut params = Params::new();
        params.insert("query", query.to_string());
        if self.exact {
            params.insert("exact", "1".to_string());
        }
        if !self.types.is_empty() {
            let types: Vec<&str> = self.types.iter().map(ItemType::as_str).collect();
            params.insert("type", types.join(","));
        }
        params
    }
}

/// Decode an `xmlapi2/search` document.
pub fn decode_search(body: &[u8]) -> Result<Vec<SearchResult>, BggError> {
    let doc: SearchItems = decode_xml("search", "items", body)?;

    Ok(doc
        .items
        .into_iter()
        .map(|item| {
            let (name, alternate_names) = split_names(&item.names);
            SearchResult {
                id: int_or_zero(&item.id),
                name,
                alternate_names,
                item_type: ItemType::from_wire(&item.kind),
                year_published: item.yearpublished.int(),
            }
        })
        .collect())
}

impl<T: Transport> BggClient<T> {
    /// Search the catalogue by name.
    pub async fn search(
        &self,
        cancel: &CancelToken,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchResult>, BggError> {
        if query.trim().is_empty() {
            return Err(BggError::invalid("search", "query must not be empty"));
        }
        let response = self
            .get_ok(cancel, "search", SEARCH_PATH, &options.to_params(query))
            .await?;
        decode_search(&response.body)
    }
}
