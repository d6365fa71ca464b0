mod fetch;
mod parse;

pub use fetch::{CatalogQuery, catalog_url, fetch_catalog};
pub use parse::{Catalog, RawDuration, RawEpisode, RawFile, parse_catalog};
