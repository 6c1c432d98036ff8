//! HNP atlas ingestion: CSV/JSON loading, row normalization, and the
//! all-or-nothing source-set barrier.

pub mod csv_ingest;
pub mod error;
pub mod map_link;
pub mod normalize;
pub mod sources;

pub use csv_ingest::{
    read_country_metadata, read_indicator_definitions, read_map_countries, read_observations,
};
pub use error::{IngestError, Result};
pub use map_link::{MapLink, link_map_countries};
pub use normalize::{
    CountryColumns, MapCountryColumns, ObservationLayout, SeriesColumns, column_index,
    normalize_country_row, normalize_map_country_row, normalize_observation_row,
    normalize_series_row,
};
pub use sources::{DataSources, LoadedSources, load_all, read_country_identities};
