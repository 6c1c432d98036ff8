//! Typed records for the HNP atlas: indicator definitions, country
//! metadata, geographic identities, and per-country observation rows.

pub mod country;
pub mod error;
pub mod identity;
pub mod ids;
pub mod indicator;
pub mod map_country;
pub mod observation;
pub mod year;

pub use country::{CountryMetadata, CountryTable};
pub use error::ModelError;
pub use identity::{CountryIdentity, IdentityTable};
pub use ids::{CountryCode, IndicatorCode};
pub use indicator::IndicatorDefinition;
pub use map_country::MapCountryRow;
pub use observation::ObservationRow;
pub use year::{Year, YearRange};
