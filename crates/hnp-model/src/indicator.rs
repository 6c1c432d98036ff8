use crate::IndicatorCode;

/// One statistical series from the series-definition feed, tracked per
/// country per year. Created once at load time, immutable thereafter.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IndicatorDefinition {
    pub code: IndicatorCode,
    /// Human-readable name shown in the series selector.
    pub name: String,
    /// Short definition text shown alongside the name. May be empty.
    pub short_definition: String,
}
