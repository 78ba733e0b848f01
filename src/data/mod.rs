/// Data layer: typed report tables, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .parquet            .geojson
///        │                        │
///        ▼                        ▼
///   ┌──────────┐   ┌──────────────────────┐
///   │  loader   │  │ loader::load_boundaries│
///   └──────────┘   └──────────────────────┘
///        │                        │
///        ▼                        ▼
///   ┌─────────────┐        Vec<GeoFeature>
///   │ ReportTable  │  typed rows, year/state domains
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  period / type / state predicate → deduplicated rows
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  SUM / MEAN → formatted metric
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
