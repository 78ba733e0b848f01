use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{
    Array, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray, StringArray,
};
use arrow::datatypes::DataType;
use geojson::GeoJson;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{
    KEY_COLUMNS, QUARTER, REPORT_TYPE, ReportRecord, ReportTable, ReportType, STATE_NAME,
    TableKind, YEAR,
};
use crate::boundaries::GeoFeature;
use crate::config::DataConfig;
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Datasets – everything the dashboard reads at startup
// ---------------------------------------------------------------------------

/// The four report tables and the state boundaries, read-only once loaded.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub boundaries: Vec<GeoFeature>,
    pub continental: ReportTable,
    pub fraud: ReportTable,
    pub median_losses: ReportTable,
    pub total_losses: ReportTable,
}

impl Datasets {
    /// Load every input named by `config`. Any failure is fatal.
    pub fn load(config: &DataConfig) -> Result<Self> {
        let boundaries_path = config.boundaries_path();
        let boundaries = load_boundaries(&boundaries_path)
            .with_context(|| format!("loading boundaries from {}", boundaries_path.display()))?;
        log::info!("Loaded {} state boundaries", boundaries.len());

        let load = |kind: TableKind| -> Result<ReportTable> {
            let path = config.table_path(kind);
            let table = load_table(&path, kind)
                .with_context(|| format!("loading {} table from {}", kind.label(), path.display()))?;
            log::info!(
                "Loaded {} table: {} rows, {} years, {} states",
                kind.label(),
                table.len(),
                table.years.len(),
                table.states.len()
            );
            Ok(table)
        };

        Ok(Datasets {
            boundaries,
            continental: load(TableKind::Continental)?,
            fraud: load(TableKind::Fraud)?,
            median_losses: load(TableKind::MedianLosses)?,
            total_losses: load(TableKind::TotalLosses)?,
        })
    }

    pub fn table(&self, kind: TableKind) -> &ReportTable {
        match kind {
            TableKind::Continental => &self.continental,
            TableKind::Fraud => &self.fraud,
            TableKind::MedianLosses => &self.median_losses,
            TableKind::TotalLosses => &self.total_losses,
        }
    }
}

// ---------------------------------------------------------------------------
// Report tables
// ---------------------------------------------------------------------------

/// Load a report table and validate it against `kind`'s schema.
///
/// Supported formats, dispatched by extension:
/// * `.csv`             – header row with the source column names
/// * `.parquet` / `.pq` – one column per source column
pub fn load_table(path: &Path, kind: TableKind) -> Result<ReportTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path, kind)?,
        "parquet" | "pq" => load_parquet(path, kind)?,
        other => {
            return Err(DataError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: other.to_string(),
            }
            .into());
        }
    };

    if records.is_empty() {
        return Err(DataError::EmptyTable {
            path: path.to_path_buf(),
        }
        .into());
    }

    Ok(ReportTable::from_records(kind, records))
}

/// Column names `kind` requires, key columns first.
fn required_columns(kind: TableKind) -> Vec<&'static str> {
    KEY_COLUMNS
        .iter()
        .copied()
        .chain(kind.measures().iter().map(|m| m.column()))
        .collect()
}

/// Tokens `pandas.read_csv` reads as missing by default.
const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// -- One raw cell, independent of the file format --

#[derive(Debug, Clone, Copy)]
enum Cell<'a> {
    Empty,
    Text(&'a str),
    Int(i64),
    Float(f64),
}

impl Cell<'_> {
    fn as_integer(self) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(i),
            Cell::Float(f) if f.fract() == 0.0 => Some(f as i64),
            Cell::Text(t) => {
                let t = t.trim();
                t.parse::<i64>().ok().or_else(|| {
                    t.parse::<f64>()
                        .ok()
                        .filter(|f| f.fract() == 0.0)
                        .map(|f| f as i64)
                })
            }
            _ => None,
        }
    }

    /// `Some(None)` for a missing value (empty, NA token, non-finite),
    /// `None` for an unparsable one.
    fn as_measure(self) -> Option<Option<f64>> {
        match self {
            Cell::Empty => Some(None),
            Cell::Int(i) => Some(Some(i as f64)),
            Cell::Float(f) => Some(Some(f).filter(|v| v.is_finite())),
            Cell::Text(t) => {
                let t = t.trim();
                if t.is_empty() || NA_TOKENS.contains(&t) {
                    return Some(None);
                }
                t.parse::<f64>().ok().map(|v| Some(v).filter(|v| v.is_finite()))
            }
        }
    }

    fn display(self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(t) => t.to_string(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => f.to_string(),
        }
    }
}

/// Build one typed record, reading cells by column name.
fn build_record<'a>(
    path: &Path,
    row: usize,
    kind: TableKind,
    cell: impl Fn(&str) -> Cell<'a>,
) -> Result<ReportRecord, DataError> {
    let invalid = |column: &str| DataError::InvalidCell {
        path: path.to_path_buf(),
        row,
        column: column.to_string(),
        value: cell(column).display(),
    };

    let year = cell(YEAR)
        .as_integer()
        .and_then(|y| i32::try_from(y).ok())
        .ok_or_else(|| invalid(YEAR))?;
    let quarter = cell(QUARTER)
        .as_integer()
        .filter(|q| (1..=4).contains(q))
        .ok_or_else(|| invalid(QUARTER))? as u8;
    let state_name = match cell(STATE_NAME) {
        Cell::Text(t) if !t.trim().is_empty() => t.trim().to_string(),
        _ => return Err(invalid(STATE_NAME)),
    };
    let report_type = match cell(REPORT_TYPE) {
        Cell::Text(t) => t.parse::<ReportType>().map_err(|_| invalid(REPORT_TYPE))?,
        _ => return Err(invalid(REPORT_TYPE)),
    };

    let mut record = ReportRecord::new(year, quarter, state_name, report_type);
    for &measure in kind.measures() {
        let column = measure.column();
        if let Some(value) = cell(column).as_measure().ok_or_else(|| invalid(column))? {
            record.measures.insert(measure, value);
        }
    }
    Ok(record)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path, kind: TableKind) -> Result<Vec<ReportRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut positions: HashMap<&'static str, usize> = HashMap::new();
    for column in required_columns(kind) {
        let idx = headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| DataError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            })?;
        positions.insert(column, idx);
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = row_no + 1;
        let record = result.with_context(|| format!("CSV row {row}"))?;
        let cell = |column: &str| match positions.get(column).and_then(|&i| record.get(i)) {
            Some(text) if !text.trim().is_empty() => Cell::Text(text),
            _ => Cell::Empty,
        };
        records.push(build_record(path, row, kind, cell)?);
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet report table. Key and measure columns may be stored as
/// integers, floats or strings (as written by Pandas or Polars).
fn load_parquet(path: &Path, kind: TableKind) -> Result<Vec<ReportRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;

    let columns = required_columns(kind);
    for column in &columns {
        if builder.schema().index_of(column).is_err() {
            return Err(DataError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            }
            .into());
        }
    }

    let reader = builder.build().context("building parquet reader")?;
    let mut records = Vec::new();
    let mut row = 0;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let mut arrays: HashMap<&str, &Arc<dyn Array>> = HashMap::new();
        for column in &columns {
            let idx = schema.index_of(column).map_err(|_| DataError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            })?;
            arrays.insert(*column, batch.column(idx));
        }

        for batch_row in 0..batch.num_rows() {
            row += 1;
            let cell = |column: &str| {
                arrays
                    .get(column)
                    .map_or(Cell::Empty, |array| arrow_cell(array, batch_row))
            };
            records.push(build_record(path, row, kind, cell)?);
        }
    }

    Ok(records)
}

/// Read a single cell from an Arrow column.
fn arrow_cell(col: &Arc<dyn Array>, row: usize) -> Cell<'_> {
    if col.is_null(row) {
        return Cell::Empty;
    }
    let any = col.as_any();
    match col.data_type() {
        DataType::Utf8 => any
            .downcast_ref::<StringArray>()
            .map_or(Cell::Empty, |s| Cell::Text(s.value(row))),
        DataType::LargeUtf8 => any
            .downcast_ref::<LargeStringArray>()
            .map_or(Cell::Empty, |s| Cell::Text(s.value(row))),
        DataType::Int32 => any
            .downcast_ref::<Int32Array>()
            .map_or(Cell::Empty, |a| Cell::Int(i64::from(a.value(row)))),
        DataType::Int64 => any
            .downcast_ref::<Int64Array>()
            .map_or(Cell::Empty, |a| Cell::Int(a.value(row))),
        DataType::Float32 => any
            .downcast_ref::<Float32Array>()
            .map_or(Cell::Empty, |a| Cell::Float(f64::from(a.value(row)))),
        DataType::Float64 => any
            .downcast_ref::<Float64Array>()
            .map_or(Cell::Empty, |a| Cell::Float(a.value(row))),
        other => {
            log::warn!("Unsupported parquet column type {other:?}, treating cell as empty");
            Cell::Empty
        }
    }
}

// ---------------------------------------------------------------------------
// Boundary loader
// ---------------------------------------------------------------------------

/// Load state boundaries from a GeoJSON FeatureCollection.
///
/// Features are keyed by `properties.name`. Features without a name or with
/// non-areal geometry are skipped.
pub fn load_boundaries(path: &Path) -> Result<Vec<GeoFeature>> {
    let text = std::fs::read_to_string(path).context("reading GeoJSON file")?;
    let geojson: GeoJson = text.parse().context("parsing GeoJSON")?;

    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(DataError::NotAFeatureCollection {
            path: path.to_path_buf(),
        }
        .into());
    };

    let mut features = Vec::with_capacity(collection.features.len());
    for (i, feature) in collection.features.into_iter().enumerate() {
        let Some(name) = feature
            .property("name")
            .and_then(|v| v.as_str())
            .map(str::to_string)
        else {
            log::warn!("Feature {i} has no 'name' property, skipping");
            continue;
        };

        let Some(geometry) = feature.geometry else {
            log::warn!("Feature '{name}' has no geometry, skipping");
            continue;
        };

        let geometry: geo::Geometry<f64> = match geometry.try_into() {
            Ok(g) => g,
            Err(e) => {
                log::warn!("Feature '{name}' has invalid geometry ({e}), skipping");
                continue;
            }
        };

        let geometry = match geometry {
            geo::Geometry::MultiPolygon(mp) => mp,
            geo::Geometry::Polygon(p) => geo::MultiPolygon::new(vec![p]),
            _ => {
                log::warn!("Feature '{name}' is not a polygon, skipping");
                continue;
            }
        };

        features.push(GeoFeature { name, geometry });
    }

    if features.is_empty() {
        return Err(DataError::NoFeatures {
            path: path.to_path_buf(),
        }
        .into());
    }

    Ok(features)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::boundaries::tests::rect;
    use crate::data::model::Measure;
    use std::fs;

    /// In-memory datasets mirroring a tiny slice of the FTC export.
    pub(crate) fn sample_datasets() -> Datasets {
        let continental = |state: &str, rt: ReportType, pop: f64, rate: f64, total: f64| {
            ReportRecord::new(2023, 1, state, rt)
                .with(Measure::StatePop, pop)
                .with(Measure::ReportsPer100k, rate)
                .with(Measure::StateTotalReportsQuarter, total)
        };
        let count = |year: i32, quarter: u8, state: &str, rt: ReportType, n: f64| {
            ReportRecord::new(year, quarter, state, rt).with(Measure::StateFraudOtherCount, n)
        };

        Datasets {
            boundaries: vec![
                rect("Ohio", 0.0, 0.0, 1.0, 1.0),
                rect("Texas", 2.0, 0.0, 4.0, 2.0),
                rect("Puerto Rico", 5.0, 0.0, 6.0, 1.0),
            ],
            continental: ReportTable::from_records(
                TableKind::Continental,
                vec![
                    continental("Ohio", ReportType::Fraud, 11_785_935.0, 120.4, 14_200.0),
                    continental("Ohio", ReportType::Other, 11_785_935.0, 120.4, 14_200.0),
                    continental("Texas", ReportType::Fraud, 30_029_572.0, 95.6, 28_700.0),
                    ReportRecord::new(2022, 4, "Nevada", ReportType::Fraud)
                        .with(Measure::StatePop, 3_177_772.0)
                        .with(Measure::ReportsPer100k, 140.0)
                        .with(Measure::StateTotalReportsQuarter, 4_450.0),
                ],
            ),
            fraud: ReportTable::from_records(
                TableKind::Fraud,
                vec![
                    count(2023, 1, "Ohio", ReportType::Fraud, 150.0),
                    count(2023, 1, "Ohio", ReportType::Fraud, 150.0),
                    count(2023, 1, "Ohio", ReportType::Other, 60.0),
                    count(2023, 1, "Texas", ReportType::Fraud, 1_250.0),
                ],
            ),
            median_losses: ReportTable::from_records(
                TableKind::MedianLosses,
                vec![ReportRecord::new(2023, 1, "Ohio", ReportType::Fraud)
                    .with(Measure::OverallMedianLossesYr, 500.0)],
            ),
            total_losses: ReportTable::from_records(
                TableKind::TotalLosses,
                vec![
                    ReportRecord::new(2023, 1, "Ohio", ReportType::Fraud)
                        .with(Measure::TotalLosses, 1_000_000.0),
                    ReportRecord::new(2023, 1, "Texas", ReportType::Fraud)
                        .with(Measure::TotalLosses, 2_500_000.0),
                ],
            ),
        }
    }

    const BOUNDARIES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"name": "Ohio"},
             "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,1],[0,0]]]}},
            {"type": "Feature", "properties": {"name": "Hawaii"},
             "geometry": {"type": "MultiPolygon", "coordinates": [[[[5,5],[6,5],[6,6],[5,5]]], [[[7,7],[8,7],[8,8],[7,7]]]]}},
            {"type": "Feature", "properties": {"name": "Capital"},
             "geometry": {"type": "Point", "coordinates": [0.5, 0.5]}},
            {"type": "Feature", "properties": {},
             "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}}
        ]
    }"#;

    #[test]
    fn loads_csv_table_with_extra_columns_and_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fraud.csv");
        fs::write(
            &path,
            "Year,Quarter,State Name,Report Type,State Fraud/Other Count,Notes\n\
             2023,1,Ohio,Fraud,150,x\n\
             2023,1,Ohio,Fraud,150,x\n\
             2023,2,Texas,Other,,y\n",
        )
        .unwrap();

        let table = load_table(&path, TableKind::Fraud).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.records[0].measure(Measure::StateFraudOtherCount), Some(150.0));
        assert_eq!(table.records[2].measure(Measure::StateFraudOtherCount), None);
        assert_eq!(table.records[2].report_type, ReportType::Other);
        assert_eq!(table.years_descending(), vec![2023]);
    }

    #[test]
    fn nan_and_na_cells_load_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("losses.csv");
        fs::write(
            &path,
            "Year,Quarter,State Name,Report Type,Total Losses\n\
             2023,1,Ohio,Fraud,100\n\
             2023,1,Iowa,Fraud,NaN\n\
             2023,1,Utah,Fraud,N/A\n\
             2023,1,Maine,Fraud,#N/A\n\
             2023,1,Idaho,Fraud,inf\n",
        )
        .unwrap();

        let table = load_table(&path, TableKind::TotalLosses).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.records[0].measure(Measure::TotalLosses), Some(100.0));
        assert!(table.records[1..].iter().all(|r| r.measure(Measure::TotalLosses).is_none()));

        let sum = crate::data::aggregate::aggregate(
            &table.records,
            Measure::TotalLosses,
            crate::data::aggregate::AggregateMode::Sum,
        );
        assert_eq!(crate::data::aggregate::MetricFormat::Currency.format_result(&sum), "$100");
    }

    #[test]
    fn all_missing_mean_is_not_available() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("median.csv");
        fs::write(
            &path,
            "Year,Quarter,State Name,Report Type,Overall Median Losses Yr\n2023,1,Ohio,Fraud,NaN\n",
        )
        .unwrap();

        let table = load_table(&path, TableKind::MedianLosses).unwrap();
        let mean = crate::data::aggregate::aggregate(
            &table.records,
            Measure::OverallMedianLossesYr,
            crate::data::aggregate::AggregateMode::Mean,
        );
        assert_eq!(crate::data::aggregate::MetricFormat::Currency.format_result(&mean), "N/A");
    }

    #[test]
    fn missing_measure_column_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("losses.csv");
        fs::write(&path, "Year,Quarter,State Name,Report Type\n2023,1,Ohio,Fraud\n").unwrap();

        let err = load_table(&path, TableKind::TotalLosses).unwrap_err();
        match err.downcast_ref::<DataError>() {
            Some(DataError::MissingColumn { column, .. }) => assert_eq!(column, "Total Losses"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_quarter_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("median.csv");
        fs::write(
            &path,
            "Year,Quarter,State Name,Report Type,Overall Median Losses Yr\n2023,5,Ohio,Fraud,500\n",
        )
        .unwrap();

        let err = load_table(&path, TableKind::MedianLosses).unwrap_err();
        match err.downcast_ref::<DataError>() {
            Some(DataError::InvalidCell { row, column, value, .. }) => {
                assert_eq!(*row, 1);
                assert_eq!(column, "Quarter");
                assert_eq!(value, "5");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_report_type_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fraud.csv");
        fs::write(
            &path,
            "Year,Quarter,State Name,Report Type,State Fraud/Other Count\n2023,1,Ohio,Scam,1\n",
        )
        .unwrap();

        assert!(load_table(&path, TableKind::Fraud).is_err());
    }

    #[test]
    fn header_only_table_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fraud.csv");
        fs::write(&path, "Year,Quarter,State Name,Report Type,State Fraud/Other Count\n").unwrap();

        let err = load_table(&path, TableKind::Fraud).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::EmptyTable { .. })
        ));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_table(Path::new("table.xlsx"), TableKind::Fraud).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn loads_parquet_table() {
        use arrow::datatypes::{Field, Schema};
        use arrow::record_batch::RecordBatch;
        use parquet::arrow::ArrowWriter;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("losses.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new(YEAR, DataType::Int64, false),
            Field::new(QUARTER, DataType::Int32, false),
            Field::new(STATE_NAME, DataType::Utf8, false),
            Field::new(REPORT_TYPE, DataType::Utf8, false),
            Field::new("Total Losses", DataType::Float64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Int64Array::from(vec![2023, 2023, 2023])),
                Arc::new(Int32Array::from(vec![1, 2, 3])),
                Arc::new(StringArray::from(vec!["Ohio", "Texas", "Utah"])),
                Arc::new(StringArray::from(vec!["Fraud", "Other", "Fraud"])),
                Arc::new(Float64Array::from(vec![Some(1_000.5), None, Some(f64::NAN)])),
            ],
        )
        .unwrap();
        let file = fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let table = load_table(&path, TableKind::TotalLosses).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.records[0].measure(Measure::TotalLosses), Some(1_000.5));
        assert_eq!(table.records[1].quarter, 2);
        assert_eq!(table.records[1].measure(Measure::TotalLosses), None);
        assert_eq!(table.records[2].measure(Measure::TotalLosses), None);
    }

    #[test]
    fn loads_polygon_features_and_skips_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("states.geojson");
        fs::write(&path, BOUNDARIES).unwrap();

        let features = load_boundaries(&path).unwrap();
        let names: Vec<_> = features.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Ohio", "Hawaii"]);
        assert_eq!(features[1].geometry.0.len(), 2);
    }

    #[test]
    fn bare_geometry_is_not_a_boundary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("states.geojson");
        fs::write(&path, r#"{"type": "Point", "coordinates": [0, 0]}"#).unwrap();

        let err = load_boundaries(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::NotAFeatureCollection { .. })
        ));
    }

    #[test]
    fn missing_input_file_fails_the_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("us-state-boundaries.geojson"), BOUNDARIES).unwrap();

        let config = DataConfig::with_data_dir(dir.path());
        let err = Datasets::load(&config).unwrap_err();
        assert!(format!("{err:#}").contains("continental"));
    }
}
