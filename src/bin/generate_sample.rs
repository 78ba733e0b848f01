//! Writes a small synthetic FTC-style dataset so the dashboard can be
//! launched without the real export:
//!
//! ```text
//! cargo run --bin generate_sample -- sample_data
//! cargo run -- --data-dir sample_data
//! ```

use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde_json::json;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// (name, population, west, south, east, north) – boxes, not real borders.
const STATES: [(&str, f64, f64, f64, f64, f64); 10] = [
    ("Washington", 7_785_786.0, -124.7, 45.5, -116.9, 49.0),
    ("California", 39_029_342.0, -124.4, 32.5, -114.1, 42.0),
    ("Nevada", 3_177_772.0, -120.0, 35.0, -114.0, 42.0),
    ("Texas", 30_029_572.0, -106.6, 25.8, -93.5, 36.5),
    ("Colorado", 5_839_926.0, -109.1, 37.0, -102.0, 41.0),
    ("Illinois", 12_582_032.0, -91.5, 37.0, -87.5, 42.5),
    ("Ohio", 11_756_058.0, -84.8, 38.4, -80.5, 42.0),
    ("Georgia", 10_912_876.0, -85.6, 30.4, -80.8, 35.0),
    ("New York", 19_677_151.0, -79.8, 40.5, -71.8, 45.0),
    ("Florida", 22_244_823.0, -87.6, 24.5, -80.0, 31.0),
];

const YEARS: [i64; 2] = [2022, 2023];
const REPORT_TYPES: [&str; 2] = ["Fraud", "Other"];

struct Row {
    year: i64,
    quarter: i64,
    state: &'static str,
    report_type: &'static str,
    values: Vec<f64>,
}

fn main() {
    let out_dir = std::env::args().nth(1).unwrap_or_else(|| "sample_data".to_string());
    let out_dir = Path::new(&out_dir);
    std::fs::create_dir_all(out_dir).expect("Failed to create output directory");

    let mut rng = SimpleRng::new(42);

    let mut continental = Vec::new();
    let mut fraud = Vec::new();
    let mut median = Vec::new();
    let mut losses = Vec::new();

    for &year in &YEARS {
        for quarter in 1..=4 {
            for &(state, pop, ..) in &STATES {
                let per_100k = rng.range(80.0, 180.0);
                let total_reports = (pop / 100_000.0 * per_100k).round();
                for report_type in REPORT_TYPES {
                    let share = if report_type == "Fraud" { 0.62 } else { 0.38 };
                    continental.push(Row {
                        year,
                        quarter,
                        state,
                        report_type,
                        values: vec![total_reports, pop, per_100k],
                    });
                    fraud.push(Row {
                        year,
                        quarter,
                        state,
                        report_type,
                        values: vec![(total_reports * share).round()],
                    });
                    median.push(Row {
                        year,
                        quarter,
                        state,
                        report_type,
                        values: vec![rng.range(300.0, 900.0).round()],
                    });
                    losses.push(Row {
                        year,
                        quarter,
                        state,
                        report_type,
                        values: vec![(total_reports * share * rng.range(500.0, 2_500.0)).round()],
                    });
                }
            }
        }
    }

    // The real export repeats rows; make sure the sample does too.
    for table in [&mut fraud, &mut losses] {
        let repeated: Vec<Row> = table
            .iter()
            .step_by(7)
            .map(|r| Row {
                year: r.year,
                quarter: r.quarter,
                state: r.state,
                report_type: r.report_type,
                values: r.values.clone(),
            })
            .collect();
        table.extend(repeated);
    }

    write_csv(
        &out_dir.join("AxS-Continental_Full Data_data.csv"),
        &["State Total Reports Quarter", "State Pop", "Reports per 100K-F&O together"],
        &continental,
    );
    write_csv(
        &out_dir.join("AxS-Fraud Box_Full Data_data.csv"),
        &["State Fraud/Other Count"],
        &fraud,
    );
    write_csv(
        &out_dir.join("AxS-Median Box_Full Data_data.csv"),
        &["Overall Median Losses Yr"],
        &median,
    );
    write_csv(
        &out_dir.join("AxS-Losses Box_Full Data_data.csv"),
        &["Total Losses"],
        &losses,
    );
    write_parquet(
        &out_dir.join("AxS-Losses Box_Full Data_data.parquet"),
        "Total Losses",
        &losses,
    );
    write_boundaries(&out_dir.join("us-state-boundaries.geojson"));

    println!(
        "Wrote {} continental rows for {} states to {}",
        continental.len(),
        STATES.len(),
        out_dir.display()
    );
}

fn write_csv(path: &Path, measures: &[&str], rows: &[Row]) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create CSV file");
    let mut header = vec!["Year", "Quarter", "State Name", "Report Type"];
    header.extend_from_slice(measures);
    writer.write_record(&header).expect("Failed to write CSV header");

    for row in rows {
        let mut record = vec![
            row.year.to_string(),
            row.quarter.to_string(),
            row.state.to_string(),
            row.report_type.to_string(),
        ];
        record.extend(row.values.iter().map(|v| v.to_string()));
        writer.write_record(&record).expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV file");
}

fn write_parquet(path: &Path, measure: &str, rows: &[Row]) {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Year", DataType::Int64, false),
        Field::new("Quarter", DataType::Int64, false),
        Field::new("State Name", DataType::Utf8, false),
        Field::new("Report Type", DataType::Utf8, false),
        Field::new(measure, DataType::Float64, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(rows.iter().map(|r| r.year).collect::<Vec<_>>())),
            Arc::new(Int64Array::from(rows.iter().map(|r| r.quarter).collect::<Vec<_>>())),
            Arc::new(StringArray::from(rows.iter().map(|r| r.state).collect::<Vec<_>>())),
            Arc::new(StringArray::from(
                rows.iter().map(|r| r.report_type).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                rows.iter().map(|r| r.values[0]).collect::<Vec<_>>(),
            )),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}

fn write_boundaries(path: &Path) {
    let features: Vec<_> = STATES
        .iter()
        .map(|&(name, _, w, s, e, n)| {
            json!({
                "type": "Feature",
                "properties": { "name": name },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[w, s], [e, s], [e, n], [w, n], [w, s]]]
                }
            })
        })
        .chain(std::iter::once(json!({
            "type": "Feature",
            "properties": { "name": "Puerto Rico" },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[-67.3, 17.9], [-65.2, 17.9], [-65.2, 18.5], [-67.3, 18.5], [-67.3, 17.9]]]
            }
        })))
        .collect();

    let collection = json!({ "type": "FeatureCollection", "features": features });
    let text = serde_json::to_string_pretty(&collection).expect("Failed to serialize GeoJSON");
    std::fs::write(path, text).expect("Failed to write GeoJSON");
}
