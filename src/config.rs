use std::path::{Path, PathBuf};

use clap::Parser;

use crate::data::model::TableKind;

/// Where the dashboard finds its five input files.
///
/// Relative file paths resolve against `--data-dir`; absolute ones are used
/// as given.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fraud-atlas",
    version,
    about = "Explore quarterly FTC fraud and identity theft reports by US state"
)]
pub struct DataConfig {
    /// Directory holding the boundary file and the report tables.
    #[arg(long, env = "FRAUD_ATLAS_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// GeoJSON state boundaries keyed by `properties.name`.
    #[arg(long, default_value = "us-state-boundaries.geojson")]
    pub boundaries: PathBuf,

    /// Per-state totals, population and report rate (.csv or .parquet).
    #[arg(long, default_value = "AxS-Continental_Full Data_data.csv")]
    pub continental: PathBuf,

    /// Fraud/Other report counts.
    #[arg(long, default_value = "AxS-Fraud Box_Full Data_data.csv")]
    pub fraud: PathBuf,

    /// Median dollar losses.
    #[arg(long, default_value = "AxS-Median Box_Full Data_data.csv")]
    pub median: PathBuf,

    /// Total dollar losses.
    #[arg(long, default_value = "AxS-Losses Box_Full Data_data.csv")]
    pub losses: PathBuf,
}

impl DataConfig {
    /// Config with default file names under `data_dir`.
    #[cfg(test)]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let mut config = DataConfig::parse_from(["fraud-atlas"]);
        config.data_dir = data_dir.into();
        config
    }

    fn resolve(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.join(file)
        }
    }

    pub fn boundaries_path(&self) -> PathBuf {
        self.resolve(&self.boundaries)
    }

    pub fn table_path(&self, kind: TableKind) -> PathBuf {
        let file = match kind {
            TableKind::Continental => &self.continental,
            TableKind::Fraud => &self.fraud,
            TableKind::MedianLosses => &self.median,
            TableKind::TotalLosses => &self.losses,
        };
        self.resolve(file)
    }
}
