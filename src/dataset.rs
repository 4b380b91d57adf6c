//! Historical franchise data.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use crate::prelude::*;

/// Single historical data point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Observation {
    pub annual_fee: f64,
    pub initial_cost: f64,
}

impl Observation {
    pub const fn new(annual_fee: f64, initial_cost: f64) -> Self {
        Self {
            annual_fee,
            initial_cost,
        }
    }
}

pub struct LoadOptions {
    pub delimiter: u8,
    pub fee_column: String,
    pub cost_column: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            fee_column: "FrqAnual".to_string(),
            cost_column: "CusInic".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("column `{name}` is missing in the header")]
    MissingColumn { name: String },

    #[error("line {line}: expected {expected} fields, found {found}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: `{value}` in column `{column}` is not a finite number")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    #[error("failed to read the dataset")]
    Csv(#[from] csv::Error),
}

/// Observations in the file order, along with the original column names.
pub struct Dataset {
    observations: Vec<Observation>,
    fee_column: String,
    cost_column: String,
}

impl Dataset {
    #[instrument(skip_all, fields(path = ?path.as_ref()))]
    pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
        let dataset = Self::from_reader(file, options)
            .with_context(|| format!("failed to load `{}`", path.display()))?;
        info!(n_observations = dataset.len(), "loaded");
        Ok(dataset)
    }

    pub fn from_reader(reader: impl Read, options: &LoadOptions) -> StdResult<Self, LoadError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(options.delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let header = reader.headers()?.clone();
        let fee_index = find_column(&header, &options.fee_column)?;
        let cost_index = find_column(&header, &options.cost_column)?;

        let mut observations = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, csv::Position::line);
            if record.len() != header.len() {
                return Err(LoadError::ColumnCount {
                    line,
                    expected: header.len(),
                    found: record.len(),
                });
            }
            observations.push(Observation::new(
                parse_field(&record, fee_index, &options.fee_column, line)?,
                parse_field(&record, cost_index, &options.cost_column, line)?,
            ));
        }

        Ok(Self {
            observations,
            fee_column: options.fee_column.clone(),
            cost_column: options.cost_column.clone(),
        })
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn fee_column(&self) -> &str {
        &self.fee_column
    }

    pub fn cost_column(&self) -> &str {
        &self.cost_column
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl From<Vec<Observation>> for Dataset {
    fn from(observations: Vec<Observation>) -> Self {
        let options = LoadOptions::default();
        Self {
            observations,
            fee_column: options.fee_column,
            cost_column: options.cost_column,
        }
    }
}

fn find_column(header: &StringRecord, name: &str) -> StdResult<usize, LoadError> {
    header
        .iter()
        .position(|field| field == name)
        .ok_or_else(|| LoadError::MissingColumn {
            name: name.to_string(),
        })
}

fn parse_field(
    record: &StringRecord,
    index: usize,
    column: &str,
    line: u64,
) -> StdResult<f64, LoadError> {
    let value = &record[index];
    match f64::from_str(value) {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(LoadError::InvalidNumber {
            line,
            column: column.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_reader_ok() -> Result {
        let dataset = Dataset::from_reader(
            "FrqAnual;CusInic\n1000;300\n2000 ; 600\n3000;900.5\n".as_bytes(),
            &LoadOptions::default(),
        )?;
        assert_eq!(
            dataset.observations(),
            &[
                Observation::new(1000.0, 300.0),
                Observation::new(2000.0, 600.0),
                Observation::new(3000.0, 900.5),
            ]
        );
        assert_eq!(dataset.fee_column(), "FrqAnual");
        assert_eq!(dataset.cost_column(), "CusInic");
        Ok(())
    }

    #[test]
    fn columns_by_name_ok() -> Result {
        let options = LoadOptions {
            delimiter: b',',
            fee_column: "fee".to_string(),
            cost_column: "cost".to_string(),
        };
        let dataset = Dataset::from_reader("id,cost,fee\n1,300,1000\n2,600,2000\n".as_bytes(), &options)?;
        assert_eq!(
            dataset.observations(),
            &[Observation::new(1000.0, 300.0), Observation::new(2000.0, 600.0)]
        );
        Ok(())
    }

    #[test]
    fn empty_ok() -> Result {
        let dataset = Dataset::from_reader("FrqAnual;CusInic\n".as_bytes(), &LoadOptions::default())?;
        assert!(dataset.is_empty());
        Ok(())
    }

    #[test]
    fn missing_column_error() {
        let result = Dataset::from_reader("Fee;Cost\n1000;300\n".as_bytes(), &LoadOptions::default());
        assert!(matches!(result, Err(LoadError::MissingColumn { name }) if name == "FrqAnual"));
    }

    #[test]
    fn column_count_error() {
        let result = Dataset::from_reader(
            "FrqAnual;CusInic\n1000;300\n2000;600;1\n".as_bytes(),
            &LoadOptions::default(),
        );
        assert!(matches!(
            result,
            Err(LoadError::ColumnCount {
                line: 3,
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn invalid_number_error() {
        let result = Dataset::from_reader(
            "FrqAnual;CusInic\n1000;300\nabc;600\n".as_bytes(),
            &LoadOptions::default(),
        );
        match result {
            Err(LoadError::InvalidNumber {
                line,
                column,
                value,
            }) => {
                assert_eq!(line, 3);
                assert_eq!(column, "FrqAnual");
                assert_eq!(value, "abc");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn non_finite_number_error() {
        let result = Dataset::from_reader(
            "FrqAnual;CusInic\n1000;inf\n".as_bytes(),
            &LoadOptions::default(),
        );
        assert!(matches!(result, Err(LoadError::InvalidNumber { .. })));
    }

    #[test]
    fn load_bundled_ok() -> Result {
        let dataset = Dataset::load(
            concat!(env!("CARGO_MANIFEST_DIR"), "/data/slr12.csv"),
            &LoadOptions::default(),
        )?;
        assert!(dataset.len() > 2);
        Ok(())
    }

    #[test]
    fn load_missing_file_error() {
        let result = Dataset::load("/nonexistent/slr12.csv", &LoadOptions::default());
        assert!(result.is_err());
    }
}
