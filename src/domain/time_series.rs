// Time series domain model
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("series has {timestamps} timestamps but {values} values")]
    LengthMismatch { timestamps: usize, values: usize },
}

/// Paired timestamp labels and values. Positions correspond one to one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    timestamps: Vec<String>,
    values: Vec<f64>,
}

impl TimeSeries {
    pub fn new(timestamps: Vec<String>, values: Vec<f64>) -> Result<Self, SeriesError> {
        if timestamps.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }
        Ok(Self { timestamps, values })
    }

    pub fn empty() -> Self {
        Self {
            timestamps: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn timestamps(&self) -> &[String] {
        &self.timestamps
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.timestamps
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub(crate) fn push(&mut self, timestamp: &str, value: f64) {
        self.timestamps.push(timestamp.to_string());
        self.values.push(value);
    }
}
