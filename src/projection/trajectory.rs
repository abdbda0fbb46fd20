//! Year-by-year cumulative earnings output for charting

use serde::{Deserialize, Serialize};
use std::io::Write;

use super::result::infinite_as_null;

/// Cumulative position of both paths at the end of one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Year index, 0-based from program start
    pub year: u32,

    /// Cumulative net position with the credential, rounded to whole dollars
    pub cumulative_with_degree: f64,

    /// Cumulative earnings without the credential, rounded to whole dollars
    pub cumulative_without_degree: f64,

    /// Set on the first year the credentialed path catches up
    pub is_break_even: bool,

    /// Whether this year was spent in the program
    pub in_program: bool,
}

/// Full annual series from year 0 through the career length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub points: Vec<TrajectoryPoint>,

    /// Payback period under the engine's payback policy
    #[serde(with = "infinite_as_null")]
    pub payback_period: f64,
}

impl Trajectory {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            payback_period: f64::INFINITY,
        }
    }

    /// Add a point
    pub fn add_point(&mut self, point: TrajectoryPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Year flagged as break-even, if any
    pub fn break_even_year(&self) -> Option<u32> {
        self.points.iter().find(|p| p.is_break_even).map(|p| p.year)
    }

    /// Lead of the credentialed path at the final year (negative if behind)
    pub fn final_advantage(&self) -> f64 {
        self.points
            .last()
            .map(|p| p.cumulative_with_degree - p.cumulative_without_degree)
            .unwrap_or(0.0)
    }

    /// Write the series as CSV with a header row
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for point in &self.points {
            csv_writer.serialize(point)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::new()
    }
}
