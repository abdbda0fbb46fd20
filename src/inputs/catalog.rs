//! Load institution program figures from a catalog CSV
//!
//! Expected columns: Institution, Program, TuitionInState, TuitionOutOfState,
//! Fees, RoomBoard, Books, OtherExpenses, ProgramLength, MedianSalary

use super::{CostInputs, Residency};
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to open catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {field} must be a non-negative number, got {value}")]
    InvalidAmount { row: usize, field: &'static str, value: f64 },
}

/// Raw CSV row matching the catalog columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Institution")]
    institution: String,
    #[serde(rename = "Program")]
    program: String,
    #[serde(rename = "TuitionInState")]
    tuition_in_state: f64,
    #[serde(rename = "TuitionOutOfState")]
    tuition_out_of_state: Option<f64>,
    #[serde(rename = "Fees")]
    fees: f64,
    #[serde(rename = "RoomBoard")]
    room_board: f64,
    #[serde(rename = "Books")]
    books: f64,
    #[serde(rename = "OtherExpenses")]
    other_expenses: f64,
    #[serde(rename = "ProgramLength")]
    program_length: f64,
    #[serde(rename = "MedianSalary")]
    median_salary: f64,
}

impl CsvRow {
    fn into_record(self, row: usize) -> Result<ProgramRecord, CatalogError> {
        let amounts = [
            ("TuitionInState", self.tuition_in_state),
            ("TuitionOutOfState", self.tuition_out_of_state.unwrap_or(0.0)),
            ("Fees", self.fees),
            ("RoomBoard", self.room_board),
            ("Books", self.books),
            ("OtherExpenses", self.other_expenses),
            ("ProgramLength", self.program_length),
            ("MedianSalary", self.median_salary),
        ];
        for (field, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::InvalidAmount { row, field, value });
            }
        }

        Ok(ProgramRecord {
            institution: self.institution,
            program: self.program,
            tuition_in_state: self.tuition_in_state,
            // Public catalogs leave this blank for private schools with one rate
            tuition_out_of_state: self.tuition_out_of_state.unwrap_or(self.tuition_in_state),
            fees: self.fees,
            room_board: self.room_board,
            books: self.books,
            other_expenses: self.other_expenses,
            program_length: self.program_length,
            median_salary: self.median_salary,
        })
    }
}

/// Financial figures for one institution program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub institution: String,
    pub program: String,
    pub tuition_in_state: f64,
    pub tuition_out_of_state: f64,
    pub fees: f64,
    pub room_board: f64,
    pub books: f64,
    pub other_expenses: f64,
    pub program_length: f64,

    /// Median graduate salary, used as the projected salary
    pub median_salary: f64,
}

impl ProgramRecord {
    /// Build cost inputs, picking the tuition figure for the residency
    pub fn cost_inputs(&self, residency: Residency) -> CostInputs {
        let tuition = match residency {
            Residency::InState => self.tuition_in_state,
            Residency::OutOfState => self.tuition_out_of_state,
        };

        CostInputs {
            tuition,
            fees: self.fees,
            room_board: self.room_board,
            books: self.books,
            other_expenses: self.other_expenses,
            program_length: self.program_length,
            residency,
        }
    }

    /// Display label "Institution - Program"
    pub fn label(&self) -> String {
        format!("{} - {}", self.institution, self.program)
    }
}

/// Load all program records from a CSV file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<ProgramRecord>, CatalogError> {
    let file = std::fs::File::open(path)?;
    load_catalog_from_reader(file)
}

/// Load program records from any reader (e.g., string buffer, network stream)
pub fn load_catalog_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<ProgramRecord>, CatalogError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut records = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        // Header is line 1
        records.push(row.into_record(idx + 2)?);
    }

    Ok(records)
}
