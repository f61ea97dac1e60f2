//! CSV serialization for matrices of numbers.
//!
//! A matrix is an array of arrays: one inner [`DoubleEndedArray<f64>`] per
//! line, fields split on a single delimiter byte. Reading enforces numeric
//! fields ([`Error::Format`]) and rectangular shape ([`Error::Shape`]);
//! writing emits one newline-terminated line per row with no trailing
//! delimiter.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};

use crate::array::DoubleEndedArray;
use crate::error::Error;

/// An array of rows, each itself an array of numbers.
pub type Matrix = DoubleEndedArray<DoubleEndedArray<f64>>;

/// Reads a comma-delimited matrix.
pub fn read_matrix<R: Read>(reader: R) -> Result<Matrix, Error> {
    read_matrix_delimited(reader, b',')
}

/// Reads a matrix split on `delimiter`, one row per line.
pub fn read_matrix_delimited<R: Read>(reader: R, delimiter: u8) -> Result<Matrix, Error> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut matrix = Matrix::new();
    let mut width = None;
    for (i, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = i + 1;

        let mut row = DoubleEndedArray::new();
        for field in record.iter() {
            let value = field.parse::<f64>().map_err(|_| Error::Format {
                line,
                field: field.to_string(),
            })?;
            row.push_back(value);
        }

        match width {
            None => width = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(Error::Shape {
                    line,
                    expected,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }
        matrix.push_back(row);
    }
    Ok(matrix)
}

/// Reads a comma-delimited matrix from a file.
pub fn read_matrix_path<P: AsRef<Path>>(path: P) -> Result<Matrix, Error> {
    read_matrix(File::open(path)?)
}

/// Writes a comma-delimited matrix.
pub fn write_matrix<W: Write>(writer: W, matrix: &Matrix) -> Result<(), Error> {
    write_matrix_delimited(writer, b',', matrix)
}

/// Writes a matrix joined on `delimiter`, one line per row.
pub fn write_matrix_delimited<W: Write>(
    writer: W,
    delimiter: u8,
    matrix: &Matrix,
) -> Result<(), Error> {
    let mut csv_writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    for row in matrix.iter() {
        let fields: Vec<String> = row.iter().map(f64::to_string).collect();
        csv_writer.write_record(&fields)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes a comma-delimited matrix to a file, replacing any existing content.
pub fn write_matrix_path<P: AsRef<Path>>(path: P, matrix: &Matrix) -> Result<(), Error> {
    write_matrix(File::create(path)?, matrix)
}
