//! Parsing of delimited uploads and the downloadable sample file.
//!
//! Turning raw bytes into a table is a separate concern from validating it:
//! a malformed buffer is reported as `Error::TableRead`, never as a
//! validation rejection.

use std::io::{Read, Write};

use crate::error::Result;
use crate::types::{PublicationRow, PublicationTable};

/// Parse a delimited-text upload into a header plus data rows
pub fn read_publications<R: Read>(reader: R) -> Result<PublicationTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let columns = csv_reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(PublicationTable { columns, rows })
}

/// Rows offered as the downloadable sample publications file
pub fn sample_publications() -> Vec<PublicationRow> {
    vec![
        PublicationRow {
            title: "An investigation of CFY effects".into(),
            year: 2024,
            authors: "E. Researcher; A. Coauthor".into(),
        },
        PublicationRow {
            title: "Curriculum reform outcomes".into(),
            year: 2023,
            authors: "E. Researcher".into(),
        },
    ]
}

/// Write the sample publications CSV, header included
pub fn write_sample_csv<W: Write>(writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in sample_publications() {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn reads_header_and_rows() {
        let data = "Title,Year,Authors\nA,2020,X\nB,2021,Y\n";
        let table = read_publications(data.as_bytes()).unwrap();
        assert_eq!(table.columns, vec!["Title", "Year", "Authors"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1], vec!["B", "2021", "Y"]);
    }

    #[test]
    fn ragged_rows_are_a_table_read_failure() {
        let data = "Title,Year,Authors\nonly-one-field\n";
        let result = read_publications(data.as_bytes());
        assert!(matches!(result, Err(Error::TableRead(_))));
    }

    #[test]
    fn sample_csv_round_trips_through_the_reader() {
        let mut buffer = Vec::new();
        write_sample_csv(&mut buffer).unwrap();
        let table = read_publications(buffer.as_slice()).unwrap();
        assert_eq!(table.columns, vec!["Title", "Year", "Authors"]);
        assert_eq!(table.row_count(), sample_publications().len());
    }
}
