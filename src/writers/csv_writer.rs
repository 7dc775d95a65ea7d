use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use crate::error::Result;
use crate::models::MunicipalityRecord;
use crate::utils::constants::{CSV_DELIMITER, OUTPUT_COLUMNS};

/// Serializes the final table as semicolon-delimited UTF-8 text, one header
/// line plus one line per record, in table order. Floats carry a comma
/// decimal separator (see `MunicipalityRecord`); no index column is written.
pub struct CsvExporter;

impl CsvExporter {
    pub fn write(records: &[MunicipalityRecord], path: &Path) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(CSV_DELIMITER)
            .from_path(path)?;

        // serialize() emits the header before the first record; an empty
        // table still gets its header line.
        if records.is_empty() {
            writer.write_record(OUTPUT_COLUMNS)?;
        }
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        info!("wrote {} rows to {}", records.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const EXPECTED_HEADER: &str = "codigo_municipio;municipio;codigo_uf;estado;sigla_uf;\
                                   codigo_regiao;regiao;sigla_regiao;area_km2;latitude;longitude";

    fn sample_record() -> MunicipalityRecord {
        MunicipalityRecord {
            codigo_municipio: "3550308".to_string(),
            municipio: "São Paulo".to_string(),
            codigo_uf: "35".to_string(),
            estado: "São Paulo".to_string(),
            sigla_uf: "SP".to_string(),
            codigo_regiao: "3".to_string(),
            regiao: "Sudeste".to_string(),
            sigla_regiao: "SE".to_string(),
            area_km2: 1521.11,
            latitude: -23.6,
            longitude: -46.6,
        }
    }

    #[test]
    fn test_header_and_row_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        CsvExporter::write(&[sample_record()], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], EXPECTED_HEADER);
        assert_eq!(
            lines[1],
            "3550308;São Paulo;35;São Paulo;SP;3;Sudeste;SE;1521,11;-23,6;-46,6"
        );
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        CsvExporter::write(&[], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert_eq!(contents.lines().next().unwrap(), EXPECTED_HEADER);
    }

    #[test]
    fn test_row_order_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let mut second = sample_record();
        second.codigo_municipio = "1100015".to_string();
        second.municipio = "Alta Floresta D'Oeste".to_string();

        CsvExporter::write(&[sample_record(), second], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("3550308;"));
        assert!(lines[2].starts_with("1100015;"));
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("a.csv");
        let second = temp_dir.path().join("b.csv");

        CsvExporter::write(&[sample_record()], &first).unwrap();
        CsvExporter::write(&[sample_record()], &second).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }
}
