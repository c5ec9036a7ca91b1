//! Downloadable output artifacts.

use std::path::{Path, PathBuf};

use crate::OutputFormat;

/// MIME type offered with spreadsheet downloads.
pub const XLSX_MIME: &str = "application/vnd.ms-excel";

/// MIME type of rendered charts.
pub const SVG_MIME: &str = "image/svg+xml";

/// Exported bytes with the metadata needed to offer them for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Suggested file name.
    pub file_name: String,
    /// MIME type.
    pub mime_type: &'static str,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Creates an artifact.
    #[must_use]
    pub fn new(file_name: impl Into<String>, mime_type: &'static str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type,
            bytes,
        }
    }

    /// Creates a price export named `<identifier>_주가.<ext>`.
    #[must_use]
    pub fn price_export(identifier: &str, format: OutputFormat, bytes: Vec<u8>) -> Self {
        Self::new(
            format!("{}_주가.{}", file_stem(identifier), format.extension()),
            format.mime_type(),
            bytes,
        )
    }

    /// Creates a chart named `<identifier>_<kind>.svg`.
    #[must_use]
    pub fn svg(identifier: &str, kind: &str, svg: String) -> Self {
        Self::new(
            format!("{}_{kind}.svg", file_stem(identifier)),
            SVG_MIME,
            svg.into_bytes(),
        )
    }

    /// Returns the size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the artifact has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes the artifact into `dir` under its file name.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Makes a user-supplied identifier safe to use as a file-name stem.
///
/// Path separators and control characters become `_`; everything else,
/// including Hangul, is kept.
#[must_use]
pub fn file_stem(identifier: &str) -> String {
    identifier
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spreadsheet_name_and_mime() {
        let artifact = Artifact::price_export("삼성전자", OutputFormat::Xlsx, vec![1, 2, 3]);
        assert_eq!(artifact.file_name, "삼성전자_주가.xlsx");
        assert_eq!(artifact.mime_type, "application/vnd.ms-excel");
        assert_eq!(artifact.len(), 3);
    }

    #[test]
    fn test_csv_name() {
        let artifact = Artifact::price_export("005930", OutputFormat::Csv, Vec::new());
        assert_eq!(artifact.file_name, "005930_주가.csv");
        assert!(artifact.is_empty());
    }

    #[test]
    fn test_svg_name() {
        let artifact = Artifact::svg("SK하이닉스", "returns", "<svg/>".to_string());
        assert_eq!(artifact.file_name, "SK하이닉스_returns.svg");
        assert_eq!(artifact.mime_type, SVG_MIME);
        assert_eq!(artifact.bytes, b"<svg/>");
    }

    #[test]
    fn test_write_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = Artifact::price_export("005930", OutputFormat::Csv, b"Date\n".to_vec());

        let path = artifact.write_to(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("005930_주가.csv"));
        assert_eq!(std::fs::read(path).unwrap(), b"Date\n");
    }

    #[test]
    fn test_file_stem_sanitizes_separators() {
        assert_eq!(file_stem("A/B\\C:D"), "A_B_C_D");
        assert_eq!(file_stem(" Samsung Electronics "), "Samsung Electronics");
        assert_eq!(file_stem("탭\t이름"), "탭_이름");
    }
}
