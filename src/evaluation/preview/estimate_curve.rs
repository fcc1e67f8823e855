use crate::evaluation::Snapshot;
use std::fs::File;
use std::io::{BufWriter, Error, ErrorKind, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveFormat {
    Csv,
    Tsv,
    Json,
}

impl CurveFormat {
    /// Infers the format from a `.csv`, `.tsv` or `.json` extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("tsv") => Ok(Self::Tsv),
            Some("json") => Ok(Self::Json),
            _ => Err(Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "unsupported export extension for {} (expected .csv, .tsv or .json)",
                    path.as_ref().display()
                ),
            )),
        }
    }
}

/// Snapshots of the running estimate, in fold order.
#[derive(Debug, Clone, Default)]
pub struct EstimateCurve {
    entries: Vec<Snapshot>,
}

impl EstimateCurve {
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<Snapshot> {
        self.entries.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }

    /// Writes the curve in the format matching the path's extension.
    pub fn export_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let fmt = CurveFormat::from_path(&path)?;
        self.export(path, fmt)
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: CurveFormat) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        match fmt {
            CurveFormat::Csv => self.write_delimited(&mut w, ',')?,
            CurveFormat::Tsv => self.write_delimited(&mut w, '\t')?,
            CurveFormat::Json => {
                serde_json::to_writer_pretty(&mut w, &self.entries)?;
                writeln!(w)?;
            }
        }
        w.flush()
    }

    fn write_delimited<W: Write>(&self, w: &mut W, delimiter: char) -> Result<(), Error> {
        writeln!(
            w,
            "samples_seen{d}intercept{d}slope1{d}slope2{d}determinant{d}seconds",
            d = delimiter
        )?;
        for s in &self.entries {
            writeln!(
                w,
                "{}{d}{:.12}{d}{:.12}{d}{:.12}{d}{:.12}{d}{:.6}",
                s.samples_seen,
                s.intercept,
                s.slope1,
                s.slope2,
                s.determinant,
                s.seconds,
                d = delimiter
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{Builder, NamedTempFile};

    fn snap(seen: u64, a: f64, b1: f64, b2: f64, secs: f64) -> Snapshot {
        Snapshot {
            samples_seen: seen,
            intercept: a,
            slope1: b1,
            slope2: b2,
            determinant: 1.0,
            seconds: secs,
        }
    }

    fn two_rows() -> EstimateCurve {
        let mut c = EstimateCurve::default();
        c.push(snap(10, 1.0, 0.5, 0.125, 2.5));
        c.push(snap(20, 0.25, 0.0, 1.5, 3.0));
        c
    }

    #[test]
    fn default_is_empty_and_latest_none() {
        let c = EstimateCurve::default();
        assert_eq!(c.len(), 0);
        assert!(c.is_empty());
        assert!(c.latest().is_none());
    }

    #[test]
    fn push_and_latest() {
        let c = two_rows();
        assert_eq!(c.len(), 2);
        let last = c.latest().unwrap();
        assert_eq!(last.samples_seen, 20);
        assert_eq!(last.slope2, 1.5);
        assert_eq!(c.iter().map(|s| s.samples_seen).collect::<Vec<_>>(), vec![10, 20]);
    }

    #[test]
    fn export_csv_with_two_rows() {
        let tf = NamedTempFile::new().unwrap();
        two_rows().export(tf.path(), CurveFormat::Csv).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
samples_seen,intercept,slope1,slope2,determinant,seconds
10,1.000000000000,0.500000000000,0.125000000000,1.000000000000,2.500000
20,0.250000000000,0.000000000000,1.500000000000,1.000000000000,3.000000
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_tsv_header() {
        let tf = NamedTempFile::new().unwrap();
        EstimateCurve::default().export(tf.path(), CurveFormat::Tsv).unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        assert_eq!(got, "samples_seen\tintercept\tslope1\tslope2\tdeterminant\tseconds\n");
    }

    #[test]
    fn export_json_parses_back() {
        let tf = NamedTempFile::new().unwrap();
        two_rows().export(tf.path(), CurveFormat::Json).unwrap();

        let text = fs::read_to_string(tf.path()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        let rows = v.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["samples_seen"], 10);
        assert_eq!(rows[1]["slope2"], 1.5);
    }

    #[test]
    fn json_writes_nan_as_null() {
        let mut c = EstimateCurve::default();
        c.push(snap(1, f64::NAN, 0.0, 0.0, 0.0));
        let tf = NamedTempFile::new().unwrap();
        c.export(tf.path(), CurveFormat::Json).unwrap();
        let v: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(tf.path()).unwrap()).unwrap();
        assert!(v[0]["intercept"].is_null());
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(CurveFormat::from_path("a/b.CSV").unwrap(), CurveFormat::Csv);
        assert_eq!(CurveFormat::from_path("b.tsv").unwrap(), CurveFormat::Tsv);
        assert_eq!(CurveFormat::from_path("b.json").unwrap(), CurveFormat::Json);
        let err = CurveFormat::from_path("b.txt").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(CurveFormat::from_path("noext").is_err());
    }

    #[test]
    fn export_to_uses_extension() {
        let tf = Builder::new().suffix(".tsv").tempfile().unwrap();
        two_rows().export_to(tf.path()).unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        assert!(got.starts_with("samples_seen\tintercept"));
    }
}
