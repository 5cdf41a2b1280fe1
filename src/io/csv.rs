//! One-value-per-line CSV reading and writing

use crate::array::StatArray;
use crate::dispatch_dtype;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Elements moved between device and host per transfer
const TRANSFER_CHUNK: usize = 64 * 1024;

/// Label used in errors for readers and writers that are not files
const STREAM_LABEL: &str = "<stream>";

fn write_to<R: Runtime, W: Write>(array: &StatArray<R>, mut writer: W, path: &Path) -> Result<()> {
    let len = array.len();
    dispatch_dtype!(array.dtype(), T => {
        let mut chunk: Vec<T> = vec![T::zero(); TRANSFER_CHUNK.min(len)];
        let mut start = 0;
        while start < len {
            let n = TRANSFER_CHUNK.min(len - start);
            array.buffer().read_range(start, &mut chunk[..n])?;
            for v in &chunk[..n] {
                writeln!(writer, "{v}").map_err(|e| Error::io(path, e))?;
            }
            start += n;
        }
    });
    writer.flush().map_err(|e| Error::io(path, e))
}

fn read_from<R: Runtime, B: BufRead>(
    client: &R::Client,
    reader: B,
    dtype: DType,
    path: &Path,
) -> Result<StatArray<R>> {
    let mut array = StatArray::<R>::empty(client, dtype);
    dispatch_dtype!(dtype, T => {
        let mut pending: Vec<T> = Vec::with_capacity(TRANSFER_CHUNK);
        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::io(path, e))?;
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            let value = T::parse_text(text).ok_or_else(|| Error::Format {
                path: path.to_path_buf(),
                line: i + 1,
                content: line.clone(),
            })?;
            pending.push(value);
            if pending.len() == TRANSFER_CHUNK {
                array.extend_from_slice(&pending)?;
                pending.clear();
            }
        }
        array.extend_from_slice(&pending)?;
    });
    Ok(array)
}

/// Write every element of `array` to `writer`, one per line
pub fn write_values<R: Runtime, W: Write>(array: &StatArray<R>, writer: W) -> Result<()> {
    write_to(array, writer, Path::new(STREAM_LABEL))
}

/// Read one value per line from `reader` into a new array
///
/// Blank lines are skipped and surrounding whitespace is ignored. Any other
/// line that does not parse fails with `Error::Format`.
pub fn read_values<R: Runtime, B: BufRead>(
    client: &R::Client,
    reader: B,
    dtype: DType,
) -> Result<StatArray<R>> {
    read_from(client, reader, dtype, Path::new(STREAM_LABEL))
}

impl<R: Runtime> StatArray<R> {
    /// Write the array to `path`, one value per line
    ///
    /// Data leaves the device in fixed-size chunks through a buffered writer.
    ///
    /// # Errors
    ///
    /// `Error::Io` carrying the path if the file cannot be created or written.
    pub fn to_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        write_to(self, BufWriter::new(file), path)?;
        log::debug!("wrote {} values to {}", self.len(), path.display());
        Ok(())
    }

    /// Read an array from a one-value-per-line file
    ///
    /// # Errors
    ///
    /// - `Error::Io` if the file cannot be opened or read
    /// - `Error::Format` with the 1-based line number and content of the
    ///   first unparsable line
    pub fn from_csv(client: &R::Client, path: impl AsRef<Path>, dtype: DType) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let array = read_from(client, BufReader::new(file), dtype, path)?;
        log::debug!("read {} values from {}", array.len(), path.display());
        Ok(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RuntimeConfig;
    use crate::runtime::cpu::{CpuClient, CpuRuntime};

    fn client() -> CpuClient {
        CpuRuntime::create_client(&RuntimeConfig::default()).unwrap()
    }

    #[test]
    fn test_write_format() {
        let client = client();
        let a = StatArray::<CpuRuntime>::from_slice(&client, &[1.0f64, -0.5, f64::NAN, f64::INFINITY])
            .unwrap();
        let mut out = Vec::new();
        write_values(&a, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n-0.5\nNaN\ninf\n");
    }

    #[test]
    fn test_read_skips_blank_lines_and_trims() {
        let client = client();
        let text = "  1.5\n\n2\r\n -3e2 \n";
        let a = read_values::<CpuRuntime, _>(&client, text.as_bytes(), DType::F32).unwrap();
        assert_eq!(a.to_vec::<f32>().unwrap(), vec![1.5, 2.0, -300.0]);
    }

    #[test]
    fn test_read_reports_line_of_bad_value() {
        let client = client();
        let text = "1\n2\n\nabc\n";
        let err = read_values::<CpuRuntime, _>(&client, text.as_bytes(), DType::F64).unwrap_err();
        match err {
            Error::Format { line, content, .. } => {
                assert_eq!(line, 4);
                assert_eq!(content, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
