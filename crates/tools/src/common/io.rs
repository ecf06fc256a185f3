//! ファイルI/O（`.gz` は透過的に圧縮・展開する。`-` は標準入出力）

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

const READER_BUF_CAP: usize = 128 * 1024;

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

pub fn open_reader<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    if is_stdio(path) {
        return Ok(Box::new(BufReader::with_capacity(READER_BUF_CAP, io::stdin())));
    }
    let file = File::open(path)?;
    if is_gzip(path) {
        let dec = flate2::read::GzDecoder::new(file);
        return Ok(Box::new(BufReader::with_capacity(READER_BUF_CAP, dec)));
    }
    Ok(Box::new(BufReader::with_capacity(READER_BUF_CAP, file)))
}

/// 書き込み先。圧縮ストリームの終端エラーを拾うため `close` で閉じる
#[must_use = "call .close() to propagate compression/IO errors"]
pub enum Writer {
    Plain(BufWriter<File>),
    Stdout(io::Stdout),
    Gz(flate2::write::GzEncoder<File>),
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Writer::Plain(f) => f.write(buf),
            Writer::Stdout(s) => s.write(buf),
            Writer::Gz(e) => e.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Writer::Plain(f) => f.flush(),
            Writer::Stdout(s) => s.flush(),
            Writer::Gz(e) => e.flush(),
        }
    }
}

impl Writer {
    pub fn close(self) -> io::Result<()> {
        match self {
            Writer::Plain(f) => f.into_inner().map_err(|e| e.into_error())?.flush(),
            Writer::Stdout(mut s) => s.flush(),
            Writer::Gz(e) => e.finish()?.flush(),
        }
    }
}

pub fn open_writer<P: AsRef<Path>>(path: P) -> io::Result<Writer> {
    let path = path.as_ref();
    if is_stdio(path) {
        return Ok(Writer::Stdout(io::stdout()));
    }
    let file = File::create(path)?;
    if is_gzip(path) {
        let enc = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        return Ok(Writer::Gz(enc));
    }
    Ok(Writer::Plain(BufWriter::new(file)))
}

/// JSON ファイルを読み込む
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let reader = open_reader(path).with_context(|| format!("failed to open {}", path.display()))?;
    serde_json::from_reader(reader).with_context(|| format!("failed to parse {}", path.display()))
}

/// JSON ファイルに書き出す（整形あり）
pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let mut writer =
        open_writer(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer
        .close()
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_json_roundtrip_plain_and_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let value = BTreeMap::from([("a".to_string(), 1u64), ("b".to_string(), 2)]);

        for name in ["stats.json", "stats.json.gz"] {
            let path = dir.path().join(name);
            write_json(&path, &value).unwrap();
            let back: BTreeMap<String, u64> = read_json(&path).unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn test_gzip_detection() {
        assert!(is_gzip(Path::new("corpus.json.GZ")));
        assert!(!is_gzip(Path::new("corpus.json")));
        assert!(is_stdio(Path::new("-")));
    }
}
