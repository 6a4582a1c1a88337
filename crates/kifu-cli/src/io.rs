//! ファイルI/Oユーティリティ（"-" は標準入出力）

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

fn is_stdio(p: &Path) -> bool {
    p.to_string_lossy() == "-"
}

/// ファイル全体を文字列で読む。"-" なら標準入力。
pub fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let p = path.as_ref();
    let mut buf = String::new();
    if is_stdio(p) {
        io::stdin().read_to_string(&mut buf)?;
    } else {
        File::open(p)?.read_to_string(&mut buf)?;
    }
    Ok(buf)
}

/// Writer wrapper to propagate flush errors on close.
#[must_use = "call .close() to propagate IO errors"]
pub enum Writer {
    Plain(BufWriter<File>),
    Stdout(io::Stdout),
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Writer::Plain(f) => f.write(buf),
            Writer::Stdout(s) => s.write(buf),
        }
    }
    fn flush(&mut self) -> io::Result<()> {
        match self {
            Writer::Plain(f) => f.flush(),
            Writer::Stdout(s) => s.flush(),
        }
    }
}

impl Writer {
    /// Flush the buffer and the underlying file/stdout.
    pub fn close(self) -> io::Result<()> {
        match self {
            Writer::Plain(f) => {
                let mut file = f.into_inner().map_err(|e| e.into_error())?;
                file.flush()
            }
            Writer::Stdout(mut s) => s.flush(),
        }
    }
}

pub fn open_writer<P: AsRef<Path>>(path: P) -> io::Result<Writer> {
    let p = path.as_ref();
    if is_stdio(p) {
        return Ok(Writer::Stdout(io::stdout()));
    }
    let f = File::create(p)?;
    Ok(Writer::Plain(BufWriter::new(f)))
}
