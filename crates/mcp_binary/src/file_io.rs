use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

/// Read the whole file as UTF-8 text. Line endings are read as `\n`.
pub fn read_file_text(file: &Path) -> io::Result<String> {
    let file_handle = File::open(file)?;
    let mut reader = BufReader::new(file_handle);
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(normalize_newlines(text))
}

/// Translate `\r\n` and lone `\r` into `\n`.
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Write text to specified file, replacing any previous contents.
pub fn write_file_text(file: &Path, text: &str) -> io::Result<()> {
    let file_handle = File::create(file)?;
    let mut writer = BufWriter::new(file_handle);
    writer.write_all(text.as_bytes())?;
    writer.flush()
}
