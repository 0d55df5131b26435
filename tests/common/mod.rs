use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Open `path` for writing, write a line and close it, producing exactly one
/// write-close event.
#[allow(dead_code)]
pub fn write_and_close(path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(b"probe\n")?;
    drop(file);
    Ok(())
}
