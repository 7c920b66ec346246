use std::io::{Cursor, Write};

use anyhow::Result;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::wire::GeneratedFile;

/// Build the downloadable archive entirely in memory, entry by entry.
/// Entry paths and contents are written verbatim: no size limit, no path
/// sanitization, and duplicate names keep the zip library's
/// last-write-wins lookup behavior.
pub fn build(files: &[GeneratedFile]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in files {
        writer.start_file(file.filename.as_str(), options)?;
        writer.write_all(file.content.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}
