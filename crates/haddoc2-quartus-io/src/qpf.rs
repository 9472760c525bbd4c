//! Quartus Project File (`.qpf`) writer.

use std::io;

use haddoc2_quartus_core::ProjectFile;

pub struct QpfWriter<W: io::Write> {
    writer: W,
}

impl<W: io::Write> QpfWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write(&mut self, project: &ProjectFile) -> io::Result<u64> {
        let text = project.render();
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(text.len() as u64)
    }
}
