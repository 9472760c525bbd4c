//! Quartus Settings File (`.qsf`) writer.
//!
//! A `.qsf` is a Tcl script of `set_global_assignment` and
//! `set_instance_assignment` calls, one per line.

use std::io;

use haddoc2_quartus_core::SettingsFile;

pub struct QsfWriter<W: io::Write> {
    writer: W,
    bytes_written: u64,
}

impl<W: io::Write> QsfWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            bytes_written: 0,
        }
    }

    /// Write every assignment of `settings` in order and flush.
    pub fn write(&mut self, settings: &SettingsFile) -> io::Result<u64> {
        for assignment in settings.assignments() {
            self.write_line(&assignment.to_string())?;
        }
        self.writer.flush()?;
        Ok(self.bytes_written)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.bytes_written += line.len() as u64 + 1;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
