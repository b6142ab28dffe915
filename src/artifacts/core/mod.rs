//! Output helpers shared by the commands

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter feeding a static `minus` pager
///
/// Long outputs such as `log` are written here instead of stdout and shown in
/// one go once the command has finished.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Display everything pushed to `pager`, blocking until the user quits
pub fn page_all(pager: Pager) -> anyhow::Result<()> {
    minus::page_all(pager)?;
    Ok(())
}
