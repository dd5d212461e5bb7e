//! Stitch orchestration against an injected host.

use super::compose::{check_count, stitch, StitchError, StitchResult};

/// Host-side capabilities the stitch flow needs: fetching source bytes and
/// taking the finished composite. Implemented by the desktop shell over the
/// filesystem and windows, and by plain structs in tests.
///
/// `Id` is whatever the host addresses sources by; the desktop shell uses
/// `PathBuf` so non-UTF-8 file names survive untouched.
pub trait StitchHost {
    type Id;

    fn fetch_image_bytes(&self, id: &Self::Id) -> Result<Vec<u8>, HostError>;
    fn deliver_result(&self, result: StitchResult) -> Result<(), HostError>;
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct HostError(pub String);

impl From<std::io::Error> for HostError {
    fn from(e: std::io::Error) -> Self {
        HostError(e.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Stitch(#[from] StitchError),

    #[error("Stitch failed: {0}")]
    Host(#[from] HostError),
}

/// Fetches each source in order, stitches, and hands the composite back.
///
/// The count is checked before the first fetch so an oversized selection
/// costs nothing.
pub fn run_stitch<H: StitchHost + ?Sized>(host: &H, ids: &[H::Id]) -> Result<(), PipelineError> {
    check_count(ids.len())?;
    log::info!("[stitch] fetching {} sources", ids.len());

    let mut sources = Vec::with_capacity(ids.len());
    for id in ids {
        sources.push(host.fetch_image_bytes(id)?);
    }

    let result = stitch(&sources)?;
    host.deliver_result(result)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbaImage};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io::Cursor;

    #[derive(Default)]
    struct MemoryHost {
        files: HashMap<String, Vec<u8>>,
        fetched: RefCell<Vec<String>>,
        delivered: RefCell<Option<StitchResult>>,
    }

    impl StitchHost for MemoryHost {
        type Id = String;

        fn fetch_image_bytes(&self, id: &String) -> Result<Vec<u8>, HostError> {
            self.fetched.borrow_mut().push(id.clone());
            self.files
                .get(id)
                .cloned()
                .ok_or_else(|| HostError(format!("no such file: {id}")))
        }

        fn deliver_result(&self, result: StitchResult) -> Result<(), HostError> {
            *self.delivered.borrow_mut() = Some(result);
            Ok(())
        }
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(RgbaImage::new(width, height))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn delivers_composite() {
        let mut host = MemoryHost::default();
        host.files.insert("a.png".into(), png(10, 20));
        host.files.insert("b.png".into(), png(30, 5));

        run_stitch(&host, &ids(&["a.png", "b.png"])).unwrap();

        assert_eq!(*host.fetched.borrow(), ids(&["a.png", "b.png"]));
        let result = host.delivered.borrow_mut().take().unwrap();
        assert_eq!((result.width, result.height), (30, 55));
    }

    #[test]
    fn oversized_selection_fetches_nothing() {
        let host = MemoryHost::default();
        let names: Vec<String> = (0..9).map(|i| format!("{i}.png")).collect();
        let err = run_stitch(&host, &names).unwrap_err();
        assert!(matches!(err, PipelineError::Stitch(StitchError::TooManyImages { count: 9 })));
        assert!(host.fetched.borrow().is_empty());
    }

    #[test]
    fn fetch_failure_stops_pipeline() {
        let mut host = MemoryHost::default();
        host.files.insert("a.png".into(), png(10, 10));
        let err = run_stitch(&host, &ids(&["a.png", "missing.png"])).unwrap_err();
        assert!(matches!(err, PipelineError::Host(_)));
        assert!(host.delivered.borrow().is_none());
    }
}
