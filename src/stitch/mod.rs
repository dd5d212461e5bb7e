//! Image stitching domain: public API.
//!
//! `compose` is the pure core; `pipeline` drives it through a host;
//! `lock` and `selection` belong to the caller side of the flow.

mod compose;
mod lock;
mod pipeline;
mod selection;

pub use compose::{
    check_count, stitch, Placement, StitchError, StitchResult, BACKGROUND, BAR_COLOR,
    MAX_CANVAS_BYTES, MAX_STITCH_IMAGES, MIN_STITCH_IMAGES, SEPARATOR_BAR_HEIGHT, SEPARATOR_HEIGHT,
};
pub use lock::{StitchGuard, StitchLock};
pub use pipeline::{run_stitch, HostError, PipelineError, StitchHost};
pub use selection::{finder_selection, is_stitchable, parse_selection, SelectionError};
