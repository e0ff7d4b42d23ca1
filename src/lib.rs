#![doc = r#"
iconfix — normalizes app icon assets to RGBA PNG in place.

This crate rewrites raster image files as RGBA PNGs: the real format is
sniffed from the file content (a JPEG hiding under a `.png` name still
decodes), the pixel data is forced to RGBA8, and the result overwrites the
original file. It powers the `iconfix` binary and can be embedded in your
own Rust applications.

Quick start: convert a single file
----------------------------------
```rust,no_run
use std::path::Path;
use iconfix::convert_file_in_place;

fn main() -> iconfix::Result<()> {
    convert_file_in_place(Path::new("assets/icon.png"))
}
```

Run a path list with per-file outcomes
--------------------------------------
```rust,no_run
use iconfix::convert_all_in_place;

let report = convert_all_in_place(&["assets/icon.png", "assets/favicon.png"]);
println!(
    "converted={} skipped={} failed={}",
    report.converted, report.skipped, report.failed
);
```

Error handling
--------------
Public functions return `iconfix::Result<T>`; match on `iconfix::Error` to
distinguish I/O failures from imaging failures. [`convert_path`] never
propagates: it folds errors into [`FileOutcome::Failed`] so batch callers
can keep going.

Useful modules
--------------
- [`api`] — high-level entry points and batch reporting.
- [`core`] — the decode / force-RGBA / re-encode pipeline.
- [`io`] — image decoding and PNG encoding primitives.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;

// Curated public API surface
pub use api::{BatchReport, FileOutcome, convert_all_in_place, convert_file_in_place, convert_path};
pub use error::{Error, Result};
