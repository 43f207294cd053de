//! Stage file persistence.
//!
//! Every stage overwrites its whole output file; the next stage reads it back.
//! Keeping the hand-off on disk lets a failed run resume from the last stage
//! that completed, and lets the files be inspected between stages.
//!
//! ## Directory Structure
//!
//! ```text
//! {data_dir}/
//! ├── links.txt               # Stage 1: one detail-page path per line
//! ├── films.json              # Stage 2: film records
//! ├── films_with_subs.json    # Stage 3: records with subscription services
//! ├── streaming.txt           # Stage 4: grouped report
//! └── providers.json          # Provider catalog dump (standalone)
//! ```

pub mod local;

pub use local::LocalStorage;
