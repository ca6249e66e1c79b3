/* \page AppenderOverview Appender Overview
Appends a fixed line to an existing `test.txt`.

- Target path, payload and write settings (`config.rs`).
- Failure kinds and their console lines (`error.rs`).
- Open and write steps (`append.rs`).
- Status reporting and exit codes (`runtime.rs`).
*/
pub mod config;
pub mod error;
pub mod append;
pub mod runtime;
