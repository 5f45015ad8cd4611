// Library root
// -----------
// This crate exposes a small library surface for the uploader CLI. The
// binary (`main.rs`) wires these modules together into one interactive run.
//
// Module responsibilities:
// - `discover`: Lists the `.html` files eligible for upload.
// - `selection`: Turns the user's free-text answer into file indices.
// - `api`: Encapsulates the HTTP interaction with the signage device.
// - `options`: Command-line flags and their hardcoded defaults.
// - `ui`: Prints the list, reads the selection and drives the upload loop.
pub mod api;
pub mod discover;
pub mod options;
pub mod selection;
pub mod ui;
