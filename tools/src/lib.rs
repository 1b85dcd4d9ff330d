//! # NBS Tools
//!
//! [Open Note Block Studio](https://opennbs.org/) saves songs as `.nbs` files: a metadata
//! header followed by a grid of note blocks laid out tick by tick. This crate provides a
//! command-line utility for looking inside those files without opening the editor.
//!
//! ## Inspect
//!
//! ```console
//! nbs-tools-inspect 0.1.0
//! Inspect .nbs files, or entire directories of them, for their metadata
//!
//! USAGE:
//!     nbs-tools inspect [OPTIONS] [PATH]...
//!
//! ARGS:
//!     <PATH>...    The path(s) to inspect
//!
//! OPTIONS:
//!     -h, --help         Print help information
//!     -r, --recursive    Search folders recursively
//!     -V, --version      Print version information
//! ```
//!
//! ### Example
//!
//! ```console
//! > nbs-tools inspect songs/
//! BasicTestSong.nbs               v5 | 11 ticks | 3 layers | 5.00 t/s
//!   Test Song by DGigsTV
//!   This is a test song! https://github.com/dgigstv
//! ```
//!
//! ## Dump
//!
//! ```console
//! nbs-tools-dump 0.1.0
//! Print every note block in a song, tick by tick
//!
//! USAGE:
//!     nbs-tools dump <PATH>
//!
//! ARGS:
//!     <PATH>    The path to the song to dump
//!
//! OPTIONS:
//!     -h, --help       Print help information
//!     -V, --version    Print version information
//! ```
//!
//! ### Example
//!
//! ```console
//! > nbs-tools dump songs/BasicTestSong.nbs
//! Test Song by DGigsTV
//!     0 |   0 | i00 key 045 vel 100
//!     0 |   1 | i01 key 050 vel 080
//!     4 |   1 | i05 key 064 vel 090
//!    10 |   2 | i02 key 033 vel 127
//! 4 note blocks over 3 ticks
//! ```

pub mod dump;
pub mod inspect;
