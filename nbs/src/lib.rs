//! Library for reading [Note Block Studio](https://opennbs.org/) songs
//!
//! `.nbs` files consist of a metadata header followed by a sparse grid of
//! note blocks, laid out tick by tick. This crate decodes both, either
//! greedily into a [`Song`](crate::song::Song) or lazily through a
//! [`SongStream`](crate::song::SongStream) that reads the grid one tick at
//! a time:
//!
//! ```no_run
//! use nbs::song::{Song, SongStream};
//!
//! // Load a whole song into memory
//! let song = Song::from_path("bangers.nbs")?;
//! println!("{} ticks", song.ticks.len());
//!
//! // Or stream the note grid tick by tick
//! let stream = SongStream::from_path("bangers.nbs")?;
//! for tick in stream.ticks {
//!     let tick = tick?;
//!     println!("{}: {} note blocks", tick.tick, tick.layers.len());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! This crate does not write `.nbs` files, nor does it validate musical
//! semantics beyond what decoding requires. Out-of-range field values are
//! passed through as they appear in the file.

pub mod header;
pub mod serde;
pub mod song;
