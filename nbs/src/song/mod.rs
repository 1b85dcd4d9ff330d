//! Reading whole songs, greedily or tick by tick

mod ticks;

pub use ticks::{NoteBlock, Tick, Ticks};

use crate::{header::Header, serde::ReadError};
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};
use thiserror::Error;
use ticks::TickDecoder;

/// A fully decoded NBS song
///
/// [`Song::from_reader`] drains the whole file in one call, so the reader
/// can be dropped as soon as it returns:
///
/// ```no_run
/// # use nbs::song::Song;
/// let song = Song::from_path("bangers.nbs")?;
///
/// for tick in &song.ticks {
///     println!("{}: {} note blocks", tick.tick, tick.layers.len());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// For large files, or when only the header is of interest, consider
/// [`SongStream`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    /// The metadata header at the start of the file
    pub header: Header,

    /// Every non-empty tick in the song, in increasing tick order
    pub ticks: Vec<Tick>,
}

impl Song {
    /// Read an entire song from an arbitrary I/O reader
    ///
    /// The reader is consumed and dropped before this returns, on success
    /// and failure alike. A failure means the whole song is unusable; there
    /// is no partial result to recover.
    pub fn from_reader<R>(mut reader: R) -> Result<Self, ReadError>
    where
        R: Read,
    {
        let header = Header::from_reader(&mut reader)?;

        let mut decoder = TickDecoder::new();
        let mut ticks = Vec::new();
        while let Some(tick) = decoder.next_tick(&mut reader)? {
            ticks.push(tick);
        }

        Ok(Self { header, ticks })
    }

    /// Read an entire song from a path on disk (`.nbs`)
    pub fn from_path<P>(path: P) -> Result<Self, FromPathError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        let song = Self::from_reader(file)?;

        Ok(song)
    }
}

/// A song whose note grid has not been read yet
///
/// [`SongStream::from_reader`] decodes only the header; the grid is decoded
/// one [`Tick`] at a time as [`ticks`](Self::ticks) is advanced. Ownership
/// of the reader moves into the iterator, which keeps it open exactly as
/// long as iteration needs it.
///
/// ```no_run
/// # use nbs::song::SongStream;
/// let stream = SongStream::from_path("bangers.nbs")?;
/// println!("{} by {}", stream.header.song_name, stream.header.song_author);
///
/// for tick in stream.ticks {
///     let tick = tick?;
///     println!("{}: {} note blocks", tick.tick, tick.layers.len());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct SongStream<R> {
    /// The metadata header at the start of the file
    pub header: Header,

    /// The note grid, decoded lazily
    pub ticks: Ticks<R>,
}

impl<R> SongStream<R>
where
    R: Read,
{
    /// Decode the header and hand the reader over to a lazy tick iterator
    ///
    /// If the header cannot be read, the reader is dropped before the error
    /// is returned.
    pub fn from_reader(mut reader: R) -> Result<Self, ReadError> {
        let header = Header::from_reader(&mut reader)?;

        Ok(Self {
            header,
            ticks: Ticks::new(reader),
        })
    }
}

impl SongStream<File> {
    /// Open a song from a path on disk (`.nbs`) without reading its grid
    pub fn from_path<P>(path: P) -> Result<Self, FromPathError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        let stream = Self::from_reader(file)?;

        Ok(stream)
    }
}

/// Errors that might be returned from [`Song::from_path()`] and
/// [`SongStream::from_path()`]
#[derive(Debug, Error)]
pub enum FromPathError {
    /// Opening the file itself failed
    #[error("Opening the file failed")]
    FileOpen(#[from] io::Error),

    /// Decoding the opened file failed
    #[error("Reading the song from file failed")]
    Read(#[from] ReadError),
}
