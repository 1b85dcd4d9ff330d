//! The note grid: ticks, layers and the note blocks within them

use crate::serde::{ReadError, read_bytes, read_i16};
use std::io::Read;

/// A single note block in the song grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteBlock {
    /// The instrument of the note block
    pub instrument: i8,

    /// The key of the note block
    pub key: i8,

    /// The volume of the note block
    pub velocity: i8,

    /// The stereo position of the note block
    pub panning: i8,

    /// The fine pitch of the note block
    pub pitch: i16,

    /// The layer the note block is played from
    pub layer: i32,

    /// The position of the note block in the song, counting from left to
    /// right, top to bottom. Ids keep incrementing across tick boundaries.
    pub noteblock_id: usize,
}

/// One tick's worth of note blocks
///
/// A [`Tick`] always holds at least one [`NoteBlock`]; ticks that come up
/// empty during decoding are skipped, never handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// The position of the tick in the song timeline
    pub tick: i32,

    /// The note blocks at this tick, in increasing layer order
    pub layers: Vec<NoteBlock>,
}

/// The delta-run-length state machine behind both grid reading modes
///
/// Tick and layer positions are stored as signed 16-bit jumps from the
/// previous position, with a jump of 0 closing the current run: a zero tick
/// jump ends the whole grid, a zero layer jump ends the current tick.
pub(crate) struct TickDecoder {
    current_tick: i32,
    noteblocks: usize,
}

impl TickDecoder {
    pub(crate) fn new() -> Self {
        Self {
            current_tick: -1,
            noteblocks: 0,
        }
    }

    /// Decode tick records until one actually contains note blocks
    ///
    /// Returns [`None`] once the zero tick jump that closes the grid has
    /// been read. The decoder picks up exactly where the previous call left
    /// off, so alternating callers see one consistent pass over the grid.
    pub(crate) fn next_tick<R>(&mut self, mut reader: R) -> Result<Option<Tick>, ReadError>
    where
        R: Read,
    {
        loop {
            let jump = read_i16(&mut reader)?;
            if jump == 0 {
                return Ok(None);
            }

            self.current_tick += i32::from(jump);

            let mut layers = Vec::new();
            let mut current_layer = -1;

            loop {
                let jump = read_i16(&mut reader)?;
                if jump == 0 {
                    break;
                }

                current_layer += i32::from(jump);

                let bytes: [u8; 6] = read_bytes(&mut reader)?;
                layers.push(NoteBlock {
                    instrument: bytes[0] as i8,
                    key: bytes[1] as i8,
                    velocity: bytes[2] as i8,
                    panning: bytes[3] as i8,
                    pitch: i16::from_le_bytes([bytes[4], bytes[5]]),
                    layer: current_layer,
                    noteblock_id: self.noteblocks,
                });

                self.noteblocks += 1;
            }

            if !layers.is_empty() {
                return Ok(Some(Tick {
                    tick: self.current_tick,
                    layers,
                }));
            }
        }
    }
}

/// Iterator that reads the note grid one [`Tick`] at a time
///
/// Obtained from [`SongStream`](crate::song::SongStream). The iterator owns
/// the underlying reader and drops it as soon as the end of the grid or an
/// error is reached; dropping the iterator early releases it just the same,
/// so abandoning iteration never leaks the source. After the end or an
/// error, the iterator only yields [`None`].
pub struct Ticks<R> {
    reader: Option<R>,
    decoder: TickDecoder,
}

impl<R> Ticks<R>
where
    R: Read,
{
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            decoder: TickDecoder::new(),
        }
    }
}

impl<R> Iterator for Ticks<R>
where
    R: Read,
{
    type Item = Result<Tick, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;

        match self.decoder.next_tick(reader) {
            Ok(Some(tick)) => Some(Ok(tick)),
            Ok(None) => {
                self.reader = None;
                None
            }
            Err(err) => {
                self.reader = None;
                Some(Err(err))
            }
        }
    }
}
