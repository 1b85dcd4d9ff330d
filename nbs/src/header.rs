//! The metadata header at the start of every NBS file

use crate::serde::{ReadError, read_bytes, read_string};
use std::io::Read;

/// Song metadata, as laid out at the start of an `.nbs` file
///
/// The header is decoded once per file and never changes afterwards. Field
/// values are taken from the file as-is; nothing here is range-checked
/// (a `time_signature` outside 2-8 is passed through untouched).
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// The first two bytes of the file. These are 0 for every current format
    /// version; anything else probably means an older "classic" file, which
    /// starts with the song length instead.
    pub zeroes: i16,

    /// The version of the NBS format the song was saved in
    pub version: i8,

    /// The number of default instruments when the song was saved
    pub instrument_count: i8,

    /// The length of the song, measured in ticks
    pub song_length: i16,

    /// The last layer with at least one note block in it, or the last layer
    /// that had its name, volume or stereo panning changed
    pub layer_count: i16,

    /// The name of the song
    pub song_name: String,

    /// The author of the song
    pub song_author: String,

    /// The original author of the song
    pub original_song_author: String,

    /// The description of the song
    pub song_description: String,

    /// The tempo of the song multiplied by 100, measured in ticks per second
    pub song_tempo: i16,

    /// Whether auto-saving was enabled (0 or 1). Unused by recent versions
    /// of Open Note Block Studio.
    pub auto_save: i8,

    /// The number of minutes between auto-saves. Unused by recent versions
    /// of Open Note Block Studio.
    pub auto_save_duration: i8,

    /// The time signature of the song
    pub time_signature: i8,

    /// The number of minutes spent on the project
    pub minutes_spent: i32,

    /// The number of times the user left-clicked
    pub left_clicks: i32,

    /// The number of times the user right-clicked
    pub right_clicks: i32,

    /// The number of note blocks added over the lifetime of the project
    pub note_blocks_added: i32,

    /// The number of note blocks removed over the lifetime of the project
    pub note_blocks_removed: i32,

    /// The name of the `.mid` or `.schematic` file the song was imported
    /// from, if any
    pub import_file_name: String,

    /// Whether looping is on (0 or 1)
    pub loop_enabled: i8,

    /// The number of times to loop; 0 means infinite
    pub max_loop_count: i8,

    /// The tick to jump back to when looping
    pub loop_start_tick: i16,
}

impl Header {
    /// Deserialize a [`Header`] from an arbitrary I/O reader
    ///
    /// The header is a fixed sequence of packed integer sections and
    /// length-prefixed strings. Absent strings fall back to their documented
    /// defaults; a short read at any point fails the whole header.
    pub fn from_reader<R>(mut reader: R) -> Result<Self, ReadError>
    where
        R: Read,
    {
        let bytes: [u8; 8] = read_bytes(&mut reader)?;
        let zeroes = i16::from_le_bytes([bytes[0], bytes[1]]);
        let version = bytes[2] as i8;
        let instrument_count = bytes[3] as i8;
        let song_length = i16::from_le_bytes([bytes[4], bytes[5]]);
        let layer_count = i16::from_le_bytes([bytes[6], bytes[7]]);

        let song_name = read_string(&mut reader)?.unwrap_or_else(|| String::from("Untitled"));
        let song_author = read_string(&mut reader)?.unwrap_or_else(|| String::from("Unknown"));
        let original_song_author =
            read_string(&mut reader)?.unwrap_or_else(|| String::from("Unknown"));
        let song_description = read_string(&mut reader)?.unwrap_or_default();

        let bytes: [u8; 5] = read_bytes(&mut reader)?;
        let song_tempo = i16::from_le_bytes([bytes[0], bytes[1]]);
        let auto_save = bytes[2] as i8;
        let auto_save_duration = bytes[3] as i8;
        let time_signature = bytes[4] as i8;

        let bytes: [u8; 20] = read_bytes(&mut reader)?;
        let minutes_spent = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let left_clicks = i32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let right_clicks = i32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        let note_blocks_added = i32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);
        let note_blocks_removed = i32::from_le_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);

        let import_file_name = read_string(&mut reader)?.unwrap_or_default();

        let bytes: [u8; 4] = read_bytes(&mut reader)?;
        let loop_enabled = bytes[0] as i8;
        let max_loop_count = bytes[1] as i8;
        let loop_start_tick = i16::from_le_bytes([bytes[2], bytes[3]]);

        Ok(Self {
            zeroes,
            version,
            instrument_count,
            song_length,
            layer_count,
            song_name,
            song_author,
            original_song_author,
            song_description,
            song_tempo,
            auto_save,
            auto_save_duration,
            time_signature,
            minutes_spent,
            left_clicks,
            right_clicks,
            note_blocks_added,
            note_blocks_removed,
            import_file_name,
            loop_enabled,
            max_loop_count,
            loop_start_tick,
        })
    }

    /// The tempo of the song in ticks per second
    ///
    /// [`song_tempo`](Self::song_tempo) is stored multiplied by 100.
    pub fn tempo(&self) -> f32 {
        f32::from(self.song_tempo) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn header_bytes() -> Vec<u8> {
        let mut bytes = Vec::new();

        // zeroes, version, instrument count, song length, layer count
        bytes.extend_from_slice(&[0, 0, 5, 16, 11, 0, 2, 0]);

        for string in ["Test Song", "DGigsTV", "DGigsTV", "A test"] {
            bytes.extend_from_slice(&(string.len() as i32).to_le_bytes());
            bytes.extend_from_slice(string.as_bytes());
        }

        // tempo 500, auto save off, auto save duration, time signature
        bytes.extend_from_slice(&[0xF4, 0x01, 0, 10, 4]);

        for counter in [23_i32, 164, 68, 70, 2] {
            bytes.extend_from_slice(&counter.to_le_bytes());
        }

        // import file name (absent)
        bytes.extend_from_slice(&0_i32.to_le_bytes());

        // loop on, max loop count, loop start tick
        bytes.extend_from_slice(&[1, 3, 8, 0]);

        bytes
    }

    #[test]
    fn from_reader() {
        let header = Header::from_reader(Cursor::new(header_bytes())).unwrap();

        assert_eq!(
            header,
            Header {
                zeroes: 0,
                version: 5,
                instrument_count: 16,
                song_length: 11,
                layer_count: 2,
                song_name: String::from("Test Song"),
                song_author: String::from("DGigsTV"),
                original_song_author: String::from("DGigsTV"),
                song_description: String::from("A test"),
                song_tempo: 500,
                auto_save: 0,
                auto_save_duration: 10,
                time_signature: 4,
                minutes_spent: 23,
                left_clicks: 164,
                right_clicks: 68,
                note_blocks_added: 70,
                note_blocks_removed: 2,
                import_file_name: String::new(),
                loop_enabled: 1,
                max_loop_count: 3,
                loop_start_tick: 8,
            }
        );
    }

    #[test]
    fn absent_strings_fall_back_to_defaults() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&[0, 0, 5, 16, 11, 0, 2, 0]);
        for _ in 0..4 {
            bytes.extend_from_slice(&0_i32.to_le_bytes());
        }
        bytes.extend_from_slice(&[0xF4, 0x01, 0, 10, 4]);
        bytes.extend_from_slice(&[0; 20]);
        bytes.extend_from_slice(&0_i32.to_le_bytes());
        bytes.extend_from_slice(&[0; 4]);

        let header = Header::from_reader(Cursor::new(bytes)).unwrap();

        assert_eq!(header.song_name, "Untitled");
        assert_eq!(header.song_author, "Unknown");
        assert_eq!(header.original_song_author, "Unknown");
        assert_eq!(header.song_description, "");
        assert_eq!(header.import_file_name, "");
    }

    #[test]
    fn tempo() {
        let header = Header::from_reader(Cursor::new(header_bytes())).unwrap();

        assert_eq!(header.tempo(), 5.0);
    }

    #[test]
    fn truncation_fails_at_every_step() {
        let bytes = header_bytes();

        // Cutting the header off at any point must surface a short read,
        // whichever section the cut lands in
        for length in [0, 4, 10, 30, 44, 60, bytes.len() - 1] {
            assert!(matches!(
                Header::from_reader(Cursor::new(&bytes[..length])),
                Err(ReadError::ShortRead(_))
            ));
        }
    }
}
