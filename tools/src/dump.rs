use anyhow::{Context, Result};
use clap::Args;
use nbs::song::SongStream;
use std::path::PathBuf;

/// Print every note block in a song, tick by tick
#[derive(Args)]
#[clap(author, version)]
pub struct DumpArgs {
    /// The path to the song to dump
    path: PathBuf,
}

pub fn dump(args: &DumpArgs) -> Result<()> {
    let stream = SongStream::from_path(&args.path).context("Opening the song failed")?;

    println!(
        "{} by {}",
        stream.header.song_name, stream.header.song_author
    );

    let mut noteblocks = 0;
    let mut rows = 0;

    for tick in stream.ticks {
        let tick = tick.context("Reading the note grid failed")?;

        for note in &tick.layers {
            println!(
                "{:>5} | {:>3} | i{:02} key {:03} vel {:03}",
                tick.tick, note.layer, note.instrument, note.key, note.velocity
            );
        }

        noteblocks += tick.layers.len();
        rows += 1;
    }

    println!("{noteblocks} note blocks over {rows} ticks");

    Ok(())
}
