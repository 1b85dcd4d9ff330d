use anyhow::{Context, Result};
use clap::Args;
use nbs::song::SongStream;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Inspect .nbs files, or entire directories of them, for their metadata
#[derive(Args)]
#[clap(author, version)]
pub struct InspectArgs {
    /// The path(s) to inspect
    path: Vec<PathBuf>,

    /// Search folders recursively
    #[clap(short, long)]
    recursive: bool,
}

pub fn inspect(args: &InspectArgs) -> Result<()> {
    let paths: Vec<_> = args
        .path
        .iter()
        .flat_map(|path| {
            let mut walk_dir = WalkDir::new(path);
            if !args.recursive {
                walk_dir = walk_dir.max_depth(1);
            }

            walk_dir
        })
        .filter_map(Result::ok)
        .filter_map(get_path_if_valid)
        .collect();

    if let Some((last, rest)) = paths.split_last() {
        for path in rest {
            print(path)?;
            println!();
        }

        print(last)?;
    }

    Ok(())
}

fn print(path: &Path) -> Result<()> {
    // Only the header gets decoded; the note grid is never touched
    let stream = SongStream::from_path(path).context("Opening the song failed")?;
    let header = &stream.header;

    println!(
        "{:<32}v{} | {} ticks | {} layers | {:.2} t/s",
        path.file_name().unwrap().to_string_lossy(),
        header.version,
        header.song_length,
        header.layer_count,
        header.tempo(),
    );

    println!("  {} by {}", header.song_name, header.song_author);

    if header.original_song_author != "Unknown" {
        println!("  Originally by {}", header.original_song_author);
    }

    if !header.song_description.is_empty() {
        println!("  {}", header.song_description);
    }

    if !header.import_file_name.is_empty() {
        println!("  Imported from {}", header.import_file_name);
    }

    Ok(())
}

fn get_path_if_valid(entry: DirEntry) -> Option<PathBuf> {
    if !is_hidden(&entry) {
        let path = entry.path();
        if has_supported_extension(path) {
            return Some(path.to_owned());
        }
    }

    None
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

fn has_supported_extension(path: &Path) -> bool {
    match path.extension() {
        Some(ext) => ext == "nbs",
        None => false,
    }
}
