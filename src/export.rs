//! Collection export.
//!
//! Layout under the export root:
//!
//! ```text
//! <root>/<collection>/collection.json        every record, in index order
//! <root>/<collection>/cards/<NNN_name>.json  one record per card
//! ```
//!
//! The render tool reads the per-card files; `collection.json` is for
//! everything else.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cards::{Card, CardRecord};
use crate::error::Result;
use crate::generation::Collection;

/// Write a collection to `root`, returning the collection directory.
pub fn export_collection(collection: &Collection, root: &Path) -> Result<PathBuf> {
    let dir = root.join(&collection.name);
    let cards_dir = dir.join("cards");
    fs::create_dir_all(&cards_dir)?;

    let records: Vec<CardRecord> = collection.cards().iter().map(Card::to_record).collect();

    for record in &records {
        let stem = record.image_file.trim_end_matches(".png");
        write_json(&cards_dir.join(format!("{stem}.json")), record)?;
    }
    write_json(&dir.join("collection.json"), &records)?;

    info!(
        collection = %collection.name,
        cards = records.len(),
        path = %dir.display(),
        "collection exported"
    );
    Ok(dir)
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// Read the records written by [`export_collection`].
pub fn load_records(collection_dir: &Path) -> Result<Vec<CardRecord>> {
    let file = File::open(collection_dir.join("collection.json"))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
