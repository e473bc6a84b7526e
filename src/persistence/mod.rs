//! Board text format
//!
//! One record per line, fields separated by a single space:
//! - `img/food/plate.png food` declares a category launcher and its name
//! - `>img/food/fries.png french fries` adds an item to the category above
//!
//! Everything after the first space is the name or spoken text. Reading
//! stops at the first malformed line and keeps what came before it.

pub mod record;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::board::Board;
use crate::category::Category;
use crate::error::PersistenceError;

pub use record::Record;

/// Apply every record from `reader` to `board`, returning how many
/// category declaration lines were applied. A key declared twice counts
/// twice. On error the categories read so far stay on the board.
pub fn read<R: BufRead>(board: &mut Board, reader: R) -> Result<usize, PersistenceError> {
    let mut loader = Loader {
        board,
        pending: None,
        loaded: 0,
    };
    let outcome = loader.feed(reader);
    loader.flush();
    outcome.map(|()| loader.loaded)
}

pub fn read_file(board: &mut Board, path: &Path) -> Result<usize, PersistenceError> {
    let file = File::open(path)?;
    read(board, BufReader::new(file))
}

/// Serialize every category except home, in store slot order.
///
/// Nothing is written if any record would read back differently.
pub fn write<W: Write>(board: &Board, mut out: W) -> Result<(), PersistenceError> {
    check(board)?;
    for_each_record(board, |record| Ok(writeln!(out, "{}", record)?))?;
    out.flush()?;
    Ok(())
}

/// Like [`write`], but the file is only created once the board is known to
/// be encodable
pub fn write_file(board: &Board, path: &Path) -> Result<(), PersistenceError> {
    check(board)?;
    let file = File::create(path)?;
    write(board, BufWriter::new(file))
}

/// Fail on the first record that cannot round-trip
pub fn check(board: &Board) -> Result<(), PersistenceError> {
    for_each_record(board, |record| match record.encoding_problem() {
        Some(reason) => Err(PersistenceError::Unencodable {
            record: record.to_string(),
            reason,
        }),
        None => Ok(()),
    })
}

fn for_each_record<F>(board: &Board, mut visit: F) -> Result<(), PersistenceError>
where
    F: FnMut(Record<'_>) -> Result<(), PersistenceError>,
{
    for (image_loc, category) in board.categories() {
        visit(Record::Category {
            image_loc,
            name: category.name(),
        })?;
        for (item_loc, text) in category.items() {
            visit(Record::Item {
                image_loc: item_loc,
                text,
            })?;
        }
    }
    Ok(())
}

/// Collects the items of the category being read before handing it to the
/// board
struct Loader<'b> {
    board: &'b mut Board,
    pending: Option<(String, Category)>,
    loaded: usize,
}

impl Loader<'_> {
    fn feed<R: BufRead>(&mut self, reader: R) -> Result<(), PersistenceError> {
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let number = index + 1;
            match Record::parse(&line) {
                Some(Record::Category { image_loc, name }) => {
                    self.flush();
                    self.pending = Some((image_loc.to_owned(), Category::new(name)));
                }
                Some(Record::Item { image_loc, text }) => match self.pending.as_mut() {
                    Some((_, category)) => category.add_item(image_loc, text),
                    None => return Err(PersistenceError::OrphanItem { line: number }),
                },
                None => return Err(PersistenceError::EmptyLocation { line: number }),
            }
        }
        Ok(())
    }

    fn flush(&mut self) {
        if let Some((image_loc, category)) = self.pending.take() {
            self.board.insert_category(&image_loc, category);
            self.loaded += 1;
        }
    }
}
