use crate::domain::command::Command;
use crate::error::{RentalError, Result};
use std::io::Read;

/// Reads rental commands from a CSV source.
///
/// Expects the header `op,renter,vehicle,days,load_kg,damaged,kwh`; empty
/// fields deserialize to `None`.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and deserializes commands, one per row.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(RentalError::from))
    }
}
