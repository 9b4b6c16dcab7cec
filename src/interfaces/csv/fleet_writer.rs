use crate::domain::fleet::VehicleListing;
use crate::error::Result;
use std::io::Write;

/// Writes fleet listings to any `Write` sink, as CSV or as a JSON array.
pub struct FleetWriter<W: Write> {
    writer: W,
}

impl<W: Write> FleetWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes `id,kind,name,daily_rate,rented,description` rows with a header.
    pub fn write_csv(&mut self, listings: &[VehicleListing]) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(&mut self.writer);
        for listing in listings {
            wtr.serialize(listing)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn write_json(&mut self, listings: &[VehicleListing]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, listings)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
