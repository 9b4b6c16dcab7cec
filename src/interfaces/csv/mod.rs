pub mod command_reader;
pub mod fleet_reader;
pub mod fleet_writer;
