use assert_cmd::cargo_bin;
use std::io::Error;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const COMMAND_HEADER: &str = "op,renter,vehicle,days,load_kg,damaged,kwh";

/// The binary, with its rental log redirected into `dir`.
pub fn rental_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin!("fleet-rental"));
    cmd.arg("--log-file").arg(log_path(dir));
    cmd
}

pub fn log_path(dir: &Path) -> PathBuf {
    dir.join("rental_log.txt")
}

/// Writes a commands CSV with the standard header followed by `rows`.
pub fn write_commands(dir: &Path, rows: &[&str]) -> Result<PathBuf, Error> {
    let path = dir.join("commands.csv");
    let mut content = String::from(COMMAND_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    std::fs::write(&path, content)?;
    Ok(path)
}
