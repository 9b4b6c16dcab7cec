use clap::{Parser, ValueEnum};
use fleet_rental::application::engine::RentalManager;
use fleet_rental::application::shared::SharedRentalManager;
use fleet_rental::domain::fleet::reference_fleet;
use fleet_rental::domain::ports::LogSinkBox;
use fleet_rental::infrastructure::file_log::{DEFAULT_LOG_FILE, FileLogSink};
use fleet_rental::infrastructure::system::{SystemClock, TracingLogSink};
use fleet_rental::interfaces::csv::command_reader::CommandReader;
use fleet_rental::interfaces::csv::fleet_reader::FleetReader;
use fleet_rental::interfaces::csv::fleet_writer::FleetWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{Level, debug};

#[derive(Clone, Copy, ValueEnum)]
enum ListFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input rental commands CSV file
    commands: PathBuf,

    /// Fleet seed CSV file. Without it the three-vehicle reference fleet is used.
    #[arg(long)]
    fleet: Option<PathBuf>,

    /// Rental log file, appended to on every run. `-` sends entries to stderr.
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Print the fleet listing after all commands ran
    #[arg(long)]
    list: bool,

    /// Format of the fleet listing
    #[arg(long, value_enum, default_value_t = ListFormat::Csv)]
    format: ListFormat,

    /// Emit debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_to_stderr = cli.log_file.as_os_str() == "-";
    let level = match (cli.verbose, log_to_stderr) {
        (true, _) => Level::DEBUG,
        (false, true) => Level::INFO,
        (false, false) => Level::ERROR,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_max_level(level)
        .init();

    let log: LogSinkBox = if log_to_stderr {
        Box::new(TracingLogSink)
    } else {
        // A log file that cannot be opened is fatal
        let sink = FileLogSink::open(&cli.log_file)?;
        debug!(path = %sink.path().display(), "appending to rental log");
        Box::new(sink)
    };

    let vehicles = match &cli.fleet {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            FleetReader::new(file)
                .vehicles()
                .collect::<fleet_rental::error::Result<Vec<_>>>()?
        }
        None => reference_fleet(),
    };

    let mut manager = RentalManager::new(log, Box::new(SystemClock));
    for vehicle in vehicles {
        manager.add_vehicle(vehicle);
    }
    let engine = SharedRentalManager::new(manager);

    let file = File::open(&cli.commands).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command in reader.commands() {
        match command {
            Ok(command) => match engine.execute(command).await {
                Ok(receipt) => println!("{receipt}"),
                Err(e) => eprintln!("Error processing command: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    if cli.list {
        let listings = engine.list_fleet().await;
        let stdout = io::stdout();
        let mut writer = FleetWriter::new(stdout.lock());
        match cli.format {
            ListFormat::Csv => writer.write_csv(&listings)?,
            ListFormat::Json => writer.write_json(&listings)?,
        }
    }

    Ok(())
}
