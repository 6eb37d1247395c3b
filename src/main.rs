use boardpass::{
    Airport, BoardingPass, BoardingPassError, Channel, Flight, Passenger, RenderConfig, RenderEnv,
    write_artifacts_for,
};
use chrono::{Duration, Local, NaiveTime};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Renders boarding passes for one or all check-in channels.
#[derive(Parser, Debug)]
#[command(name = "boardpass", version, about)]
struct Args {
    /// Directory the passes are written to.
    #[arg(long, default_value = "boarding-passes")]
    out_dir: PathBuf,

    /// airport-counter, kiosk, desktop or mobile. Every channel when omitted.
    #[arg(long)]
    channel: Option<Channel>,

    /// JSON booking (flight, passenger, pnr, seat, seq_no, gate). A sample
    /// booking is used when omitted.
    #[arg(long)]
    booking: Option<PathBuf>,

    /// JSON render configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the check-in instruction text.
    #[arg(long)]
    resources: Option<PathBuf>,
}

/// Tomorrow's 9W 465 from Mumbai to Chennai.
fn sample_pass() -> BoardingPass {
    let tomorrow = Local::now().date_naive() + Duration::days(1);
    let departure = tomorrow.and_time(NaiveTime::from_hms_opt(9, 30, 0).unwrap_or_default());
    let flight = Flight::new(
        "9W",
        "465",
        Airport::new("BOM", "Mumbai"),
        Airport::new("MAA", "Chennai"),
        departure,
        2,
    );
    let passenger = Passenger::new("First", "Last", "first.last@example.com", "Economy");
    BoardingPass::new(flight, passenger, "A1B2C3", "10D", "0018")
}

fn main() -> Result<(), BoardingPassError> {
    env_logger::init();
    let args = Args::parse();

    let mut builder = RenderEnv::builder();
    if let Some(path) = &args.config {
        builder = builder.with_config(RenderConfig::from_json_str(&fs::read_to_string(path)?)?);
    }
    if let Some(dir) = &args.resources {
        builder = builder.with_resource_dir(dir);
    }
    let env = builder.build()?;

    let (pass, sample) = match &args.booking {
        Some(path) => (serde_json::from_str::<BoardingPass>(&fs::read_to_string(path)?)?, false),
        None => (sample_pass(), true),
    };

    let channels = match args.channel {
        Some(channel) => vec![channel],
        None => Channel::ALL.to_vec(),
    };

    for channel in channels {
        // the sample booking only knows its gate at the airport
        let pass = match channel {
            Channel::AirportCounter | Channel::Kiosk if sample => pass.clone().with_gate("45C"),
            _ => pass.clone(),
        };
        for path in write_artifacts_for(&pass, &env, channel, &args.out_dir)? {
            println!("{channel}: {}", path.display());
        }
    }
    Ok(())
}
