//! CLI for parkm, the partitioned multi-start clustering of customer records.

mod commands;
pub mod utils;

use clap::Parser;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The random seed to use. If not provided, a random seed is drawn.
    #[arg(short('s'), long)]
    seed: Option<u64>,

    /// The name of the log-file to use.
    #[arg(short('l'), long, default_value = "parkm.log")]
    log_name: String,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = utils::configure_logger(&args.log_name)?;
    ftlog::info!("Log file: {log_path:?}");

    let seed = args.seed.unwrap_or_else(rand::random);
    ftlog::info!("Seed: {seed}");

    match args.command {
        Commands::Cluster {
            inp_path,
            no_headers,
            k,
            workers,
            num_runs,
            policy,
            seeding,
            out_path,
        } => {
            let records = match inp_path {
                Some(path) => parkm::io::read_records_from_path(path, !no_headers)?,
                None => parkm::io::read_records(std::io::stdin().lock(), !no_headers)?,
            };
            let config = commands::cluster::ClusterConfig {
                k,
                workers,
                num_runs,
                policy,
                seeding,
            };
            commands::cluster::cluster(&records, &config, seed, out_path.as_deref())
        }
        Commands::Generate { num_records, out_path } => commands::generate::generate(num_records, seed, out_path.as_deref()),
    }
}
