//! The commands under the `parkm` CLI.

pub mod cluster;
pub mod generate;

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the best of many partitioned clustering runs over a CSV of customers.
    Cluster {
        /// The path to the input CSV. If not provided, the records are read from stdin.
        #[arg(short('i'), long)]
        inp_path: Option<PathBuf>,

        /// Treat the first row of the input as a record rather than a header.
        #[arg(long)]
        no_headers: bool,

        /// The number of clusters.
        #[arg(short('k'), long, default_value_t = 3)]
        k: usize,

        /// The number of workers, which is also the number of partitions.
        #[arg(short('w'), long, default_value_t = 6)]
        workers: usize,

        /// The number of runs to search over.
        #[arg(short('r'), long, default_value_t = 1000)]
        num_runs: usize,

        /// How the partial centroids of the workers are combined.
        #[arg(short('p'), long, value_enum, default_value_t = cluster::ShellPolicy::WorkerCount)]
        policy: cluster::ShellPolicy,

        /// How the centroids of each run are initialized.
        #[arg(short('S'), long, value_enum, default_value_t = cluster::ShellSeeding::Records)]
        seeding: cluster::ShellSeeding,

        /// Optional path of a JSON file to write the best result to.
        #[arg(short('o'), long)]
        out_path: Option<PathBuf>,
    },
    /// Generate a synthetic CSV of customers for testing and benchmarking.
    Generate {
        /// The number of customers to generate.
        #[arg(short('n'), long)]
        num_records: usize,

        /// The path to the output CSV. If not provided, the records are written to stdout.
        #[arg(short('o'), long)]
        out_path: Option<PathBuf>,
    },
}
