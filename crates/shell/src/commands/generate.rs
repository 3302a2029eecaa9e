//! Generating synthetic customers.

use std::path::Path;

/// Generates `num_records` customers from `seed` and writes them as CSV to `out_path`, or to stdout.
///
/// # Errors
///
/// - If the output file could not be created or written.
pub fn generate(num_records: usize, seed: u64, out_path: Option<&Path>) -> Result<(), String> {
    ftlog::info!("Generating {num_records} customers with seed {seed}");
    let records = parkm::generate::random_customers(num_records, seed);

    match out_path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
            parkm::io::write_records(std::io::BufWriter::new(file), &records)?;
            ftlog::info!("Wrote {num_records} customers to {}", path.display());
        }
        None => parkm::io::write_records(std::io::stdout().lock(), &records)?,
    }

    Ok(())
}
