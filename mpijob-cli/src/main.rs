//! mpijob - MPIJob manifest renderer
//!
//! Prints the manifest for one benchmark run to stdout.

fn main() -> anyhow::Result<()> {
    mpijob_cli::run()
}
