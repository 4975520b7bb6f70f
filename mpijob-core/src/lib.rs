//! mpijob Core - Benchmark Catalog and Profiles
//!
//! Maps a benchmark identifier plus the caller's flags to the values an
//! MPIJob manifest needs: command, image, process count and job name.
//!
//! # Example
//!
//! ```
//! use mpijob_core::{resolve, ProfileRequest};
//!
//! let profile = resolve(&ProfileRequest {
//!     name: "osu-allreduce",
//!     np: Some("16"),
//!     machine: "clusterA",
//! })
//! .unwrap();
//!
//! assert_eq!(profile.name(), "osu-allreduce-16procs");
//! assert_eq!(profile.nproc(), 16);
//! ```

mod catalog;
mod error;
mod profile;

pub use catalog::{
    Benchmark, CommandSpec, ProcessCount, ProfileRule, OSU_BENCH_IMAGE, OSU_MPI_PATH,
};
pub use error::{ProfileError, Result};
pub use profile::{derive_name, resolve, BenchmarkProfile, ProfileRequest};
