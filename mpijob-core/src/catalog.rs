//! Benchmark Catalog
//!
//! The closed set of benchmarks a manifest can be rendered for, and the rule
//! each one uses to build its profile.

use crate::error::ProfileError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Install prefix of the OSU micro-benchmark binaries inside the image
pub const OSU_MPI_PATH: &str = "/opt/osu-micro-benchmarks/libexec/osu-micro-benchmarks/mpi/";

/// Container image shared by every benchmark in the catalog
pub const OSU_BENCH_IMAGE: &str =
    "image-registry.openshift-image-registry.svc:5000/mpi-benchmark/mpi-bench:osu-bench";

/// A recognized benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Benchmark {
    /// OSU point-to-point latency
    Latency,
    /// OSU point-to-point bandwidth
    Bandwidth,
    /// OSU MPI_Allreduce collective
    OsuAllreduce,
    /// OSU MPI_Alltoall collective
    OsuAlltoall,
    /// Plain greeting, for smoke-testing the launcher
    Hello,
}

/// Where the job's command comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSpec {
    /// Binary relative to [`OSU_MPI_PATH`]
    OsuBinary(&'static str),
    /// Literal shell command
    Shell(&'static str),
}

impl CommandSpec {
    /// Full command line as it goes into the manifest
    pub fn command(&self) -> String {
        match self {
            CommandSpec::OsuBinary(bin) => format!("{}{}", OSU_MPI_PATH, bin),
            CommandSpec::Shell(cmd) => (*cmd).to_string(),
        }
    }
}

/// Where the job's process count comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessCount {
    /// Fixed by the benchmark; `-np` is ignored
    Fixed(u32),
    /// Taken from `-np`
    FromFlag,
}

/// Recipe for turning a benchmark into a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileRule {
    pub command: CommandSpec,
    pub procs: ProcessCount,
    pub image: &'static str,
}

impl Benchmark {
    /// Every benchmark, in catalog order
    pub const ALL: [Benchmark; 5] = [
        Benchmark::Latency,
        Benchmark::Bandwidth,
        Benchmark::OsuAllreduce,
        Benchmark::OsuAlltoall,
        Benchmark::Hello,
    ];

    /// Identifier accepted by `-name`
    pub fn id(self) -> &'static str {
        match self {
            Benchmark::Latency => "latency",
            Benchmark::Bandwidth => "bandwidth",
            Benchmark::OsuAllreduce => "osu-allreduce",
            Benchmark::OsuAlltoall => "osu-alltoall",
            Benchmark::Hello => "hello",
        }
    }

    /// Profile rule for this benchmark
    pub fn rule(self) -> ProfileRule {
        let (command, procs) = match self {
            Benchmark::Latency => (
                CommandSpec::OsuBinary("pt2pt/osu_latency"),
                ProcessCount::Fixed(2),
            ),
            Benchmark::Bandwidth => (
                CommandSpec::OsuBinary("pt2pt/osu_bw"),
                ProcessCount::Fixed(2),
            ),
            Benchmark::OsuAllreduce => (
                CommandSpec::OsuBinary("collective/osu_allreduce"),
                ProcessCount::FromFlag,
            ),
            Benchmark::OsuAlltoall => (
                CommandSpec::OsuBinary("collective/osu_alltoall"),
                ProcessCount::FromFlag,
            ),
            Benchmark::Hello => (CommandSpec::Shell("echo hello world"), ProcessCount::FromFlag),
        };

        ProfileRule {
            command,
            procs,
            image: OSU_BENCH_IMAGE,
        }
    }

    /// Comma-separated list of every identifier, for diagnostics
    pub fn id_list() -> String {
        Self::ALL
            .iter()
            .map(|b| b.id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Benchmark {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.id() == s)
            .ok_or_else(|| ProfileError::UnknownBenchmark(s.to_string()))
    }
}
