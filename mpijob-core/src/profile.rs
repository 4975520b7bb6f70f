//! Profile Resolution
//!
//! Turns the raw flag values into a [`BenchmarkProfile`]. Resolution is a pure
//! function: it never touches the filesystem and reports every problem as a
//! [`ProfileError`].

use crate::catalog::{Benchmark, ProcessCount};
use crate::error::{ProfileError, Result};
use serde::Serialize;

/// Raw inputs for resolution, borrowed from the caller's configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileRequest<'a> {
    pub name: &'a str,
    pub np: Option<&'a str>,
    pub machine: &'a str,
}

/// Everything the manifest template needs for one job
///
/// Serialized field names are the keys templates refer to
/// (`Bench`, `Name`, `Image`, `Nproc`, `Command`, `Machine`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BenchmarkProfile {
    bench: Benchmark,
    name: String,
    image: String,
    nproc: u32,
    command: String,
    machine: String,
}

impl BenchmarkProfile {
    pub fn bench(&self) -> Benchmark {
        self.bench
    }

    /// Job name, `<id>-<n>procs`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn nproc(&self) -> u32 {
        self.nproc
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn machine(&self) -> &str {
        &self.machine
    }
}

/// Resolve a profile from raw flag values.
///
/// Checks run in a fixed order: `name`, `machine`, benchmark lookup, then the
/// process count for benchmarks that take it from `-np`.
pub fn resolve(request: &ProfileRequest<'_>) -> Result<BenchmarkProfile> {
    if request.name.is_empty() {
        return Err(ProfileError::MissingName);
    }
    if request.machine.is_empty() {
        return Err(ProfileError::MissingMachine);
    }

    let bench: Benchmark = request.name.parse()?;
    let rule = bench.rule();

    // The job name carries the count as typed (`08` stays `08`)
    let (nproc, name) = match rule.procs {
        ProcessCount::Fixed(n) => {
            if let Some(np) = request.np.filter(|np| !np.is_empty()) {
                tracing::debug!(bench = %bench, np, fixed = n, "ignoring -np for fixed-size benchmark");
            }
            (n, derive_name(bench, n))
        }
        ProcessCount::FromFlag => {
            let n = parse_np(bench, request.np)?;
            (n, derive_name(bench, request.np.unwrap_or_default()))
        }
    };

    if name.is_empty() {
        return Err(ProfileError::EmptyName);
    }

    let profile = BenchmarkProfile {
        bench,
        name,
        image: rule.image.to_string(),
        nproc,
        command: rule.command.command(),
        machine: request.machine.to_string(),
    };
    tracing::debug!(?profile, "resolved benchmark profile");

    Ok(profile)
}

/// Job name for a benchmark at a given size
pub fn derive_name(bench: Benchmark, procs: impl std::fmt::Display) -> String {
    format!("{}-{}procs", bench.id(), procs)
}

fn parse_np(bench: Benchmark, np: Option<&str>) -> Result<u32> {
    let value = match np {
        Some(v) if !v.is_empty() => v,
        _ => return Err(ProfileError::MissingProcessCount(bench)),
    };

    let parsed: i64 = value
        .parse()
        .map_err(|e: std::num::ParseIntError| ProfileError::InvalidProcessCount {
            value: value.to_string(),
            reason: e.to_string(),
        })?;

    if parsed <= 0 {
        return Err(ProfileError::NonPositiveProcessCount(parsed));
    }

    u32::try_from(parsed).map_err(|e| ProfileError::InvalidProcessCount {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::OSU_BENCH_IMAGE;

    fn request<'a>(name: &'a str, np: Option<&'a str>) -> ProfileRequest<'a> {
        ProfileRequest {
            name,
            np,
            machine: "clusterA",
        }
    }

    #[test]
    fn test_fixed_size_benchmarks_need_no_np() {
        let latency = resolve(&request("latency", None)).unwrap();
        assert_eq!(latency.bench(), Benchmark::Latency);
        assert_eq!(latency.name(), "latency-2procs");
        assert_eq!(latency.nproc(), 2);
        assert!(latency.command().ends_with("pt2pt/osu_latency"));
        assert_eq!(latency.image(), OSU_BENCH_IMAGE);
        assert_eq!(latency.machine(), "clusterA");

        let bandwidth = resolve(&request("bandwidth", None)).unwrap();
        assert_eq!(bandwidth.name(), "bandwidth-2procs");
        assert_eq!(bandwidth.nproc(), 2);
        assert!(bandwidth.command().ends_with("pt2pt/osu_bw"));
    }

    #[test]
    fn test_np_ignored_for_fixed_size_benchmarks() {
        for np in ["16", "abc", "-3"] {
            let profile = resolve(&request("latency", Some(np))).unwrap();
            assert_eq!(profile.name(), "latency-2procs");
            assert_eq!(profile.nproc(), 2);
        }
    }

    #[test]
    fn test_np_driven_benchmarks() {
        let cases = [
            ("osu-allreduce", "collective/osu_allreduce"),
            ("osu-alltoall", "collective/osu_alltoall"),
            ("hello", "echo hello world"),
        ];

        for (name, command) in cases {
            let profile = resolve(&request(name, Some("4"))).unwrap();
            assert_eq!(profile.nproc(), 4);
            assert_eq!(profile.name(), format!("{}-4procs", name));
            assert!(profile.name().ends_with("4procs"));
            assert!(profile.command().ends_with(command));
            assert_eq!(profile.image(), OSU_BENCH_IMAGE);
        }
    }

    #[test]
    fn test_missing_np_fails() {
        for name in ["osu-allreduce", "osu-alltoall", "hello"] {
            let bench: Benchmark = name.parse().unwrap();
            assert_eq!(
                resolve(&request(name, None)),
                Err(ProfileError::MissingProcessCount(bench))
            );
            assert_eq!(
                resolve(&request(name, Some(""))),
                Err(ProfileError::MissingProcessCount(bench))
            );
        }
    }

    #[test]
    fn test_non_numeric_np_fails() {
        for np in ["four", "4.0", " 4", "0x10"] {
            let err = resolve(&request("hello", Some(np))).unwrap_err();
            match err {
                ProfileError::InvalidProcessCount { value, .. } => assert_eq!(value, np),
                other => panic!("unexpected error for {:?}: {:?}", np, other),
            }
        }
    }

    #[test]
    fn test_non_positive_np_fails() {
        assert_eq!(
            resolve(&request("hello", Some("0"))),
            Err(ProfileError::NonPositiveProcessCount(0))
        );
        assert_eq!(
            resolve(&request("osu-alltoall", Some("-8"))),
            Err(ProfileError::NonPositiveProcessCount(-8))
        );
    }

    #[test]
    fn test_name_keeps_np_as_typed() {
        let padded = resolve(&request("hello", Some("08"))).unwrap();
        assert_eq!(padded.nproc(), 8);
        assert_eq!(padded.name(), "hello-08procs");

        let signed = resolve(&request("osu-allreduce", Some("+4"))).unwrap();
        assert_eq!(signed.nproc(), 4);
        assert_eq!(signed.name(), "osu-allreduce-+4procs");
    }

    #[test]
    fn test_derive_name() {
        assert_eq!(derive_name(Benchmark::Latency, 2), "latency-2procs");
        assert_eq!(derive_name(Benchmark::OsuAlltoall, "16"), "osu-alltoall-16procs");
    }

    #[test]
    fn test_np_beyond_u32_fails() {
        let err = resolve(&request("hello", Some("99999999999"))).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidProcessCount { .. }));
    }

    #[test]
    fn test_required_flags() {
        assert_eq!(
            resolve(&ProfileRequest {
                name: "",
                np: None,
                machine: "clusterA"
            }),
            Err(ProfileError::MissingName)
        );
        assert_eq!(
            resolve(&ProfileRequest {
                name: "latency",
                np: None,
                machine: ""
            }),
            Err(ProfileError::MissingMachine)
        );
    }

    #[test]
    fn test_unknown_benchmark_fails() {
        let err = resolve(&request("unknown-benchmark", Some("4"))).unwrap_err();
        assert_eq!(err, ProfileError::UnknownBenchmark("unknown-benchmark".into()));
        assert!(err.to_string().contains("unknown-benchmark"));
    }

    #[test]
    fn test_machine_passed_through_unmodified() {
        let profile = resolve(&ProfileRequest {
            name: "hello",
            np: Some("2"),
            machine: "Rack-07/GPU Nodes",
        })
        .unwrap();
        assert_eq!(profile.machine(), "Rack-07/GPU Nodes");
    }

    #[test]
    fn test_template_facing_keys() {
        let profile = resolve(&request("hello", Some("8"))).unwrap();
        let value = serde_json::to_value(&profile).unwrap();

        assert_eq!(value["Bench"], "hello");
        assert_eq!(value["Name"], "hello-8procs");
        assert_eq!(value["Nproc"], 8);
        assert_eq!(value["Command"], "echo hello world");
        assert_eq!(value["Machine"], "clusterA");
        assert_eq!(value["Image"], OSU_BENCH_IMAGE);
    }
}
