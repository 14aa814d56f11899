//! Build-time metadata for the solver suite this front end ships with.
//!
//! The values here are resolved once when the suite is built and frozen
//! into the binary: downstream code queries them for conditional features
//! and diagnostic reporting, and may rely on them never changing for the
//! lifetime of the process. A capability that is absent is absent from
//! the set, which is not the same thing as a flag defaulting to false:
//! dependent code paths are compiled around the distinction.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A four-part component version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub tweak: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32, tweak: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            tweak,
        }
    }

    /// Parse a `major.minor.patch` or `major.minor.patch.tweak` string.
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(VersionError::Form(s.to_string()));
        }
        let mut components = [0u32; 4];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| VersionError::Component(part.to_string()))?;
        }
        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.tweak != 0 {
            write!(f, ".{}", self.tweak)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("expected `major.minor.patch` form, got `{0}`")]
    Form(String),
    #[error("invalid version component `{0}`")]
    Component(String),
}

/// The configuration the suite was compiled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildType {
    Release,
    Debug,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildType {
    pub fn label(self) -> &'static str {
        match self {
            BuildType::Release => "Release",
            BuildType::Debug => "Debug",
            BuildType::RelWithDebInfo => "RelWithDebInfo",
            BuildType::MinSizeRel => "MinSizeRel",
        }
    }
}

/// The threading backend the suite was built against. Exactly one is
/// selected at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThreadingInterface {
    None,
    Tinycthread,
    OpenMp,
}

impl ThreadingInterface {
    pub fn label(self) -> &'static str {
        match self {
            ThreadingInterface::None => "none",
            ThreadingInterface::Tinycthread => "tinycthread",
            ThreadingInterface::OpenMp => "openmp",
        }
    }
}

/// How the suite controls FPU rounding for directed rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    FloatingPointEnv,
    FloatingPointControl,
    MsControl,
}

impl RoundingMode {
    pub fn label(self) -> &'static str {
        match self {
            RoundingMode::FloatingPointEnv => "fenv",
            RoundingMode::FloatingPointControl => "fpcontrol",
            RoundingMode::MsControl => "mscontrol",
        }
    }
}

/// Optional solver-suite features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolverCapability {
    Presolve,
    Compression,
    LineEditing,
    ExactArithmetic,
    LpCrosscheck,
    ModelingLanguage,
    NonlinearInterface,
}

impl SolverCapability {
    pub const ALL: &'static [SolverCapability] = &[
        SolverCapability::Presolve,
        SolverCapability::Compression,
        SolverCapability::LineEditing,
        SolverCapability::ExactArithmetic,
        SolverCapability::LpCrosscheck,
        SolverCapability::ModelingLanguage,
        SolverCapability::NonlinearInterface,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SolverCapability::Presolve => "presolve",
            SolverCapability::Compression => "compression",
            SolverCapability::LineEditing => "line-editing",
            SolverCapability::ExactArithmetic => "exact-arithmetic",
            SolverCapability::LpCrosscheck => "lp-crosscheck",
            SolverCapability::ModelingLanguage => "modeling-language",
            SolverCapability::NonlinearInterface => "nonlinear-interface",
        }
    }
}

/// Solver-suite build record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolverBuild {
    pub build_type: BuildType,
    pub version: Version,
    pub api_version: u32,
    pub thread_safe: bool,
    pub threading: ThreadingInterface,
    pub rounding: RoundingMode,
    capabilities: &'static [SolverCapability],
}

impl SolverBuild {
    /// Whether the suite was built with the given capability.
    pub fn has(&self, capability: SolverCapability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn capabilities(&self) -> &'static [SolverCapability] {
        self.capabilities
    }

    fn absent(&self) -> impl Iterator<Item = SolverCapability> + '_ {
        SolverCapability::ALL
            .iter()
            .copied()
            .filter(|c| !self.has(*c))
    }
}

/// Optional presolve-library features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresolveCapability {
    QuadPrecision,
    ExactArithmetic,
    SparseLu,
    StandardHashmap,
    Boost,
    BoostIostreamsZlib,
    BoostIostreamsBzip2,
    TaskParallelism,
}

impl PresolveCapability {
    pub const ALL: &'static [PresolveCapability] = &[
        PresolveCapability::QuadPrecision,
        PresolveCapability::ExactArithmetic,
        PresolveCapability::SparseLu,
        PresolveCapability::StandardHashmap,
        PresolveCapability::Boost,
        PresolveCapability::BoostIostreamsZlib,
        PresolveCapability::BoostIostreamsBzip2,
        PresolveCapability::TaskParallelism,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PresolveCapability::QuadPrecision => "quad-precision",
            PresolveCapability::ExactArithmetic => "exact-arithmetic",
            PresolveCapability::SparseLu => "sparse-lu",
            PresolveCapability::StandardHashmap => "standard-hashmap",
            PresolveCapability::Boost => "boost",
            PresolveCapability::BoostIostreamsZlib => "boost-iostreams-zlib",
            PresolveCapability::BoostIostreamsBzip2 => "boost-iostreams-bzip2",
            PresolveCapability::TaskParallelism => "task-parallelism",
        }
    }
}

/// Presolve-library build record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresolveBuild {
    pub version: Version,
    /// Revision the library was built from, when recorded by the build.
    pub githash: Option<&'static str>,
    /// Version of the arithmetic library; present exactly when
    /// `ExactArithmetic` is.
    pub arithmetic_version: Option<&'static str>,
    capabilities: &'static [PresolveCapability],
}

impl PresolveBuild {
    /// Whether the library was built with the given capability.
    pub fn has(&self, capability: PresolveCapability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn capabilities(&self) -> &'static [PresolveCapability] {
        self.capabilities
    }

    fn absent(&self) -> impl Iterator<Item = PresolveCapability> + '_ {
        PresolveCapability::ALL
            .iter()
            .copied()
            .filter(|c| !self.has(*c))
    }
}

/// The solver-suite build this front end was produced for.
pub const SOLVER_BUILD: SolverBuild = SolverBuild {
    build_type: BuildType::Release,
    version: Version::new(8, 0, 3, 0),
    api_version: 104,
    thread_safe: true,
    threading: ThreadingInterface::None,
    rounding: RoundingMode::FloatingPointEnv,
    capabilities: &[
        SolverCapability::Presolve,
        SolverCapability::Compression,
        SolverCapability::ExactArithmetic,
        SolverCapability::ModelingLanguage,
        SolverCapability::NonlinearInterface,
    ],
};

/// The presolve-library build bundled with [`SOLVER_BUILD`].
pub const PRESOLVE_BUILD: PresolveBuild = PresolveBuild {
    version: Version::new(2, 1, 2, 0),
    githash: Some("2fe2543"),
    arithmetic_version: Some("6.2.0"),
    capabilities: &[
        PresolveCapability::ExactArithmetic,
        PresolveCapability::Boost,
        PresolveCapability::TaskParallelism,
    ],
};

fn label_list<T: Copy>(items: impl Iterator<Item = T>, label: impl Fn(T) -> &'static str) -> String {
    let labels: Vec<&str> = items.map(label).collect();
    if labels.is_empty() {
        "(none)".to_string()
    } else {
        labels.join(", ")
    }
}

/// Render a deterministic multi-line build report.
pub fn report() -> String {
    let solver = &SOLVER_BUILD;
    let presolve = &PRESOLVE_BUILD;
    let mut out = String::new();

    out.push_str(&format!(
        "solver {} (API {}, {} build)\n",
        solver.version,
        solver.api_version,
        solver.build_type.label()
    ));
    out.push_str(&format!(
        "  thread safety:       {}\n",
        if solver.thread_safe { "enabled" } else { "disabled" }
    ));
    out.push_str(&format!(
        "  threading interface: {}\n",
        solver.threading.label()
    ));
    out.push_str(&format!(
        "  rounding control:    {}\n",
        solver.rounding.label()
    ));
    out.push_str(&format!(
        "  with:                {}\n",
        label_list(solver.capabilities().iter().copied(), SolverCapability::label)
    ));
    out.push_str(&format!(
        "  without:             {}\n",
        label_list(solver.absent(), SolverCapability::label)
    ));

    match presolve.githash {
        Some(hash) => out.push_str(&format!("presolve {} [{}]\n", presolve.version, hash)),
        None => out.push_str(&format!("presolve {}\n", presolve.version)),
    }
    if let Some(arith) = presolve.arithmetic_version {
        out.push_str(&format!("  arithmetic library:  {}\n", arith));
    }
    out.push_str(&format!(
        "  with:                {}\n",
        label_list(
            presolve.capabilities().iter().copied(),
            PresolveCapability::label
        )
    ));
    out.push_str(&format!(
        "  without:             {}\n",
        label_list(presolve.absent(), PresolveCapability::label)
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_are_stable() {
        assert_eq!(SOLVER_BUILD, SOLVER_BUILD);
        assert_eq!(
            SOLVER_BUILD.has(SolverCapability::Presolve),
            SOLVER_BUILD.has(SolverCapability::Presolve)
        );
        assert_eq!(report(), report());
    }

    #[test]
    fn presence_and_absence_are_distinguishable() {
        assert!(SOLVER_BUILD.has(SolverCapability::ExactArithmetic));
        assert!(SOLVER_BUILD.has(SolverCapability::ModelingLanguage));
        assert!(!SOLVER_BUILD.has(SolverCapability::LineEditing));
        assert!(!SOLVER_BUILD.has(SolverCapability::LpCrosscheck));
        assert!(PRESOLVE_BUILD.has(PresolveCapability::TaskParallelism));
        assert!(!PRESOLVE_BUILD.has(PresolveCapability::QuadPrecision));
    }

    #[test]
    fn version_components_and_display() {
        assert_eq!(SOLVER_BUILD.version, Version::new(8, 0, 3, 0));
        assert_eq!(SOLVER_BUILD.version.to_string(), "8.0.3");
        assert_eq!(SOLVER_BUILD.api_version, 104);
        assert_eq!(PRESOLVE_BUILD.version.to_string(), "2.1.2");
        assert_eq!(Version::new(1, 2, 3, 4).to_string(), "1.2.3.4");
    }

    #[test]
    fn version_display_parse_roundtrip() {
        for version in [
            Version::new(8, 0, 3, 0),
            Version::new(2, 1, 2, 0),
            Version::new(1, 2, 3, 4),
        ] {
            assert_eq!(Version::parse(&version.to_string()), Ok(version));
        }
        assert!(Version::parse("8.0").is_err());
        assert!(Version::parse("8.0.x").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn arithmetic_version_tracks_exact_arithmetic() {
        assert_eq!(
            PRESOLVE_BUILD.arithmetic_version.is_some(),
            PRESOLVE_BUILD.has(PresolveCapability::ExactArithmetic)
        );
    }

    #[test]
    fn report_mentions_versions_and_revision() {
        let report = report();
        assert!(report.contains("solver 8.0.3"));
        assert!(report.contains("API 104"));
        assert!(report.contains("presolve 2.1.2"));
        assert!(report.contains("[2fe2543]"));
        assert!(report.contains("6.2.0"));
        assert!(report.contains("line-editing"));
    }
}
