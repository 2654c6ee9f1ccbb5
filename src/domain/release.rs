use semver::Version;
use std::fmt;

/// Coarse classification of how impactful a release is.
///
/// Inferred from the version number shape and the commit buckets; drives
/// the document subtitle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
    Major,
    Minor,
    Patch,
    Misc,
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReleaseType::Major => "major",
            ReleaseType::Minor => "minor",
            ReleaseType::Patch => "patch",
            ReleaseType::Misc => "misc",
        };
        write!(f, "{}", label)
    }
}

/// True for versions shaped like 1.0.0, 2.0.0, ... (nonzero major with zero
/// minor and patch). Such versions classify as major releases no matter
/// what the commits contain.
///
/// # Example
/// ```ignore
/// assert!(is_full_major(&Version::new(2, 0, 0)));
/// assert!(!is_full_major(&Version::new(2, 1, 0)));
/// assert!(!is_full_major(&Version::new(0, 0, 0)));
/// ```
pub fn is_full_major(version: &Version) -> bool {
    version.major > 0 && version.minor == 0 && version.patch == 0
}

/// True for the 0.0.0 placeholder some manifests carry before any release.
pub fn is_initial_placeholder(version: &Version) -> bool {
    version.major == 0 && version.minor == 0 && version.patch == 0
}

/// The version shown in the document heading and used for the output file
/// name. The 0.0.0 placeholder is presented as 1.0.0; everything else is
/// passed through unchanged.
pub fn display_version(version: &Version) -> Version {
    if is_initial_placeholder(version) {
        Version::new(1, 0, 0)
    } else {
        version.clone()
    }
}
