use std::fmt;

/// Contract violations in the assembly input.
///
/// Everything within the documented tolerances (empty screen sets, unknown
/// link targets, malformed fragments, ambiguous roots) is absorbed by the
/// pipeline; these variants only cover input the core cannot address at all.
#[derive(Debug)]
pub enum AssemblyError {
    /// Screen record has a blank name, or a name with no addressable content
    MissingScreenName { index: usize, name: String },

    /// Platform string did not match a known variant at the boundary
    UnknownPlatform(String),
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyError::MissingScreenName { index, name } => {
                if name.trim().is_empty() {
                    write!(f, "Screen at position {} has no name", index)
                } else {
                    write!(
                        f,
                        "Screen name '{}' (position {}) has no addressable content",
                        name, index
                    )
                }
            }
            AssemblyError::UnknownPlatform(value) => {
                write!(f, "Unknown platform '{}' (expected mobile or desktop)", value)
            }
        }
    }
}

impl std::error::Error for AssemblyError {}
