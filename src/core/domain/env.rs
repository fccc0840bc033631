//! Deployment environment.

use std::fmt;

/// Environment a managed secret belongs to.
///
/// Part of every resource name, so secrets never collide across environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Env {
    Qa,
    Dev,
    Stage,
    Prod,
    Test,
    Preview,
}

impl Env {
    /// All recognized environments.
    pub const ALL: [Env; 6] = [
        Env::Qa,
        Env::Dev,
        Env::Stage,
        Env::Prod,
        Env::Test,
        Env::Preview,
    ];

    /// Lowercase name as it appears in resource names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Env::Qa => "qa",
            Env::Dev => "dev",
            Env::Stage => "stage",
            Env::Prod => "prod",
            Env::Test => "test",
            Env::Preview => "preview",
        }
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
