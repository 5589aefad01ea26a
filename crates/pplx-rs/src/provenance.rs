// crates/pplx-rs/src/provenance.rs

//! Sources for the advisory `DATE`, `USER` and `WORKSTATION` stamps.

use crate::types::Provenance;
use chrono::Local;
use std::env;
use std::fs;

/// Supplies provenance values. Each one is independently optional; a `None`
/// simply leaves the corresponding attribute off the document.
pub trait ProvenanceSource {
    fn date(&self) -> Option<String>;
    fn user(&self) -> Option<String>;
    fn workstation(&self) -> Option<String>;
}

/// Reads provenance from the local clock and environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProvenance;

impl ProvenanceSource for SystemProvenance {
    fn date(&self) -> Option<String> {
        Some(Local::now().format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    fn user(&self) -> Option<String> {
        first_env(&["USER", "USERNAME"])
    }

    fn workstation(&self) -> Option<String> {
        first_env(&["HOSTNAME", "COMPUTERNAME"]).or_else(|| {
            fs::read_to_string("/etc/hostname")
                .ok()
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty())
        })
    }
}

/// A fixed set of values, e.g. the provenance of a previously loaded document.
impl ProvenanceSource for Provenance {
    fn date(&self) -> Option<String> {
        self.date.clone()
    }

    fn user(&self) -> Option<String> {
        self.user.clone()
    }

    fn workstation(&self) -> Option<String> {
        self.workstation.clone()
    }
}

fn first_env(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.is_empty())
}
