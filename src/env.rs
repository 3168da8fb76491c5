//! Where `BOARD_*` settings come from.
//!
//! The binary reads the process environment. Unit tests build an [`Env`]
//! from a fixed table instead, so config layering never mutates global
//! process state.

use std::collections::HashMap;
use std::env::VarError;

#[derive(Clone, Debug)]
enum Lookup {
    Process,
    Table(HashMap<String, String>),
}

/// Read-only view of environment variables.
#[derive(Clone, Debug)]
pub struct Env {
    lookup: Lookup,
}

impl Env {
    /// Read from the process environment.
    pub fn real() -> Self {
        Self {
            lookup: Lookup::Process,
        }
    }

    /// Read from `vars` only.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        let table = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self {
            lookup: Lookup::Table(table),
        }
    }

    pub fn var(&self, name: &str) -> Result<String, VarError> {
        match &self.lookup {
            Lookup::Process => std::env::var(name),
            Lookup::Table(table) => table.get(name).cloned().ok_or(VarError::NotPresent),
        }
    }

    /// A setting value. Blank counts as unset.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name).ok().filter(|v| !v.trim().is_empty())
    }

    /// Presence flag such as `NO_COLOR`: any value, even empty, turns it on.
    pub fn flag(&self, name: &str) -> bool {
        self.var(name).is_ok()
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}
