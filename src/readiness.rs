use std::collections::BTreeSet;

use crate::error::ReadinessError;

/// Counted-completion barrier: the tick loop may start once every named
/// prerequisite has reported ready.
#[derive(Debug, Clone, Default)]
pub struct ReadinessGate {
    pending: BTreeSet<String>,
    ready: BTreeSet<String>,
}

impl ReadinessGate {
    pub fn new<I, S>(prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pending: prerequisites.into_iter().map(Into::into).collect(),
            ready: BTreeSet::new(),
        }
    }

    /// Records `name` as ready. Returns `true` when this call opened the gate.
    /// Reporting the same prerequisite twice is harmless.
    pub fn mark_ready(&mut self, name: &str) -> Result<bool, ReadinessError> {
        if self.ready.contains(name) {
            return Ok(false);
        }
        if !self.pending.remove(name) {
            return Err(ReadinessError::Unknown(name.to_string()));
        }
        self.ready.insert(name.to_string());
        Ok(self.pending.is_empty())
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn require_open(&self) -> Result<(), ReadinessError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(ReadinessError::Pending(self.pending.iter().cloned().collect()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gate_is_open() {
        let gate = ReadinessGate::new(Vec::<String>::new());
        assert!(gate.is_open());
        assert!(gate.require_open().is_ok());
    }

    #[test]
    fn opens_only_after_last_prerequisite() {
        let mut gate = ReadinessGate::new(["galaxy", "stars", "spectra"]);
        assert_eq!(gate.mark_ready("stars"), Ok(false));
        assert_eq!(gate.mark_ready("galaxy"), Ok(false));
        assert_eq!(gate.remaining(), 1);
        assert_eq!(
            gate.require_open(),
            Err(ReadinessError::Pending(vec!["spectra".to_string()]))
        );
        assert_eq!(gate.mark_ready("spectra"), Ok(true));
        assert!(gate.is_open());
    }

    #[test]
    fn duplicate_reports_do_not_reopen() {
        let mut gate = ReadinessGate::new(["shader"]);
        assert_eq!(gate.mark_ready("shader"), Ok(true));
        assert_eq!(gate.mark_ready("shader"), Ok(false));
    }

    #[test]
    fn unknown_prerequisite_is_an_error() {
        let mut gate = ReadinessGate::new(["planet"]);
        assert_eq!(
            gate.mark_ready("moon"),
            Err(ReadinessError::Unknown("moon".to_string()))
        );
        assert!(!gate.is_open());
    }
}
