//! Shared enums used across qtiseed.
//! Includes the run `RunMode`, the `SessionIdentifierSource` labels written
//! into each document's context block, and the item `SessionStatus` marker.
use serde::Serialize;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    /// Plan only; nothing touches the filesystem
    DryRun,
    Write,
}

/// Label carried in the `sourceID` attribute of a `sessionIdentifier`
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SessionIdentifierSource {
    CandidateName,
    CandidateId,
    CandidateAccount,
    MaterialTitle,
}

impl SessionIdentifierSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionIdentifierSource::CandidateName => "candidateName",
            SessionIdentifierSource::CandidateId => "candidateId",
            SessionIdentifierSource::CandidateAccount => "candidateAccount",
            SessionIdentifierSource::MaterialTitle => "materialTitle",
        }
    }
}

/// Item session status; seeds carry no responses, so only `initial` is written
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SessionStatus {
    Initial,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Initial => "initial",
        }
    }
}
