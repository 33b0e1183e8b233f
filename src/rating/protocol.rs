//! Protocol classification.

use crate::config::HTTP_PENALTY;

/// How the scheme of a domain is rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolKind {
    /// No scheme given
    Missing,
    /// `http`
    Unsecured,
    /// `https`
    Secured,
    /// `ftp`
    FileTransfer,
    /// Anything else
    Unknown,
}

impl ProtocolKind {
    /// Classifies a protocol by exact, case-insensitive match.
    pub fn classify(protocol: &str) -> Self {
        match protocol.to_ascii_lowercase().as_str() {
            "" => ProtocolKind::Missing,
            "http" => ProtocolKind::Unsecured,
            "https" => ProtocolKind::Secured,
            "ftp" => ProtocolKind::FileTransfer,
            _ => ProtocolKind::Unknown,
        }
    }

    /// Score added for this kind.
    pub fn penalty(self) -> i64 {
        match self {
            ProtocolKind::Unsecured => HTTP_PENALTY,
            _ => 0,
        }
    }

    /// Report message for this kind.
    pub fn description(self) -> &'static str {
        match self {
            ProtocolKind::Missing => "No web protocol specified.",
            ProtocolKind::Unsecured => "Unsecured connection protocol.",
            ProtocolKind::Secured => "Secured connection protocol.",
            ProtocolKind::FileTransfer => "File transfer protocol.",
            ProtocolKind::Unknown => "Unknown protocol.",
        }
    }
}
