use std::fmt;

use crate::grouping::error::GroupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Warning,
}

/// A message meant for whoever triggered the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMessage {
    pub level: ReportLevel,
    pub text: String,
}

impl ReportMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Warning,
            text: text.into(),
        }
    }

    /// Forwards the message to the `log` facade at the matching level.
    pub fn log(&self) {
        match self.level {
            ReportLevel::Info => log::info!("{}", self.text),
            ReportLevel::Warning => log::warn!("{}", self.text),
        }
    }
}

impl fmt::Display for ReportMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            ReportLevel::Info => "info",
            ReportLevel::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.text)
    }
}

impl From<GroupError> for ReportMessage {
    fn from(error: GroupError) -> Self {
        ReportMessage::warning(error.to_string())
    }
}
