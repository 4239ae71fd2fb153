use thiserror::Error;

pub type GroupResult<T> = Result<T, GroupError>;

/// Reasons the grouping command aborts. Both are raised before the scene is
/// touched, so an aborted command leaves no trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GroupError {
    #[error("No objects selected")]
    EmptySelection,

    #[error("Could not compute the bounding box of the selection")]
    UndefinedBounds,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown pivot mode '{0}', expected one of: center, bottom, active")]
pub struct ParsePivotModeError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert!(format!("{}", GroupError::EmptySelection).contains("No objects"));
        assert!(format!("{}", GroupError::UndefinedBounds).contains("bounding box"));
        assert!(format!("{}", ParsePivotModeError("middle".into())).contains("'middle'"));
    }
}
