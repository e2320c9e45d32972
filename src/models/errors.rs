use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartKindError {
    #[error("Chart kind error: '{0}' is not one of all, bar, pie, line")]
    UnknownKind(String)
}
