use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("patch export parse error: {0}")]
    PatchParse(#[from] serde_json::Error),
    #[error("not a number: {0:?}")]
    BadNumber(String),
    #[error("rnbo runtime {0} is a debug build. re-export the patch with a release runtime")]
    DebugRuntime(String),
    #[error("patch has no parameter named {0:?}")]
    UnknownParameter(String),
    #[error("patch has no port tagged {0:?}")]
    UnknownPort(String),
}

pub type PanelResult<T> = Result<T, PanelError>;
