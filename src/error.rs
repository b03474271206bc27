use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("notebook {0:?} does not exist")]
    FileNotFound(PathBuf),
    #[error("unable to read notebook {path:?}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse notebook {path:?} as json")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected notebook layout: {0}")]
    Schema(&'static str),

    #[error("serializing notebook")]
    Serialize(#[from] serde_json::Error),
    #[error("unable to write notebook {path:?}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
