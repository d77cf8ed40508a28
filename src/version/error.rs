use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvalidVersion {
    #[error("empty version value")]
    Empty,

    #[error("invalid semantic version {input:?}: {source}")]
    Syntax {
        input: String,
        #[source]
        source: semver::Error,
    },
}
