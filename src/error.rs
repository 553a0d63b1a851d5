//! Error type shared by the draw, storage and presentation layers.

/// Everything that can go wrong between choosing a cup and replaying its draw.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    /// The tier name is not one of Final, Mini, Mikro, Nano or Piko.
    #[error("unknown cup {0:?}")]
    UnknownCup(String),

    /// A draw was started before any cup was chosen.
    #[error("no cup selected")]
    NoCupSelected,

    /// Pool data came out inconsistent with the cup's rules.
    #[error("invalid pool data: {0}")]
    Pool(String),

    /// Nothing is stored under the draw key.
    #[error("no draw record found")]
    MissingRecord,

    /// The stored record decoded, but no draw could have produced it.
    #[error("inconsistent draw record: {0}")]
    InconsistentRecord(String),

    /// The stored record could not be decoded.
    #[error("malformed draw record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}
