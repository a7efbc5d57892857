use thiserror::Error;

pub type MeltResult<T> = Result<T, MeltError>;

#[derive(Error, Debug)]
pub enum MeltError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Protein {protein_id} has bad formatted reads: {what}")]
    MalformedRecord {
        protein_id: String,
        what: &'static str,
    },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
