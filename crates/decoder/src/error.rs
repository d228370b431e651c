use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed transaction protobuf envelope: {0}")]
    Proto(#[from] prost::DecodeError),

    #[error("transaction is missing its `{0}` field")]
    MissingField(&'static str),
}
