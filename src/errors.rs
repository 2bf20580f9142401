use thiserror::Error;

pub type CodingKeysResult<T> = Result<T, CodingKeysError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodingKeysError {
    #[error("Unknown coding key `{0}`")]
    UnknownKey(String),

    #[error("No coding key for field `{0}`")]
    UnknownField(String),
}
