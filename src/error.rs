use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("failed to decode statement, reason: `{0}`")]
    MalformedInput(String),
}
