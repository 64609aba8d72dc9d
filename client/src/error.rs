use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("http error: `{0}`")]
    Http(#[from] reqwest::Error),
    #[error("api error `{code}`: `{message}`")]
    Api { code: String, message: String },
    #[error("success envelope without a data payload")]
    MissingData,
}
