#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Location could not be empty.")]
    EmptyLocation,
    #[fail(display = "URL({}) is malformed: {}.", _0, _1)]
    MalformedUrl(String, &'static str),
    #[fail(display = "Fallback prefix could not be empty.")]
    EmptyFallback,
    #[fail(display = "Root path could not be empty.")]
    EmptyRoot,
    #[fail(display = "Shortcut {} is malformed: {}.", _0, _1)]
    MalformedShortcut(String, &'static str),
    #[fail(display = "Unsupported schema {}.", _0)]
    UnsupportedSchema(String),
    #[fail(display = "{}", _0)]
    Network(String),
    #[fail(display = "Resource at {} has no content.", _0)]
    EmptyStream(String),
    #[fail(display = "Undefined path {}.", _0)]
    FileNotFound(String),
    #[fail(display = "{}", _0)]
    IO(::std::io::Error),
    #[fail(display = "{}", _0)]
    Json(::serde_json::Error),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<::std::io::Error> for Error {
    fn from(err: ::std::io::Error) -> Self {
        Error::IO(err)
    }
}

impl From<::serde_json::Error> for Error {
    fn from(err: ::serde_json::Error) -> Self {
        Error::Json(err)
    }
}
