use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("CSV load failed ({0})")]
    CsvLoad(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LeagueError>;
