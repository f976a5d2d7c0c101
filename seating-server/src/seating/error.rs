//! Seating engine errors and their API mapping

use std::fmt;

use shared::error::{AppError, ErrorCode};
use shared::models::{MAX_PARTY_SIZE, MIN_PARTY_SIZE};
use shared::util::seats_phrase;
use thiserror::Error;

use crate::db::RepoError;

/// Why a party could not be seated at a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityShortfall {
    pub table_name: String,
    pub seats_needed: i32,
    pub seats_available: i32,
}

impl fmt::Display for CapacityShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Not enough room at {}: needs {}, only {} available",
            self.table_name,
            seats_phrase(self.seats_needed),
            seats_phrase(self.seats_available)
        )
    }
}

#[derive(Debug, Error)]
pub enum SeatingError {
    #[error("Guest {0} not found")]
    GuestNotFound(String),

    #[error("Table {0} not found")]
    TableNotFound(String),

    #[error("{0}")]
    CapacityExceeded(CapacityShortfall),

    #[error("A table named \"{0}\" already exists")]
    DuplicateName(String),

    #[error("Table name cannot be empty")]
    EmptyName,

    #[error("Guest name cannot be empty")]
    GuestNameEmpty,

    #[error("Party size must be between 1 and 20, got {0}")]
    PartySizeOutOfRange(i32),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] RepoError),
}

pub type SeatingResult<T> = Result<T, SeatingError>;

impl From<SeatingError> for AppError {
    fn from(err: SeatingError) -> Self {
        let message = err.to_string();
        match err {
            SeatingError::GuestNotFound(id) => {
                AppError::with_message(ErrorCode::GuestNotFound, message).with_detail("id", id)
            }
            SeatingError::TableNotFound(id) => {
                AppError::with_message(ErrorCode::TableNotFound, message).with_detail("id", id)
            }
            SeatingError::CapacityExceeded(shortfall) => {
                AppError::with_message(ErrorCode::TableCapacityExceeded, message)
                    .with_detail("table_name", shortfall.table_name)
                    .with_detail("seats_needed", shortfall.seats_needed)
                    .with_detail("seats_available", shortfall.seats_available)
            }
            SeatingError::DuplicateName(name) => {
                AppError::with_message(ErrorCode::TableNameExists, message).with_detail("name", name)
            }
            SeatingError::EmptyName => AppError::new(ErrorCode::TableNameEmpty),
            SeatingError::GuestNameEmpty => AppError::new(ErrorCode::GuestNameEmpty),
            SeatingError::PartySizeOutOfRange(size) => {
                AppError::with_message(ErrorCode::PartySizeOutOfRange, message)
                    .with_detail("party_size", size)
                    .with_detail("min", MIN_PARTY_SIZE)
                    .with_detail("max", MAX_PARTY_SIZE)
            }
            SeatingError::Validation(_) => AppError::validation(message),
            SeatingError::Store(_) => AppError::database(message),
        }
    }
}
