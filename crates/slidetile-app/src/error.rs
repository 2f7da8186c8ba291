use std::io;

use crate::store::StoreError;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    #[display("I/O error: {_0}")]
    Io(io::Error),
    #[display("{_0}")]
    Store(StoreError),
}
