pub(crate) type TableResult<T> = Result<T, TableError>;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("table error: backend {0:?} already exists")]
    AlreadyExists(String),

    #[error("table error: backend {0:?} not found")]
    NotFound(String),

    #[error("table error: no backends")]
    EmptyTable,

    #[error("table error: permutations exhausted with {filled} of {size} slots filled")]
    Inconsistent { filled: usize, size: usize },
}

impl TableError {
    pub(crate) fn already_exists(backend: &(impl AsRef<[u8]> + ?Sized)) -> Self {
        TableError::AlreadyExists(String::from_utf8_lossy(backend.as_ref()).into_owned())
    }

    pub(crate) fn not_found(backend: &(impl AsRef<[u8]> + ?Sized)) -> Self {
        TableError::NotFound(String::from_utf8_lossy(backend.as_ref()).into_owned())
    }
}
