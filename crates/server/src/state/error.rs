use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Title is required")]
    TitleRequired,
    #[error("task `{0}` not found")]
    NotFound(u64),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
