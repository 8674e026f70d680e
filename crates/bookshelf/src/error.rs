use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No users file given. Pass --file, set BOOKSHELF_USERS or set users_file in the config")]
    NoUsersFile,

    #[error("Users file {0} must contain a JSON array of users")]
    InvalidUsersFile(PathBuf),

    #[error("Invalid page target: {0}. Use prev, next or a page number")]
    InvalidPageTarget(String),

    #[error("No control targets page {0}")]
    NoSuchPage(usize),

    #[error("Login modal did not open")]
    ModalNotOpen,
}
