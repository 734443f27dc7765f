pub mod error;
pub mod schema;
pub mod storage;
pub mod types;

pub use error::Error;
pub use storage::{ArticleStore, ListOrder};
pub use types::{Article, ArticleInput};

pub type Result<T> = std::result::Result<T, Error>;
