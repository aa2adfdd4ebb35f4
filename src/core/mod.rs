pub mod contact;
pub mod editor;
pub mod gateway;
pub mod session;
pub mod store;

pub use crate::domain::model::{Catalog, Category, MoveDirection, SaveStatus, Service};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
