mod create;
mod get;
mod list;

pub use create::project_create;
pub use get::project_get;
pub use list::project_list;
