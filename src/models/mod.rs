pub mod task;
pub mod user;

pub use task::{Task, TaskInput, TaskListQuery, TaskSort, TaskStatus, TaskUpdate};
pub use user::User;
