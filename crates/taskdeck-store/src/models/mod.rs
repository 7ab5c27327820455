pub mod column;
pub mod task;

pub use column::{Column, ColumnColor, COLUMNS};
pub use task::{NewTask, Task, TaskPatch, TaskStatus};
