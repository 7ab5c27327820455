pub mod engine;
pub mod notify;
pub mod subscription;

pub use engine::{TaskBoard, TaskBoardBuilder};
pub use notify::{LogNotify, Notify};
pub use subscription::ChangeFeedHandle;
