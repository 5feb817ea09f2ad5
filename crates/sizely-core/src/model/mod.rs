pub mod capacity;
pub mod combination;
pub mod payload;
pub mod size;
pub mod task_count;
