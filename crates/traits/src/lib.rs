pub mod element;
pub mod scheduler;

pub use element::{
    HostError, MemoryDocument, MemoryElement, MemoryViewport, PageDocument, PageElement, Viewport,
};
pub use scheduler::{ManualScheduler, Task, TaskScheduler, TimerId};
