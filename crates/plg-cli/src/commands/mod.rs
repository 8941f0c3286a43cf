pub mod annotate;
pub mod branch;
pub mod collect;
pub mod dispatch;
pub mod expand;
pub mod export;
pub mod launch;
pub mod list;
pub mod shared;
pub mod show;
pub mod summarise;
