pub mod alert;
pub mod input;
pub mod monitor;
pub mod network;
pub mod prober;
