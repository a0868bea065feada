pub mod echo;
pub mod transport;
