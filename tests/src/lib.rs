#[cfg(test)]
mod support;

mod monitor;
