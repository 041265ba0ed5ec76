pub mod access;
pub mod session;

#[cfg(test)]
mod tests;
