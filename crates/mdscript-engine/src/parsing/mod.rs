pub mod blocks;
pub mod rope;

#[cfg(test)]
mod tests;
