mod errors;
mod money;
#[cfg(test)]
mod tests;

pub use errors::MoneyError;
pub use money::Money;
