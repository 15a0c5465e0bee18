pub mod category;
pub mod envelope;
pub mod health;
pub mod product;
pub mod tags;

#[cfg(test)]
pub(crate) mod test_support;
