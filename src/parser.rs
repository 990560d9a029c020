pub(crate) mod types;
pub(crate) mod xml;
