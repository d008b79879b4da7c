pub(crate) mod filter;
pub(crate) mod record;
pub(crate) mod store;
