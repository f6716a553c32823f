/// Denomination of the chain native fee asset.
pub const NATIVE_DENOM: &str = "uscrt";
