/// NEAR counterpart of the zero address: the all-zero implicit account.
pub const NULL_ACCOUNT_ID: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";
pub const SYSTEM_ACCOUNT_ID: &str = "system";

pub const HTTP_URL_SCHEMES: [&str; 2] = ["http://", "https://"];

pub const DEFAULT_PAGE_LIMIT: u32 = 50;
pub const MAX_PAGE_LIMIT: u32 = 100;
