// Constants loaded from the environment. `.env` files are picked up by
// dotenvy before these are first read.

use std::env;

lazy_static::lazy_static! {
    /// Base URL of the AI backend. Defaults to the empty string, which makes
    /// requests go to a relative `/api/task` path.
    pub static ref AI_API_URL: String = env::var("AI_API_URL").unwrap_or_default();
}
