//! Access code store adapters.
//!
//! ## Available Adapters
//!
//! - `InMemoryAccessCodeStore` - Single process, for tests and local runs
//! - `RedisAccessCodeStore` - Redis keys with native expiry, for production

mod in_memory;
mod redis;

pub use in_memory::InMemoryAccessCodeStore;
pub use redis::RedisAccessCodeStore;
