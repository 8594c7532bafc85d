//! 数据流：获取集合、分发变更、并发合并
//!
//! 每个请求拥有自己的 [`Session`](crate::session::Session) 与 [`FetchScope`]，
//! 请求结束（或客户端断开导致 handler 被丢弃）时，作用域内尚未完成的获取会被中止。

pub mod dispatcher;
pub mod fetcher;
pub mod join;
pub mod scope;

pub use dispatcher::MutationDispatcher;
pub use fetcher::{CollectionFetcher, FetchFallback, decode_collection};
pub use join::{JoinError, JoinSide, join_collections};
pub use scope::{FetchScope, ScopedFetch};
