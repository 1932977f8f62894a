//! Browser-side services: storage, wallet interop, HTTP and the swap widget.

pub mod jupiter;
pub mod rpc;
pub mod storage;
pub mod wallet;
