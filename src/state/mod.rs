//! Shared client-side state.
//!
//! Plain structs held in `RwSignal` context values provided by the root
//! component: the session (identity slot) and the mirrored blog list.
//! Kept free of browser types so the logic unit-tests on the native
//! target.

pub mod blogs;
pub mod session;
