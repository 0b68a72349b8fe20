//! Compile-time build information, shown by `simulate --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
