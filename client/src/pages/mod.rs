//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; `home` stacks the sections and delegates all
//! rendering to `components`.

pub mod home;
