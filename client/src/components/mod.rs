//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Most sections are static layout over `content`. `gigs_section` and
//! `contact_section` read and write the feed and contact form signals provided
//! by `App`.

pub mod about_section;
pub mod contact_section;
pub mod gig_card;
pub mod gigs_section;
pub mod hero;
pub mod music_section;
pub mod site_footer;
pub mod site_header;
pub mod social_pill;
