//! Folio - typed site configuration for a portfolio and blog site.
//!
//! The page templates of the site read everything they need from here:
//! site and page metadata, navigation and social links, the hero and
//! subscribe blocks, and listing page sizes.
//!
//! | Module     | Purpose                                              |
//! |------------|------------------------------------------------------|
//! | `consts`   | Shipped site metadata, page metadata, links, socials |
//! | `data`     | Shipped [`SiteConfig`](config::SiteConfig) instance  |
//! | `config`   | Schema, `folio.toml` loading, validation             |
//! | `paginate` | Page-size resolution and listing slices              |
//! | `cli`      | `folio` command implementations                      |

pub mod cli;
pub mod config;
pub mod consts;
pub mod data;
pub mod logger;
pub mod paginate;
