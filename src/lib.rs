//! Translate small shell-like provisioning scripts into declarative,
//! insertion-ordered configuration state.
//!
//! A shelly script is a sequence of familiar commands, one per line:
//!
//! ```text
//! #!shelly
//! yum install nginx
//! mkdir -m 0755 /srv/www
//! systemctl start nginx
//! ```
//!
//! [`render::render`] tokenizes each line, routes it through a
//! per-command interpreter, and folds the produced resources into a
//! single [`state::StateMap`] that remembers the order in which
//! resources first appeared. The result serializes to YAML or JSON in
//! that same order.

pub mod cli;
pub mod commands;
pub mod error;
pub mod interpret;
pub mod lexer;
pub mod logging;
pub mod render;
pub mod state;

pub use render::render;
