//! Yew components rendered inside the mounted root.

pub(crate) mod board;
pub(crate) mod icon;

pub(crate) use board::Board;
pub(crate) use icon::FaIcon;
