//! Radiant Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Radiant layout
//! engine and its rendering surfaces:
//!
//! - **Identifiers**: String-interned node identifiers ([`identifier::Id`])
//! - **Colors**: CSS color parsing ([`color::Color`])
//! - **Geometry**: Points, sizes, bounding boxes and segments ([`geometry`] module)
//! - **Draw**: Stroke and text styles, text measurement, layers and the
//!   [`draw::Surface`] trait ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
