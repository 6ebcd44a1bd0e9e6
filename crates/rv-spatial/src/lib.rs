//! `rv-spatial`: road graph and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `RoadGraph` (CSR adjacency + names), `RoadGraphBuilder`     |
//! | [`router`]  | `Router` trait, `Route`, `BfsRouter`                        |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Route`.                |

pub mod error;
pub mod network;
pub mod router;


pub use error::{SpatialError, SpatialResult};
pub use network::{parse_edge, RoadGraph, RoadGraphBuilder, EDGE_SEPARATOR};
pub use router::{BfsRouter, Route, Router};
