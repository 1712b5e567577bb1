#![warn(missing_docs)]
#![crate_name = "jd_union_rs"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # JD Union Client
//!
//! `jd_union_rs` is an async client for the JD Union (京东联盟) open API. It signs every call
//! with the md5 scheme of the JD open platform and unwraps the per-method response
//! envelope.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jd_union_rs::{JdUnionClient, UnionResponse};
//! use jd_union_rs::requests::GoodsQuery;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = JdUnionClient::builder()
//!         .app_key("my-app-key")
//!         .secret("my-secret")
//!         .build();
//!
//!     let query = GoodsQuery::builder().keyword("键盘".to_string()).page_size(10).build();
//!     match client.goods_query(query).await.expect("request failed") {
//!         UnionResponse::Success(payload) => println!("{:#?}", payload),
//!         UnionResponse::Error(error) => eprintln!("rejected: {}", error),
//!     }
//! }
//! ```
//!
//! Vendor side rejections (bad signature, invalid parameters, rate limits) are not Rust
//! errors, they come back as [`UnionResponse::Error`]. Only transport, timeout and parse
//! failures surface as [`error::JdUnionError`].

extern crate md5;
extern crate reqwest;
extern crate serde;
extern crate serde_json;
extern crate self as jd_union_rs;

/// Module containing the typed operations of the client.
pub mod api;
/// Module containing the client.
pub mod client;
/// Module containing the error type.
pub mod error;
/// Module containing the common request parameters.
pub mod params;
/// Module containing the request types.
pub mod requests;
/// Module containing the response envelope.
pub mod responses;
/// Module containing the request signature.
pub mod sign;
/// Module containing traits.
pub mod traits;

mod credentials;

pub use async_trait::async_trait;
pub use client::{JdUnionClient, DEFAULT_ENDPOINT};
pub use credentials::Credentials;
pub use error::JdUnionError;
pub use jd_union_rs_derive::UnionRequest;
pub use params::{CommonParameters, SignedParameters};
pub use requests::RequestToHttpString;
pub use responses::{response_field_name, ErrorResponse, UnionResponse};
pub use serde_json::Value;
pub use sign::Sign;
pub use traits::UnionRequest;

/// Result type for the jd-union-rs crate.
pub type UnionResult<T> = std::result::Result<T, error::JdUnionError>;
