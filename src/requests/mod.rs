//! Request types of the JD Union open API.
//!
//! Every operation has one request struct implementing
//! [`UnionRequest`](crate::traits::UnionRequest). Required vendor fields are plain members,
//! optional ones live in a flattened `*Options` struct (or make up the whole request when a
//! method has no required fields). Unset optional fields are left out of
//! `360buy_param_json`.

use url::Position;

use crate::JdUnionError;

/// Requests concerning activities and their bonuses.
pub mod activity;
/// Gift coupon and coupon requests.
pub mod coupon;
/// Goods and category queries.
pub mod goods;
/// Channel (渠道) relation management.
pub mod channel;
/// Order queries.
pub mod order;
/// Promotion link generation and intelligence queries.
pub mod promotion;
/// Promotion position management.
pub mod position;
/// Effect data statistics.
pub mod statistics;
/// User related requests.
pub mod user;

pub use activity::*;
pub use channel::*;
pub use coupon::*;
pub use goods::*;
pub use order::*;
pub use position::*;
pub use promotion::*;
pub use statistics::*;
pub use user::*;

/// Renders a prepared request as HTTP/1.1 text, for inspecting what would be sent.
pub trait RequestToHttpString {
    /// Converts the `reqwest::Request` to a HTTP string.
    fn to_http_string(&self) -> Result<String, JdUnionError>;
}

impl RequestToHttpString for reqwest::Request {
    fn to_http_string(&self) -> Result<String, JdUnionError> {
        let url = self.url();
        // Calls carry no body, the signed parameters travel in the query.
        let target = &url[Position::BeforePath..Position::AfterQuery];
        let mut lines = vec![format!("{} {} HTTP/1.1", self.method(), target)];

        if let Some(host) = url.host_str() {
            lines.push(match url.port() {
                Some(port) => format!("host: {host}:{port}"),
                None => format!("host: {host}"),
            });
        }
        for (name, value) in self.headers() {
            lines.push(format!("{}: {}", name, value.to_str()?));
        }
        // Terminates the head with an empty line.
        lines.extend([String::new(), String::new()]);

        Ok(lines.join("\r\n"))
    }
}
