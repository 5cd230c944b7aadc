mod advisor;
mod area_email;
mod client;
mod kind;
mod product;

pub use advisor::{find_advisor, Advisor};
pub use area_email::{cc_recipients, AreaEmail};
pub use client::{find_client, Client};
pub use kind::RecordKind;
pub use product::Product;
