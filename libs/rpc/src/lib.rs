//! gRPC contracts consumed by the gallery services.
//!
//! Code under `generated/` is produced by buf from `proto/` and checked in.

pub mod sso {
    pub mod v1 {
        include!("generated/sso/v1/sso.v1.rs");
    }
}
