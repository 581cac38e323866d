//! `cc-registry` — a small registration service, independent of the
//! simulator.
//!
//! | Method | Path                 | Result                                      |
//! |--------|----------------------|---------------------------------------------|
//! | POST   | `/register`          | `{id, data}`; ids `1, 2, 3, …`              |
//! | GET    | `/registration/{id}` | stored body, or 404 `{"detail": "..."}`     |
//!
//! `POST /register/` (trailing slash) is accepted too.

pub mod api;
pub mod error;
pub mod model;
pub mod store;


pub use api::create_router;
pub use error::{RegistryError, RegistryResult};
pub use model::{Registration, RegistrationResponse};
pub use store::RegistrationStore;
