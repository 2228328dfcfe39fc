//! ID type wrappers for type safety.

mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::impl_id;

/// Identifier of a visitor record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisitorId(String);

/// Tenant identifier. Every repository call is scoped by one explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChurchId(String);

impl_id!(VisitorId, ChurchId);
