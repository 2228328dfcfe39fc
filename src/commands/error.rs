/// Centralized error mapping for commands.
///
/// Every command reports failures through this function, so a richer error
/// type can replace the `String` in one place.
pub fn map_err(err: anyhow::Error) -> String {
    err.to_string()
}
