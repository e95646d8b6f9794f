//! Diesel schema for server state persistence.

diesel::table! {
    /// One status record per tracked server instance.
    server_state (id) {
        /// Instance identifier.
        id -> Text,
        /// Status flag, `false` by default.
        status -> Bool,
        /// Last update timestamp, defaults to insertion time.
        updated_at -> Timestamptz,
    }
}
