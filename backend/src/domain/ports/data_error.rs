//! Failure vocabulary shared by the read-side ports.

use super::define_port_error;

define_port_error! {
    /// Why a single item could not be fetched from an external source.
    ///
    /// `NotFound` means the source confirmed the item is absent; `Unavailable`
    /// means it could not be retrieved right now and a retry may succeed.
    pub enum DataError {
        /// The source confirmed the item does not exist.
        NotFound => "not found",
        /// The source failed or answered with something unusable.
        Unavailable => "unavailable",
    }
}
