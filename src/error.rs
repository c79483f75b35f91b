/// Failures reported by the driver.
///
/// `E` is the transport error type of the [`DisplayInterface`](crate::interface::DisplayInterface)
/// in use. Interface errors are wrapped, never retried; validation failures
/// are raised before anything reaches the bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// A caller-supplied value is outside the chip-legal range: coordinates,
    /// rectangle ordering, parameter bytes, string extents.
    InvalidParameter,
    /// The operation conflicts with the configured state, such as a
    /// pre-packed 565 write while the chip is in a different color depth.
    InvalidConfig,
    /// The display has not been initialized yet.
    NotInitialized,
    /// The display was already initialized.
    AlreadyInitialized,
    /// The underlying interface failed.
    Interface(E),
}
