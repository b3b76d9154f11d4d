/// A type which wraps a single value of type `T` and can give it back.
///
/// The wrapped value may be shared with other owners, so mutable access and
/// unwrapping only succeed while the wrapper holds the sole handle.
pub trait Wrap<T>: Sized {
    fn inner(&self) -> &T;
    fn inner_mut(&mut self) -> Option<&mut T>;
    fn into_inner(self) -> Result<T, Self>;
}
