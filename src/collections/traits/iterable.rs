/// Ordered visitation over a container's elements.
///
/// The visitor receives each element together with its position, in the container's natural
/// order. Taking the visitor as `&mut dyn FnMut` keeps the trait object safe, so conversion code
/// can accept any `&dyn Iterable<T>` as a source.
pub trait Iterable<T> {
    /// Calls `visit` once per element, in order, with the element and its index.
    fn for_each(&self, visit: &mut dyn FnMut(&T, usize));

    /// Returns the index of the first element comparing equal to `element` under the container's
    /// comparator, or [`None`] if no element matches.
    fn index_of(&self, element: &T) -> Option<usize>;
}
